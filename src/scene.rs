//! Scene state machine and per-frame dispatch.
//!
//! The controller owns the session state and the cosmetic layer, consumes
//! one [`FrameInput`] per display frame and hands back the [`Command`]s the
//! shell must execute (audio, stats persistence). It never touches the
//! platform directly, which keeps every transition testable on native.

use std::mem;

use glam::Vec2;

use crate::Viewport;
use crate::assets::AssetSource;
use crate::audio::Sound;
use crate::fx::Effects;
use crate::fx::animations::MenuBounce;
use crate::layout::{self, OverlayAction};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::stats::{OutcomeSummary, PlayerStats};
use crate::view::{self, Renderer};

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    Menu,
    HowTo,
    Stats,
    Credits,
    Game,
}

/// The four main-menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    HowTo,
    Stats,
    Credits,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Start,
        MenuItem::HowTo,
        MenuItem::Stats,
        MenuItem::Credits,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "START GAME",
            MenuItem::HowTo => "HOW TO PLAY",
            MenuItem::Stats => "STATISTICS",
            MenuItem::Credits => "CREDITS",
        }
    }
}

/// Discrete key presses the scenes react to. Held movement keys travel
/// separately as booleans on [`FrameInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Space,
    Escape,
}

/// Everything the shell collected since the previous frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position in canvas pixels, if it moved.
    pub pointer: Option<Vec2>,
    /// Click positions, oldest first.
    pub clicks: Vec<Vec2>,
    /// Discrete presses, oldest first.
    pub keys: Vec<Key>,
    pub move_left: bool,
    pub move_right: bool,
}

/// Side effects for the shell to run after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Sound),
    StartMusic,
    StopMusic,
    /// Persist a finished session's score into the stats store.
    RecordOutcome { score: u32 },
}

/// Menu selection state. Keyboard and pointer compete for the highlight;
/// whichever moved last wins, and pointer hover drops keyboard mode.
#[derive(Debug, Clone)]
pub struct MenuState {
    selected: Option<usize>,
    keyboard: bool,
    hover: Option<usize>,
    pub bounce: MenuBounce,
}

impl MenuState {
    fn new() -> Self {
        Self {
            selected: None,
            keyboard: false,
            hover: None,
            bounce: MenuBounce::new(MenuItem::ALL.len()),
        }
    }

    /// Move the keyboard selection, entering keyboard mode. An unset
    /// selection starts at the end the movement came from; otherwise the
    /// selection wraps at both ends.
    pub fn move_selection(&mut self, delta: i32) {
        self.keyboard = true;
        let len = MenuItem::ALL.len();
        self.selected = Some(match self.selected {
            None => {
                if delta > 0 {
                    0
                } else {
                    len - 1
                }
            }
            Some(current) => (current as i32 + delta).rem_euclid(len as i32) as usize,
        });
    }

    /// Out-of-range indices are rejected without touching the selection.
    pub fn set_selected(&mut self, index: Option<usize>) {
        match index {
            None => self.selected = None,
            Some(i) if i < MenuItem::ALL.len() => self.selected = Some(i),
            Some(_) => {}
        }
    }

    /// Leave keyboard mode and drop the selection with it.
    pub fn clear_keyboard(&mut self) {
        self.keyboard = false;
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The item drawn highlighted: keyboard selection in keyboard mode,
    /// pointer hover otherwise.
    pub fn highlighted(&self) -> Option<usize> {
        if self.keyboard { self.selected } else { self.hover }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the whole game: scene, session, effects, menu and cached stats.
pub struct SceneController {
    scene: SceneId,
    game: GameState,
    effects: Effects,
    menu: MenuState,
    stats: PlayerStats,
    last_outcome: Option<OutcomeSummary>,
    pointer: Vec2,
    commands: Vec<Command>,
}

impl SceneController {
    pub fn new(seed: u64) -> Self {
        Self {
            scene: SceneId::Menu,
            game: GameState::new(seed),
            effects: Effects::new(seed),
            menu: MenuState::new(),
            stats: PlayerStats::default(),
            last_outcome: None,
            pointer: Vec2::ZERO,
            commands: Vec::new(),
        }
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// Swap in fresh aggregates, e.g. after the remote refresh lands.
    pub fn set_stats(&mut self, stats: PlayerStats) {
        self.stats = stats;
    }

    pub fn last_outcome(&self) -> Option<OutcomeSummary> {
        self.last_outcome
    }

    /// Whether the cached pointer is over something clickable, for the
    /// shell's cursor styling.
    pub fn pointer_hot(&self, vp: Viewport) -> bool {
        match self.scene {
            SceneId::Menu => self.menu.highlighted().is_some(),
            SceneId::HowTo | SceneId::Stats | SceneId::Credits => {
                layout::back_rect(layout::panel_rect(self.scene, vp)).contains(self.pointer)
            }
            SceneId::Game => {
                if self.game.paused {
                    layout::pause_rows(vp)
                        .iter()
                        .any(|row| row.rect().contains(self.pointer))
                } else if self.game.over {
                    layout::over_rows(vp)
                        .iter()
                        .any(|row| row.rect().contains(self.pointer))
                } else {
                    false
                }
            }
        }
    }

    /// Pause a running session without input, e.g. when the tab hides.
    pub fn auto_pause(&mut self) {
        if self.scene == SceneId::Game && self.game.running() {
            self.game.paused = true;
            self.commands.push(Command::StopMusic);
        }
    }

    /// Advance one display frame and return the shell commands it produced.
    pub fn frame(
        &mut self,
        input: &FrameInput,
        vp: Viewport,
        assets: &dyn AssetSource,
        now_ms: f64,
        dt_ms: f64,
    ) -> Vec<Command> {
        if let Some(pointer) = input.pointer {
            self.pointer = pointer;
        }

        match self.scene {
            SceneId::Menu => self.frame_menu(input, vp),
            SceneId::HowTo | SceneId::Stats | SceneId::Credits => self.frame_panel(input, vp),
            SceneId::Game => self.frame_game(input, vp, assets, now_ms, dt_ms),
        }

        mem::take(&mut self.commands)
    }

    /// Render the current scene. Pure read; all mutation happens in
    /// [`SceneController::frame`].
    pub fn draw(&self, r: &mut dyn Renderer, assets: &dyn AssetSource, vp: Viewport, now_ms: f64) {
        match self.scene {
            SceneId::Menu => {
                view::menu::draw_menu(r, assets, vp, &self.menu, &self.effects.field, now_ms)
            }
            SceneId::HowTo => view::menu::draw_howto(r, assets, vp, self.pointer),
            SceneId::Stats => view::menu::draw_stats(r, vp, &self.stats, self.pointer),
            SceneId::Credits => view::menu::draw_credits(r, assets, vp, self.pointer),
            SceneId::Game => view::game::draw(
                r,
                assets,
                vp,
                &self.game,
                &self.effects,
                self.last_outcome,
                self.pointer,
                now_ms,
            ),
        }
    }

    fn frame_menu(&mut self, input: &FrameInput, vp: Viewport) {
        self.effects.ensure_backdrop(vp);
        self.menu.bounce.update();

        let hover = layout::menu_hit(vp, self.pointer);
        if hover.is_some() && self.menu.keyboard {
            self.menu.clear_keyboard();
        }
        self.menu.hover = hover;

        for key in &input.keys {
            match key {
                Key::Down => self.menu.move_selection(1),
                Key::Up => self.menu.move_selection(-1),
                Key::Enter => {
                    if let Some(index) = self.menu.selected {
                        self.activate(index, vp);
                    }
                }
                Key::Space | Key::Escape => {}
            }
            if self.scene != SceneId::Menu {
                return;
            }
        }

        for click in &input.clicks {
            if let Some(index) = layout::menu_hit(vp, *click) {
                self.menu.clear_keyboard();
                self.activate(index, vp);
            }
            if self.scene != SceneId::Menu {
                return;
            }
        }
    }

    fn frame_panel(&mut self, input: &FrameInput, vp: Viewport) {
        self.menu.bounce.update();

        if input.keys.contains(&Key::Escape) {
            self.to_menu();
            return;
        }

        let back = layout::back_rect(layout::panel_rect(self.scene, vp));
        if input.clicks.iter().any(|click| back.contains(*click)) {
            self.to_menu();
        }
    }

    fn frame_game(
        &mut self,
        input: &FrameInput,
        vp: Viewport,
        assets: &dyn AssetSource,
        now_ms: f64,
        dt_ms: f64,
    ) {
        for key in &input.keys {
            if self.game.paused {
                match key {
                    Key::Enter => self.resume(),
                    Key::Space => self.restart(vp),
                    Key::Escape => self.exit_to_menu(),
                    _ => {}
                }
            } else if self.game.over {
                match key {
                    Key::Space => self.restart(vp),
                    Key::Escape => self.exit_to_menu(),
                    _ => {}
                }
            } else {
                match key {
                    Key::Space => self.pause(),
                    Key::Escape => self.exit_to_menu(),
                    _ => {}
                }
            }
            if self.scene != SceneId::Game {
                return;
            }
        }

        for click in &input.clicks {
            self.overlay_click(*click, vp);
            if self.scene != SceneId::Game {
                return;
            }
        }

        tick(
            &mut self.game,
            &TickInput {
                move_left: input.move_left,
                move_right: input.move_right,
            },
            vp,
            assets,
            now_ms,
            dt_ms,
        );

        let events = mem::take(&mut self.game.events);
        for event in &events {
            match *event {
                GameEvent::Caught { .. } => self.commands.push(Command::Play(Sound::Point)),
                GameEvent::Landed { .. } => {}
                GameEvent::Ended { score } => {
                    self.commands.push(Command::StopMusic);
                    self.commands.push(Command::Play(Sound::GameOver));
                    self.last_outcome = Some(self.stats.record_outcome(score));
                    self.commands.push(Command::RecordOutcome { score });
                }
            }
        }
        self.effects.absorb(&events, now_ms);
        self.effects.update(vp, now_ms, self.game.running());

        if self.game.over
            && self
                .last_outcome
                .is_some_and(|outcome| outcome.new_record)
        {
            self.effects.confetti(layout::confetti_origin(vp));
        }
    }

    /// Route a click through whichever overlay is up, if any.
    fn overlay_click(&mut self, at: Vec2, vp: Viewport) {
        let action = if self.game.paused {
            layout::pause_rows(vp)
                .iter()
                .find(|row| row.rect().contains(at))
                .map(|row| row.action)
        } else if self.game.over {
            layout::over_rows(vp)
                .iter()
                .find(|row| row.rect().contains(at))
                .map(|row| row.action)
        } else {
            None
        };

        match action {
            Some(OverlayAction::Resume) => self.resume(),
            Some(OverlayAction::Restart) => self.restart(vp),
            Some(OverlayAction::ExitToMenu) => self.exit_to_menu(),
            None => {}
        }
    }

    fn activate(&mut self, index: usize, vp: Viewport) {
        let Some(item) = MenuItem::ALL.get(index).copied() else {
            return;
        };
        self.menu.bounce.trigger(index);
        match item {
            MenuItem::Start => self.start_game(vp),
            MenuItem::HowTo => self.enter(SceneId::HowTo),
            MenuItem::Stats => self.enter(SceneId::Stats),
            MenuItem::Credits => self.enter(SceneId::Credits),
        }
    }

    fn enter(&mut self, scene: SceneId) {
        log::debug!("scene {:?} -> {:?}", self.scene, scene);
        self.scene = scene;
    }

    fn to_menu(&mut self) {
        self.menu.set_selected(None);
        self.enter(SceneId::Menu);
    }

    fn start_game(&mut self, vp: Viewport) {
        self.game.reset_session();
        self.effects.reset_session(vp);
        self.last_outcome = None;
        self.enter(SceneId::Game);
        self.commands.push(Command::StartMusic);
    }

    fn pause(&mut self) {
        self.game.paused = true;
        self.commands.push(Command::StopMusic);
    }

    fn resume(&mut self) {
        self.game.paused = false;
        self.commands.push(Command::StartMusic);
    }

    /// Fresh session without leaving the game scene.
    fn restart(&mut self, vp: Viewport) {
        self.game.reset_session();
        self.effects.reset_session(vp);
        self.last_outcome = None;
        self.commands.push(Command::StartMusic);
    }

    fn exit_to_menu(&mut self) {
        self.game.paused = false;
        self.to_menu();
        self.commands.push(Command::StopMusic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::assets::AssetId;
    use crate::sim::{Fruit, FruitKind};

    struct FixedAssets;

    impl AssetSource for FixedAssets {
        fn dimensions(&self, _id: AssetId) -> Option<Vec2> {
            Some(Vec2::new(50.0, 60.0))
        }
    }

    fn vp() -> Viewport {
        Viewport::new(600.0, 700.0)
    }

    fn frame_with(c: &mut SceneController, input: FrameInput, now_ms: f64) -> Vec<Command> {
        c.frame(&input, vp(), &FixedAssets, now_ms, 16.7)
    }

    fn press(c: &mut SceneController, key: Key) -> Vec<Command> {
        frame_with(
            c,
            FrameInput {
                keys: vec![key],
                ..FrameInput::default()
            },
            0.0,
        )
    }

    fn click(c: &mut SceneController, at: Vec2) -> Vec<Command> {
        frame_with(
            c,
            FrameInput {
                clicks: vec![at],
                ..FrameInput::default()
            },
            0.0,
        )
    }

    fn idle(c: &mut SceneController, now_ms: f64) -> Vec<Command> {
        frame_with(c, FrameInput::default(), now_ms)
    }

    /// Start a session via the menu and disable spawning for determinism.
    fn start(c: &mut SceneController) -> Vec<Command> {
        let commands = frame_with(
            c,
            FrameInput {
                keys: vec![Key::Down, Key::Enter],
                ..FrameInput::default()
            },
            0.0,
        );
        c.game.tuning = Tuning::no_spawns();
        commands
    }

    /// An edible drop dead center on the (already placed) player.
    fn fruit_on_player(c: &SceneController, kind: FruitKind) -> Fruit {
        Fruit {
            pos: Vec2::new(c.game.player.x, c.game.player.y),
            kind,
            wobble_phase: 0.0,
            wobble_speed: 0.0,
            spawn_time: 0.0,
        }
    }

    #[test]
    fn starts_in_menu_with_nothing_selected() {
        let c = SceneController::new(1);
        assert_eq!(c.scene(), SceneId::Menu);
        assert_eq!(c.menu.highlighted(), None);
        assert_eq!(c.last_outcome(), None);
    }

    #[test]
    fn keyboard_selection_starts_at_the_entered_end_and_wraps() {
        let mut c = SceneController::new(1);
        press(&mut c, Key::Down);
        assert_eq!(c.menu.selected(), Some(0));

        let mut d = SceneController::new(1);
        press(&mut d, Key::Up);
        assert_eq!(d.menu.selected(), Some(3), "upward entry lands on the last item");

        press(&mut d, Key::Down);
        assert_eq!(d.menu.selected(), Some(0), "wraps past the end");
        press(&mut d, Key::Up);
        assert_eq!(d.menu.selected(), Some(3), "wraps past the start");
    }

    #[test]
    fn enter_without_selection_does_nothing() {
        let mut c = SceneController::new(1);
        let commands = press(&mut c, Key::Enter);
        assert_eq!(c.scene(), SceneId::Menu);
        assert!(commands.is_empty());
    }

    #[test]
    fn pointer_hover_drops_keyboard_mode() {
        let mut c = SceneController::new(1);
        press(&mut c, Key::Down);
        assert_eq!(c.menu.highlighted(), Some(0));

        let over_item_2 = layout::menu_item_center(vp(), 2);
        frame_with(
            &mut c,
            FrameInput {
                pointer: Some(over_item_2),
                ..FrameInput::default()
            },
            0.0,
        );
        assert_eq!(c.menu.highlighted(), Some(2), "hover wins");
        assert_eq!(c.menu.selected(), None, "keyboard selection dropped");
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut menu = MenuState::new();
        menu.set_selected(Some(2));
        menu.set_selected(Some(99));
        assert_eq!(menu.selected(), Some(2));
        menu.set_selected(None);
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn menu_items_route_to_their_scenes() {
        let expected = [
            (1, SceneId::HowTo),
            (2, SceneId::Stats),
            (3, SceneId::Credits),
        ];
        for (index, scene) in expected {
            let mut c = SceneController::new(1);
            click(&mut c, layout::menu_item_center(vp(), index));
            assert_eq!(c.scene(), scene);

            press(&mut c, Key::Escape);
            assert_eq!(c.scene(), SceneId::Menu);
            assert_eq!(c.menu.selected(), None);
        }
    }

    #[test]
    fn back_button_returns_to_menu() {
        let mut c = SceneController::new(1);
        click(&mut c, layout::menu_item_center(vp(), 1));
        assert_eq!(c.scene(), SceneId::HowTo);

        let panel = layout::panel_rect(SceneId::HowTo, vp());
        click(&mut c, layout::back_center(panel));
        assert_eq!(c.scene(), SceneId::Menu);
    }

    #[test]
    fn clicks_outside_any_zone_change_nothing() {
        let mut c = SceneController::new(1);
        click(&mut c, Vec2::new(5.0, 5.0));
        assert_eq!(c.scene(), SceneId::Menu);

        click(&mut c, layout::menu_item_center(vp(), 2));
        let commands = click(&mut c, Vec2::new(5.0, 5.0));
        assert_eq!(c.scene(), SceneId::Stats);
        assert!(commands.is_empty());
    }

    #[test]
    fn start_resets_the_session_and_starts_music() {
        let mut c = SceneController::new(1);
        c.game.score = 77;
        c.game.over = true;

        let commands = start(&mut c);
        assert_eq!(c.scene(), SceneId::Game);
        assert_eq!(commands, vec![Command::StartMusic]);
        assert_eq!(c.game.score, 0);
        assert!(c.game.running());
        assert_eq!(c.last_outcome(), None);
    }

    #[test]
    fn pause_resume_cycle() {
        let mut c = SceneController::new(1);
        start(&mut c);

        let commands = press(&mut c, Key::Space);
        assert!(c.game.paused);
        assert_eq!(commands, vec![Command::StopMusic]);

        let commands = press(&mut c, Key::Enter);
        assert!(c.game.running());
        assert_eq!(commands, vec![Command::StartMusic]);
    }

    #[test]
    fn space_restarts_from_pause_without_leaving_the_game() {
        let mut c = SceneController::new(1);
        start(&mut c);
        c.game.score = 30;
        press(&mut c, Key::Space);

        let commands = press(&mut c, Key::Space);
        assert_eq!(c.scene(), SceneId::Game);
        assert!(c.game.running());
        assert_eq!(c.game.score, 0);
        assert!(commands.contains(&Command::StartMusic));
    }

    #[test]
    fn escape_exits_from_every_substate() {
        // running
        let mut c = SceneController::new(1);
        start(&mut c);
        let commands = press(&mut c, Key::Escape);
        assert_eq!(c.scene(), SceneId::Menu);
        assert!(commands.contains(&Command::StopMusic));

        // paused, and the pause must not survive into the next session
        let mut c = SceneController::new(1);
        start(&mut c);
        press(&mut c, Key::Space);
        press(&mut c, Key::Escape);
        assert_eq!(c.scene(), SceneId::Menu);
        assert!(!c.game.paused);

        // over
        let mut c = SceneController::new(1);
        start(&mut c);
        c.game.end_session();
        c.game.events.clear();
        press(&mut c, Key::Escape);
        assert_eq!(c.scene(), SceneId::Menu);
    }

    #[test]
    fn catching_an_edible_drop_scores_and_chirps() {
        let mut c = SceneController::new(1);
        start(&mut c);
        idle(&mut c, 16.0); // places the player on the ground

        let fruit = fruit_on_player(&c, FruitKind::Orange);
        c.game.fruits.push(fruit);
        let commands = idle(&mut c, 33.0);

        assert_eq!(c.game.score, 10);
        assert_eq!(commands, vec![Command::Play(Sound::Point)]);
        assert!(c.game.fruits.is_empty());
        assert!(!c.effects.particles.is_empty(), "catch burst spawned");
    }

    #[test]
    fn poison_catch_ends_the_session_and_records_once() {
        let mut c = SceneController::new(1);
        start(&mut c);
        idle(&mut c, 16.0);
        c.game.score = 40;

        let fruit = fruit_on_player(&c, FruitKind::Rotten);
        c.game.fruits.push(fruit);
        let commands = idle(&mut c, 33.0);

        assert!(c.game.over);
        assert_eq!(
            commands,
            vec![
                Command::StopMusic,
                Command::Play(Sound::GameOver),
                Command::RecordOutcome { score: 40 },
            ]
        );
        let outcome = c.last_outcome().unwrap();
        assert_eq!(outcome.final_score, 40);
        assert!(outcome.new_record);
        assert_eq!(c.stats().total_games, 1);

        // Later frames must not record again
        let commands = idle(&mut c, 50.0);
        assert!(!commands.iter().any(|cmd| matches!(cmd, Command::RecordOutcome { .. })));
        assert_eq!(c.stats().total_games, 1);
    }

    #[test]
    fn edible_landing_ends_the_session() {
        let mut c = SceneController::new(1);
        start(&mut c);
        idle(&mut c, 16.0);

        // On the ground but far from the player
        c.game.fruits.push(Fruit {
            pos: Vec2::new(10.0, vp().ground_y() - 55.0),
            kind: FruitKind::Blue,
            wobble_phase: 0.0,
            wobble_speed: 0.0,
            spawn_time: 0.0,
        });
        let commands = idle(&mut c, 33.0);
        assert!(c.game.over);
        assert!(commands.contains(&Command::Play(Sound::GameOver)));
    }

    #[test]
    fn new_record_fires_confetti_exactly_once() {
        let mut c = SceneController::new(1);
        start(&mut c);
        idle(&mut c, 16.0);
        c.game.score = 25;
        let fruit = fruit_on_player(&c, FruitKind::Rotten);
        c.game.fruits.push(fruit);
        idle(&mut c, 33.0);

        let count = c.effects.particles.len();
        assert!(count >= 30, "confetti burst present, got {count}");
        idle(&mut c, 50.0);
        assert!(c.effects.particles.len() <= count, "no second burst");
    }

    #[test]
    fn no_confetti_without_a_record() {
        let mut c = SceneController::new(1);
        c.set_stats(PlayerStats {
            best_score: 1000,
            ..PlayerStats::default()
        });
        start(&mut c);
        idle(&mut c, 16.0);
        let fruit = fruit_on_player(&c, FruitKind::Rotten);
        c.game.fruits.push(fruit);
        idle(&mut c, 33.0);

        assert!(c.game.over);
        assert!(!c.last_outcome().unwrap().new_record);
        assert!(c.effects.particles.is_empty());
    }

    #[test]
    fn overlay_rows_respond_to_clicks() {
        let mut c = SceneController::new(1);
        start(&mut c);
        press(&mut c, Key::Space);

        let rows = layout::pause_rows(vp());
        let commands = click(&mut c, rows[0].center);
        assert!(c.game.running(), "resume row clicked");
        assert_eq!(commands, vec![Command::StartMusic]);

        press(&mut c, Key::Space);
        let commands = click(&mut c, rows[2].center);
        assert_eq!(c.scene(), SceneId::Menu);
        assert!(commands.contains(&Command::StopMusic));
    }

    #[test]
    fn game_over_overlay_restart_click() {
        let mut c = SceneController::new(1);
        start(&mut c);
        c.game.end_session();
        c.game.events.clear();

        let rows = layout::over_rows(vp());
        let commands = click(&mut c, rows[0].center);
        assert!(c.game.running());
        assert_eq!(c.game.score, 0);
        assert!(commands.contains(&Command::StartMusic));
    }

    #[test]
    fn gameplay_clicks_hit_no_overlay() {
        let mut c = SceneController::new(1);
        start(&mut c);
        let rows = layout::pause_rows(vp());
        let commands = click(&mut c, rows[0].center);
        assert!(c.game.running(), "no overlay up, click ignored");
        assert!(commands.is_empty());
    }

    #[test]
    fn auto_pause_only_bites_a_running_session() {
        let mut c = SceneController::new(1);
        c.auto_pause();
        assert_eq!(c.scene(), SceneId::Menu);

        start(&mut c);
        c.auto_pause();
        assert!(c.game.paused);
        let commands = idle(&mut c, 16.0);
        assert!(commands.contains(&Command::StopMusic));

        // Already paused: no duplicate command
        c.auto_pause();
        let commands = idle(&mut c, 33.0);
        assert!(commands.is_empty());
    }

    #[test]
    fn paused_session_does_not_advance() {
        let mut c = SceneController::new(1);
        start(&mut c);
        idle(&mut c, 16.0);
        c.game.fruits.push(Fruit {
            pos: Vec2::new(100.0, 50.0),
            kind: FruitKind::Orange,
            wobble_phase: 0.0,
            wobble_speed: 0.0,
            spawn_time: 0.0,
        });
        press(&mut c, Key::Space);

        let y_before = c.game.fruits[0].pos.y;
        idle(&mut c, 100.0);
        idle(&mut c, 200.0);
        assert_eq!(c.game.fruits[0].pos.y, y_before);
    }

    #[test]
    fn pointer_hot_tracks_clickable_zones() {
        let mut c = SceneController::new(1);
        assert!(!c.pointer_hot(vp()));

        // Hovering a menu item
        let item = layout::menu_item_center(vp(), 2);
        frame_with(
            &mut c,
            FrameInput {
                pointer: Some(item),
                ..FrameInput::default()
            },
            0.0,
        );
        assert!(c.pointer_hot(vp()));

        // Over the pause overlay's resume row, but only while paused
        start(&mut c);
        let resume = layout::pause_rows(vp())[0].center;
        frame_with(
            &mut c,
            FrameInput {
                pointer: Some(resume),
                ..FrameInput::default()
            },
            16.0,
        );
        assert!(!c.pointer_hot(vp()));

        press(&mut c, Key::Space);
        assert!(c.pointer_hot(vp()));
    }
}
