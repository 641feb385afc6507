//! Game state and core simulation types
//!
//! One aggregate owns everything a session mutates. No module-level
//! singletons; the scene controller holds a single `GameState` and threads it
//! through update and draw.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the player sprite faces (selects the walk-cycle sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The catcher at the bottom of the screen.
///
/// `x` eases toward the input-driven `target_x` each tick; `y` is derived
/// from the ground line and the sprite height, never simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub target_x: f32,
    pub y: f32,
    pub facing: Facing,
    /// Index into the three-frame walk cycle
    pub walk_frame: usize,
    /// Accumulates toward [`WALK_FRAME_MS`]
    pub frame_timer_ms: f64,
    /// False until sprite dimensions were available once and the player
    /// could be centered in the viewport
    pub placed: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            target_x: 0.0,
            y: 0.0,
            facing: Facing::default(),
            walk_frame: 0,
            frame_timer_ms: 0.0,
            placed: false,
        }
    }

    /// Advance the walk cycle while moving; frames flip every 150ms.
    pub fn advance_walk(&mut self, dt_ms: f64) {
        self.frame_timer_ms += dt_ms;
        if self.frame_timer_ms > WALK_FRAME_MS {
            self.walk_frame = (self.walk_frame + 1) % WALK_FRAMES;
            self.frame_timer_ms = 0.0;
        }
    }

    /// Ease `x` toward `target_x`. Fixed interpolation per tick, not a real
    /// velocity model; looks critically damped at display rate.
    pub fn ease(&mut self, factor: f32) {
        self.x += (self.target_x - self.x) * factor;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Falling object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    /// Common, worth 10
    Orange,
    /// Rare, worth 20
    Blue,
    /// Lethal to catch, harmless on the ground
    Rotten,
}

impl FruitKind {
    /// Points for catching, `None` for the poison kind.
    pub fn points(self) -> Option<u32> {
        match self {
            FruitKind::Orange => Some(10),
            FruitKind::Blue => Some(20),
            FruitKind::Rotten => None,
        }
    }

    pub fn is_poison(self) -> bool {
        self.points().is_none()
    }
}

/// A falling object.
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    /// Top-left corner, unwobbled
    pub pos: Vec2,
    pub kind: FruitKind,
    /// Current sway phase; starts at a random angle so drops desynchronize
    pub wobble_phase: f32,
    /// Phase advance per tick
    pub wobble_speed: f32,
    /// Timestamp the spawner created this object (ms)
    pub spawn_time: f64,
}

impl Fruit {
    /// Horizontal position with the cosmetic sway applied. Collision uses
    /// this, not `pos.x`, so the sprite and the hitbox never disagree.
    pub fn wobbled_x(&self, amplitude: f32) -> f32 {
        self.pos.x + self.wobble_phase.sin() * amplitude
    }

    /// Render tilt in radians.
    pub fn tilt(&self, amplitude: f32) -> f32 {
        self.wobble_phase.sin() * amplitude
    }
}

/// Effect requests emitted by the resolver, drained by the feedback engine.
/// Gameplay never reads these back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An edible object was caught; `at` is its wobbled center.
    Caught { kind: FruitKind, at: Vec2 },
    /// An object reached the ground; `at` is its wobbled bottom-center.
    Landed { kind: FruitKind, at: Vec2 },
    /// The session hit a terminal condition. Emitted exactly once per
    /// session; carries the final score for stats recording.
    Ended { score: u32 },
}

/// Complete session state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this state's RNG started from, for reproducing a run
    pub seed: u64,
    pub score: u32,
    pub over: bool,
    pub paused: bool,
    pub player: Player,
    /// Active falling objects; iterated in reverse so in-place removal is safe
    pub fruits: Vec<Fruit>,
    /// Spawn gate: timestamp of the most recent spawn (ms)
    pub last_spawn_ms: f64,
    pub tuning: Tuning,
    /// Pending effect requests, drained once per frame
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    /// Latches the terminal stats write to once per session
    outcome_recorded: bool,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            over: false,
            paused: false,
            player: Player::new(),
            fruits: Vec::new(),
            last_spawn_ms: 0.0,
            tuning: Tuning::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            outcome_recorded: false,
        }
    }

    /// Begin a fresh session in place. Tuning and the RNG stream carry over;
    /// everything a run mutates goes back to its starting value, including
    /// the outcome latch.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.over = false;
        self.paused = false;
        self.player = Player::new();
        self.fruits.clear();
        self.last_spawn_ms = 0.0;
        self.events.clear();
        self.outcome_recorded = false;
    }

    /// True while ticks should advance the simulation.
    pub fn running(&self) -> bool {
        !self.paused && !self.over
    }

    /// Terminal transition. Safe to call repeatedly; only the first call per
    /// session flips `over` and emits [`GameEvent::Ended`].
    pub fn end_session(&mut self) {
        if self.outcome_recorded {
            return;
        }
        self.outcome_recorded = true;
        self.over = true;
        self.events.push(GameEvent::Ended { score: self.score });
    }

    pub fn outcome_recorded(&self) -> bool {
        self.outcome_recorded
    }
}
