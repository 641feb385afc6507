//! Catch It entry point
//!
//! The wasm build wires the browser to the library: canvas sizing, input
//! listeners, the animation-frame loop and command execution. Native
//! builds drive a short scripted session through the same controller API.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod shell {
    use std::cell::RefCell;
    use std::mem;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Event, HtmlCanvasElement, KeyboardEvent, MouseEvent,
        VisibilityState,
    };

    use catch_it::audio::AudioDirector;
    use catch_it::consts;
    use catch_it::platform::canvas::CanvasRenderer;
    use catch_it::platform::images::ImageBank;
    use catch_it::scene::Key;
    use catch_it::stats::StatsStore;
    use catch_it::view::palette;
    use catch_it::{Command, FrameInput, SceneController, SceneId, Viewport};

    /// Everything the event closures and the frame loop share.
    struct App {
        controller: SceneController,
        renderer: CanvasRenderer,
        images: Rc<ImageBank>,
        audio: AudioDirector,
        stats: StatsStore,
        canvas: HtmlCanvasElement,
        held_left: bool,
        held_right: bool,
        pending_keys: Vec<Key>,
        pending_clicks: Vec<Vec2>,
        pointer: Option<Vec2>,
        shown_scene: SceneId,
        last_time: f64,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("logger init failed");
        log::info!("Catch It {} starting", consts::VERSION);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no gameCanvas element")
            .dyn_into()
            .expect("gameCanvas is not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .expect("2d context unavailable")
            .dyn_into()
            .expect("context is not 2d");

        let images = Rc::new(ImageBank::new()?);

        let seed = js_sys::Date::now() as u64;
        let mut controller = SceneController::new(seed);
        log::info!("session rng seeded with {seed}");

        let stats = StatsStore::load();
        controller.set_stats(stats.stats());

        resize_canvas(&canvas, SceneId::Menu);

        let app = Rc::new(RefCell::new(App {
            renderer: CanvasRenderer::new(ctx, images.clone()),
            controller,
            images,
            audio: AudioDirector::new(),
            stats,
            canvas,
            held_left: false,
            held_right: false,
            pending_keys: Vec::new(),
            pending_clicks: Vec::new(),
            pointer: None,
            shown_scene: SceneId::Menu,
            last_time: 0.0,
        }));

        // The remote aggregate lands whenever the fetch finishes. Both the
        // store and the controller's cached copy need it.
        {
            let app = app.clone();
            StatsStore::refresh_remote(move |stats| {
                let mut app = app.borrow_mut();
                app.stats.set(stats);
                app.controller.set_stats(stats);
            });
        }

        setup_listeners(app.clone())?;
        request_frame(app);
        Ok(())
    }

    /// Per-scene canvas sizing. The game letterboxes the logical 600x700
    /// playfield into 95% of the window; every other scene fills it.
    fn resize_canvas(canvas: &HtmlCanvasElement, scene: SceneId) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let inner_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(consts::GAME_WIDTH as f64);
        let inner_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(consts::GAME_HEIGHT as f64);

        let menu_bg = palette::MENU_BG.to_css();
        let background = if scene == SceneId::Game {
            "#000000"
        } else {
            menu_bg.as_str()
        };
        if let Some(body) = window.document().and_then(|d| d.body()) {
            let _ = body.style().set_property("background", background);
        }

        if scene == SceneId::Game {
            let fit_w = (inner_w * 0.95).min(consts::GAME_WIDTH as f64);
            let fit_h = (inner_h * 0.95).min(consts::GAME_HEIGHT as f64);
            let ratio =
                (fit_w / consts::GAME_WIDTH as f64).min(fit_h / consts::GAME_HEIGHT as f64);
            canvas.set_width((consts::GAME_WIDTH as f64 * ratio) as u32);
            canvas.set_height((consts::GAME_HEIGHT as f64 * ratio) as u32);
        } else {
            canvas.set_width(inner_w as u32);
            canvas.set_height(inner_h as u32);
        }
    }

    /// Mouse event position in canvas pixels. The canvas is CSS-scaled, so
    /// client coordinates are mapped through the bounding rect.
    fn canvas_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let scale_x = canvas.width() as f64 / rect.width();
        let scale_y = canvas.height() as f64 / rect.height();
        let x = (event.client_x() as f64 - rect.left()) * scale_x;
        let y = (event.client_y() as f64 - rect.top()) * scale_y;
        Vec2::new(x as f32, y as f32)
    }

    fn setup_listeners(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas = app.borrow().canvas.clone();

        // Keyboard. Movement keys are held flags; the rest queue as
        // discrete presses for the controller.
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                // Browsers unlock audio on the first gesture
                app.audio.resume();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => app.held_left = true,
                    "ArrowRight" | "d" | "D" => app.held_right = true,
                    "ArrowUp" | "w" | "W" => app.pending_keys.push(Key::Up),
                    "ArrowDown" | "s" | "S" => app.pending_keys.push(Key::Down),
                    "Enter" => app.pending_keys.push(Key::Enter),
                    " " => app.pending_keys.push(Key::Space),
                    "Escape" => app.pending_keys.push(Key::Escape),
                    _ => return,
                }
                event.prevent_default();
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => app.held_left = false,
                    "ArrowRight" | "d" | "D" => app.held_right = false,
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut app = app.borrow_mut();
                let position = canvas_position(&app.canvas, &event);
                app.pointer = Some(position);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut app = app.borrow_mut();
                app.audio.resume();
                let position = canvas_position(&app.canvas, &event);
                app.pending_clicks.push(position);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_: Event| {
                let app = app.borrow();
                resize_canvas(&app.canvas, app.controller.scene());
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pause when the tab goes hidden. Music has to stop here because
        // animation frames do not fire again until the tab returns.
        {
            let app = app.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_: Event| {
                if doc.visibility_state() == VisibilityState::Hidden {
                    let mut app = app.borrow_mut();
                    app.controller.auto_pause();
                    app.audio.stop_music();
                    log::info!("tab hidden, pausing");
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Clicking away blurs without hiding; frames keep firing, so the
        // loop picks up the queued music command itself.
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::FocusEvent| {
                app.borrow_mut().controller.auto_pause();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| on_frame(app, time));
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_frame(app_rc: Rc<RefCell<App>>, time: f64) {
        {
            let app = &mut *app_rc.borrow_mut();

            let dt_ms = if app.last_time > 0.0 {
                time - app.last_time
            } else {
                16.7
            };
            app.last_time = time;

            let input = FrameInput {
                pointer: app.pointer.take(),
                clicks: mem::take(&mut app.pending_clicks),
                keys: mem::take(&mut app.pending_keys),
                move_left: app.held_left,
                move_right: app.held_right,
            };

            let vp = Viewport::new(app.canvas.width() as f32, app.canvas.height() as f32);
            let images = app.images.clone();
            for command in app.controller.frame(&input, vp, images.as_ref(), time, dt_ms) {
                match command {
                    Command::Play(sound) => app.audio.play(sound),
                    Command::StartMusic => app.audio.start_music(),
                    Command::StopMusic => app.audio.stop_music(),
                    Command::RecordOutcome { score } => {
                        app.stats.record(score);
                        app.controller.set_stats(app.stats.stats());
                    }
                }
            }

            // Scene switches restyle the page before the frame is drawn
            let scene = app.controller.scene();
            if scene != app.shown_scene {
                app.shown_scene = scene;
                resize_canvas(&app.canvas, scene);
            }

            let vp = Viewport::new(app.canvas.width() as f32, app.canvas.height() as f32);
            let cursor = if app.controller.pointer_hot(vp) {
                "pointer"
            } else {
                "default"
            };
            let _ = app.canvas.style().set_property("cursor", cursor);

            app.controller.draw(&mut app.renderer, images.as_ref(), vp, time);
        }

        request_frame(app_rc);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    shell::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is wasm_main; this satisfies the bin target.
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use catch_it::assets::{AssetId, AssetSource};
    use catch_it::scene::Key;
    use catch_it::{Command, FrameInput, SceneController, SceneId, Viewport};
    use glam::Vec2;

    env_logger::init();

    // Stand-in for browser images so sprites have dimensions.
    struct FixedAssets;
    impl AssetSource for FixedAssets {
        fn dimensions(&self, _id: AssetId) -> Option<Vec2> {
            Some(Vec2::new(50.0, 60.0))
        }
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut controller = SceneController::new(seed);
    let vp = Viewport::new(600.0, 700.0);

    log::info!("headless session, seed {seed}");
    let start = FrameInput {
        keys: vec![Key::Down, Key::Enter],
        ..FrameInput::default()
    };
    controller.frame(&start, vp, &FixedAssets, 0.0, 16.7);

    // Sweep the catcher back and forth until an edible drop gets away,
    // or give up after a minute of simulated time.
    let mut now = 0.0;
    let mut catches = 0u32;
    for frame in 0..3600u32 {
        now = (frame + 1) as f64 * 16.7;
        let input = FrameInput {
            move_right: frame % 240 < 120,
            move_left: frame % 240 >= 120,
            ..FrameInput::default()
        };
        for command in controller.frame(&input, vp, &FixedAssets, now, 16.7) {
            if matches!(command, Command::Play(_)) {
                catches += 1;
            }
        }
        if controller.scene() == SceneId::Game && controller.last_outcome().is_some() {
            break;
        }
    }

    match controller.last_outcome() {
        Some(outcome) => {
            println!(
                "game over after {:.1}s: score {}{}",
                now / 1000.0,
                outcome.final_score,
                if outcome.new_record { " (new record)" } else { "" },
            );
            println!("{catches} sounds played along the way");
        }
        None => println!("session survived the whole minute, score still on screen"),
    }
}
