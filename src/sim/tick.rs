//! Per-frame simulation tick
//!
//! Advances one display frame of gameplay: player steering, the spawn gate,
//! falling motion, and catch/ground/off-screen resolution. Deterministic
//! given the state's RNG; cosmetic feedback leaves through the state's event
//! queue and is handled elsewhere.

use glam::Vec2;

use super::collision::{below_view, reached_ground, rects_overlap};
use super::spawn::try_spawn;
use super::state::{Facing, GameEvent, GameState};
use crate::Viewport;
use crate::assets::{AssetId, AssetSource};

/// Held input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the session by one frame. Does nothing while paused or over, so a
/// frozen overlay really is frozen.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    vp: Viewport,
    assets: &dyn AssetSource,
    now_ms: f64,
    dt_ms: f64,
) {
    if !state.running() {
        return;
    }

    move_player(state, input, vp, assets, dt_ms);
    try_spawn(state, vp, assets, now_ms);
    resolve_fruits(state, vp, assets);
}

/// Steer the target, clamp it to the viewport, ease toward it. Left wins if
/// both directions are held. Clamping and the derived ground position need
/// the current sprite's dimensions and are skipped until those exist.
fn move_player(
    state: &mut GameState,
    input: &TickInput,
    vp: Viewport,
    assets: &dyn AssetSource,
    dt_ms: f64,
) {
    let speed = state.tuning.player_speed * vp.scale_x();

    if input.move_left {
        state.player.target_x -= speed;
        state.player.facing = Facing::Left;
        state.player.advance_walk(dt_ms);
    } else if input.move_right {
        state.player.target_x += speed;
        state.player.facing = Facing::Right;
        state.player.advance_walk(dt_ms);
    }

    let sprite = AssetId::Walk {
        facing: state.player.facing,
        frame: state.player.walk_frame,
    };
    if let Some(size) = assets.dimensions(sprite) {
        if !state.player.placed {
            // First tick with a decoded sprite: start centered
            state.player.x = (vp.width - size.x) / 2.0;
            state.player.target_x = state.player.x;
            state.player.placed = true;
        }
        state.player.target_x = state.player.target_x.clamp(0.0, (vp.width - size.x).max(0.0));
        state.player.y = vp.ground_y() - size.y;
    }

    state.player.ease(state.tuning.ease_factor);
}

/// Advance every falling object and resolve catches, landings and escapes.
///
/// Reverse index order so removal never skips an element. Per object:
/// fall + wobble first, then the off-screen safety net, then the catch test
/// against the player's box using the wobbled x, then the ground test.
/// Terminal outcomes stop the loop; the frozen remainder is what the
/// game-over screen shows.
fn resolve_fruits(state: &mut GameState, vp: Viewport, assets: &dyn AssetSource) {
    let fall = state.tuning.fall_speed * vp.scale_y();
    let amplitude = state.tuning.wobble_amplitude;
    let ground_y = vp.ground_y();

    let player_sprite = AssetId::Walk {
        facing: state.player.facing,
        frame: state.player.walk_frame,
    };
    let player_size = assets.dimensions(player_sprite);
    let player_pos = Vec2::new(state.player.x, state.player.y);

    for i in (0..state.fruits.len()).rev() {
        {
            let fruit = &mut state.fruits[i];
            fruit.pos.y += fall;
            fruit.wobble_phase += fruit.wobble_speed;
        }
        let fruit = state.fruits[i].clone();

        // Without dimensions there is nothing meaningful to test against;
        // the object keeps falling and resolves once the sprites decode.
        let Some(player_size) = player_size else {
            continue;
        };
        let Some(fruit_size) = assets.dimensions(AssetId::Fruit(fruit.kind)) else {
            continue;
        };

        // An object whose top already passed the viewport bottom escaped
        // (say, the window shrank or it fell while sprites were decoding).
        // A silent miss, not a landing.
        if below_view(fruit.pos.y, vp.height) {
            state.fruits.remove(i);
            continue;
        }

        let wobbled = Vec2::new(fruit.wobbled_x(amplitude), fruit.pos.y);

        if rects_overlap(wobbled, fruit_size, player_pos, player_size) {
            match fruit.kind.points() {
                Some(points) => {
                    state.score += points;
                    state.events.push(GameEvent::Caught {
                        kind: fruit.kind,
                        at: wobbled + fruit_size / 2.0,
                    });
                    state.fruits.remove(i);
                    continue;
                }
                None => {
                    // Caught the poison: the run is done, the object stays
                    // where it was caught
                    state.end_session();
                    break;
                }
            }
        }

        if reached_ground(fruit.pos.y, fruit_size.y, ground_y) {
            state.events.push(GameEvent::Landed {
                kind: fruit.kind,
                at: Vec2::new(wobbled.x + fruit_size.x / 2.0, ground_y),
            });
            state.fruits.remove(i);
            if fruit.kind.is_poison() {
                // Letting poison land is the safe play
                continue;
            }
            state.end_session();
            break;
        }
    }
}
