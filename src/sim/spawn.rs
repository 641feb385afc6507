//! Stochastic spawner with a legibility gate.
//!
//! At most one object enters play per tick. Three independent Bernoulli
//! trials run in a fixed priority order and the first success wins; the gate
//! in front of them keeps drops from clumping into an unreadable stream.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Fruit, FruitKind, GameState};
use crate::Viewport;
use crate::assets::{AssetId, AssetSource};

/// Trial priority: common kind first, poison last.
const TRIAL_ORDER: [FruitKind; 3] = [FruitKind::Orange, FruitKind::Blue, FruitKind::Rotten];

/// Sprite width assumed while the fruit image is still decoding.
const FALLBACK_SIZE: f32 = 50.0;

/// Run the spawn gate and, if it is open, the per-kind trials. Spawns zero
/// or one object and stamps `last_spawn_ms` on success.
pub fn try_spawn(state: &mut GameState, vp: Viewport, assets: &dyn AssetSource, now_ms: f64) {
    if !gate_open(state, vp, assets, now_ms) {
        return;
    }

    let rates = [
        state.tuning.spawn_rate_low,
        state.tuning.spawn_rate_high,
        state.tuning.spawn_rate_poison,
    ];
    for (kind, rate) in TRIAL_ORDER.into_iter().zip(rates) {
        if state.rng.random::<f32>() < rate {
            spawn(state, kind, vp, assets, now_ms);
            return;
        }
    }
}

/// The three gate conditions: below the on-screen cap, past the minimum
/// delay, and either still bootstrapping or the newest drop has fallen far
/// enough to leave room for the next one.
fn gate_open(state: &GameState, vp: Viewport, assets: &dyn AssetSource, now_ms: f64) -> bool {
    let t = &state.tuning;

    if state.fruits.len() >= t.max_on_screen {
        return false;
    }
    if now_ms - state.last_spawn_ms < t.min_spawn_delay_ms {
        return false;
    }
    if state.fruits.len() < t.bootstrap_count {
        return true;
    }

    let newest = state
        .fruits
        .iter()
        .max_by(|a, b| a.spawn_time.total_cmp(&b.spawn_time));
    match newest {
        // Objects spawn with their bottom at y = 0, so pos.y + size is how
        // far the newest has fallen since it appeared.
        Some(fruit) => fruit.pos.y + spawn_size(assets) >= t.min_spacing * vp.scale_y(),
        None => true,
    }
}

fn spawn(state: &mut GameState, kind: FruitKind, vp: Viewport, assets: &dyn AssetSource, now_ms: f64) {
    let size = spawn_size(assets);
    let max_x = (vp.width - size).max(0.0);
    let x = if max_x > 0.0 {
        state.rng.random_range(0.0..max_x)
    } else {
        0.0
    };
    let wobble_phase = state.rng.random_range(0.0..TAU);
    let wobble_speed = state
        .rng
        .random_range(state.tuning.wobble_speed_min..state.tuning.wobble_speed_max);

    state.fruits.push(Fruit {
        pos: Vec2::new(x, -size),
        kind,
        wobble_phase,
        wobble_speed,
        spawn_time: now_ms,
    });
    state.last_spawn_ms = now_ms;
}

/// Width used for spawn placement and spacing. Falls back to a nominal size
/// while the sprite is still decoding so early spawns stay sane.
fn spawn_size(assets: &dyn AssetSource) -> f32 {
    assets
        .dimensions(AssetId::Fruit(FruitKind::Orange))
        .map(|d| d.x)
        .unwrap_or(FALLBACK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    struct Dims(f32);

    impl AssetSource for Dims {
        fn dimensions(&self, _id: AssetId) -> Option<Vec2> {
            Some(Vec2::splat(self.0))
        }
    }

    fn vp() -> Viewport {
        Viewport::new(600.0, 700.0)
    }

    fn always_spawning() -> GameState {
        let mut state = GameState::new(7);
        state.tuning = Tuning {
            spawn_rate_low: 1.0,
            spawn_rate_high: 1.0,
            spawn_rate_poison: 1.0,
            ..Tuning::default()
        };
        state
    }

    #[test]
    fn at_most_one_spawn_even_when_every_trial_succeeds() {
        let mut state = always_spawning();
        try_spawn(&mut state, vp(), &Dims(50.0), 1000.0);
        assert_eq!(state.fruits.len(), 1);
        // Priority order means the certain first trial decides the kind
        assert_eq!(state.fruits[0].kind, FruitKind::Orange);
    }

    #[test]
    fn trial_priority_falls_through_to_later_kinds() {
        let mut state = always_spawning();
        state.tuning.spawn_rate_low = 0.0;
        try_spawn(&mut state, vp(), &Dims(50.0), 1000.0);
        assert_eq!(state.fruits[0].kind, FruitKind::Blue);

        let mut state = always_spawning();
        state.tuning.spawn_rate_low = 0.0;
        state.tuning.spawn_rate_high = 0.0;
        try_spawn(&mut state, vp(), &Dims(50.0), 1000.0);
        assert_eq!(state.fruits[0].kind, FruitKind::Rotten);
    }

    #[test]
    fn minimum_delay_blocks_back_to_back_spawns() {
        let mut state = always_spawning();
        try_spawn(&mut state, vp(), &Dims(50.0), 1000.0);
        try_spawn(&mut state, vp(), &Dims(50.0), 1100.0);
        assert_eq!(state.fruits.len(), 1, "second spawn inside the delay window");

        // Let the bootstrap allowance take it; 1 active object is below the
        // bootstrap count so only the delay was blocking
        try_spawn(&mut state, vp(), &Dims(50.0), 1400.0);
        assert_eq!(state.fruits.len(), 2);
    }

    #[test]
    fn cap_blocks_spawning() {
        let mut state = always_spawning();
        for i in 0..state.tuning.max_on_screen {
            state.fruits.push(Fruit {
                pos: Vec2::new(0.0, 500.0),
                kind: FruitKind::Orange,
                wobble_phase: 0.0,
                wobble_speed: 0.05,
                spawn_time: i as f64,
            });
        }
        try_spawn(&mut state, vp(), &Dims(50.0), 100_000.0);
        assert_eq!(state.fruits.len(), state.tuning.max_on_screen);
    }

    #[test]
    fn spacing_gate_waits_for_the_newest_drop_to_clear() {
        let mut state = always_spawning();
        // Three already active: bootstrap no longer applies
        for i in 0..3 {
            state.fruits.push(Fruit {
                pos: Vec2::new(0.0, 300.0),
                kind: FruitKind::Orange,
                wobble_phase: 0.0,
                wobble_speed: 0.05,
                spawn_time: i as f64,
            });
        }
        // Newest still at the spawn line: fallen distance 0 - 50 + 50 = 0
        state.fruits[2].pos.y = -50.0;
        state.fruits[2].spawn_time = 900.0;

        try_spawn(&mut state, vp(), &Dims(50.0), 10_000.0);
        assert_eq!(state.fruits.len(), 3, "newest has not fallen far enough");

        // Once it has fallen past min_spacing the gate opens
        state.fruits[2].pos.y = state.tuning.min_spacing - 50.0;
        try_spawn(&mut state, vp(), &Dims(50.0), 10_000.0);
        assert_eq!(state.fruits.len(), 4);
    }

    #[test]
    fn spawns_start_above_the_visible_top() {
        let mut state = always_spawning();
        try_spawn(&mut state, vp(), &Dims(50.0), 1000.0);
        let fruit = &state.fruits[0];
        assert_eq!(fruit.pos.y, -50.0);
        assert!(fruit.pos.x >= 0.0 && fruit.pos.x <= 550.0);
        assert_eq!(fruit.spawn_time, 1000.0);
        assert_eq!(state.last_spawn_ms, 1000.0);
    }
}
