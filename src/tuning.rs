//! Data-driven game balance.
//!
//! Everything that shapes difficulty lives here so tests can pin
//! probabilities and speeds instead of fighting the RNG. Speeds are in
//! logical pixels per tick (tuned for a 60 Hz display) and are scaled by the
//! current viewport before use; times are in milliseconds.

/// Balance knobs carried by the game state.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    // === Player ===
    /// Horizontal target speed while a direction is held
    pub player_speed: f32,
    /// Interpolation factor easing `x` toward `target_x` each tick
    pub ease_factor: f32,

    // === Falling objects ===
    /// Downward speed of every falling object
    pub fall_speed: f32,
    /// Per-tick spawn probability of the low-value kind
    pub spawn_rate_low: f32,
    /// Per-tick spawn probability of the high-value kind
    pub spawn_rate_high: f32,
    /// Per-tick spawn probability of the poison kind
    pub spawn_rate_poison: f32,

    // === Spawn gate ===
    /// Hard cap on simultaneously active objects
    pub max_on_screen: usize,
    /// Minimum time between spawns
    pub min_spawn_delay_ms: f64,
    /// How far the newest object must fall before the next may spawn
    pub min_spacing: f32,
    /// Below this many active objects the spacing rule is waived
    pub bootstrap_count: usize,

    // === Wobble ===
    /// Wobble phase advance per tick, lower bound
    pub wobble_speed_min: f32,
    /// Wobble phase advance per tick, upper bound
    pub wobble_speed_max: f32,
    /// Horizontal sway amplitude
    pub wobble_amplitude: f32,
    /// Render tilt amplitude (radians)
    pub wobble_tilt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 8.0,
            ease_factor: 0.15,

            fall_speed: 3.0,
            spawn_rate_low: 0.025,
            spawn_rate_high: 0.01,
            spawn_rate_poison: 0.005,

            max_on_screen: 12,
            min_spawn_delay_ms: 300.0,
            min_spacing: 60.0,
            bootstrap_count: 3,

            wobble_speed_min: 0.05,
            wobble_speed_max: 0.10,
            wobble_amplitude: 5.0,
            wobble_tilt: 0.1,
        }
    }
}

impl Tuning {
    /// Variant with spawning disabled, for tests that stage objects by hand.
    pub fn no_spawns() -> Self {
        Self {
            spawn_rate_low: 0.0,
            spawn_rate_high: 0.0,
            spawn_rate_poison: 0.0,
            ..Self::default()
        }
    }
}
