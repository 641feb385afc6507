//! Catch It - a browser arcade game about catching falling fruit
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, scoring)
//! - `scene`: Scene state machine driving update/draw and emitting shell commands
//! - `fx`: Cosmetic feedback (bounces, particles, backdrop motion)
//! - `view`: Renderer/asset traits and per-scene drawing
//! - `stats`: Aggregate statistics with local cache + best-effort remote sync
//! - `platform`: Browser glue (canvas, images, storage, fetch)
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod fx;
pub mod layout;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod stats;
pub mod tuning;
pub mod view;

pub use scene::{Command, FrameInput, SceneController, SceneId};
pub use stats::PlayerStats;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical canvas width all speeds and layouts are tuned against
    pub const GAME_WIDTH: f32 = 600.0;
    /// Logical canvas height
    pub const GAME_HEIGHT: f32 = 700.0;
    /// Height of the ground strip, in logical units
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Walk-cycle frame advance interval (ms)
    pub const WALK_FRAME_MS: f64 = 150.0;
    /// Number of frames in the walk cycle
    pub const WALK_FRAMES: usize = 3;

    /// Duration of the player's catch bounce (ms)
    pub const BOUNCE_MS: f64 = 300.0;

    /// Version string shown in the menu footer
    pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
}

/// Current render surface, in physical pixels.
///
/// All gameplay constants are tuned for the logical 600x700 canvas; the
/// viewport provides the scale factors that map them onto whatever size the
/// shell is actually rendering at. Rebuilt every frame, so resizing while a
/// session runs just works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal scale relative to the logical canvas
    #[inline]
    pub fn scale_x(&self) -> f32 {
        self.width / consts::GAME_WIDTH
    }

    /// Vertical scale relative to the logical canvas
    #[inline]
    pub fn scale_y(&self) -> f32 {
        self.height / consts::GAME_HEIGHT
    }

    /// Y of the ground line objects land on and the player stands on
    #[inline]
    pub fn ground_y(&self) -> f32 {
        (consts::GAME_HEIGHT - consts::GROUND_HEIGHT) * self.scale_y()
    }
}
