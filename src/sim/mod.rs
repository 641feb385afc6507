//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One tick per display frame, tuned constants per tick
//! - Seeded RNG only
//! - Removal-safe iteration (reverse index order)
//! - No rendering or platform dependencies; sprite dimensions arrive through
//!   the asset trait and missing ones are skipped, never guessed

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{below_view, reached_ground, rects_overlap};
pub use spawn::try_spawn;
pub use state::{Facing, Fruit, FruitKind, GameEvent, GameState, Player};
pub use tick::{TickInput, tick};
