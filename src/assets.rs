//! Asset identity and readiness.
//!
//! The game never loads or decodes images itself; it asks an [`AssetSource`]
//! for natural dimensions and treats `None` as "not ready yet, skip whatever
//! needed this". Collision sizes, layout clamps and draws all flow through
//! this one trait, which also makes simulation tests trivial to stub.

use glam::Vec2;

use crate::sim::{Facing, FruitKind};

/// Every image the game can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    /// Player walk-cycle frame for one facing (frames 0..3)
    Walk { facing: Facing, frame: usize },
    /// Falling object sprite per kind
    Fruit(FruitKind),
    /// Faint fruit tile used by the menu backdrop
    MenuFruit,
    /// Mascot in the menu corner
    Mascot,
    /// Wide banner on the credits screen
    Banner,
}

impl AssetId {
    /// Every id, for loaders that want to prefetch the lot.
    pub fn all() -> impl Iterator<Item = AssetId> {
        let walks = [Facing::Left, Facing::Right]
            .into_iter()
            .flat_map(|facing| (0..crate::consts::WALK_FRAMES).map(move |frame| AssetId::Walk { facing, frame }));
        let rest = [
            AssetId::Fruit(FruitKind::Orange),
            AssetId::Fruit(FruitKind::Blue),
            AssetId::Fruit(FruitKind::Rotten),
            AssetId::MenuFruit,
            AssetId::Mascot,
            AssetId::Banner,
        ];
        walks.chain(rest)
    }
}

/// Readiness and natural pixel dimensions of decoded assets.
pub trait AssetSource {
    /// `Some(size)` once the asset is decoded, `None` before.
    fn dimensions(&self, id: AssetId) -> Option<Vec2>;
}
