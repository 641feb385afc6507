//! Ambient backdrop elements: drifting clouds behind the play field and the
//! swaying fruit pattern behind the menu.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::Viewport;

/// One cloud of the in-game sky. Drawn as three overlapping circles.
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub opacity: f32,
}

/// Five clouds drifting rightward, wrapping to the left edge at a fresh
/// altitude once fully off screen.
#[derive(Debug, Clone, Default)]
pub struct Clouds {
    items: Vec<Cloud>,
}

impl Clouds {
    pub fn new(rng: &mut Pcg32, vp: Viewport) -> Self {
        let items = (0..5)
            .map(|_| Cloud {
                // Spawn across twice the width so the sky starts half empty
                pos: Vec2::new(
                    rng.random::<f32>() * vp.width * 2.0,
                    50.0 + rng.random::<f32>() * (vp.height * 0.4),
                ),
                size: Vec2::new(
                    60.0 + rng.random::<f32>() * 80.0,
                    30.0 + rng.random::<f32>() * 40.0,
                ),
                speed: 0.2 + rng.random::<f32>() * 0.3,
                opacity: 0.6 + rng.random::<f32>() * 0.2,
            })
            .collect();
        Self { items }
    }

    pub fn update(&mut self, rng: &mut Pcg32, vp: Viewport) {
        for cloud in &mut self.items {
            cloud.pos.x += cloud.speed;
            if cloud.pos.x > vp.width + cloud.size.x {
                cloud.pos.x = -cloud.size.x;
                cloud.pos.y = 50.0 + rng.random::<f32>() * (vp.height * 0.4);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cloud> {
        self.items.iter()
    }
}

/// One tile of the menu's fruit pattern. `pos` is the grid point; the sway
/// orbit and tilt are derived from time so the tile itself never mutates.
#[derive(Debug, Clone, Copy)]
pub struct FruitTile {
    pub pos: Vec2,
    offset: Vec2,
    speed: f32,
}

impl FruitTile {
    /// Current draw offset from the grid point. The grid coordinates feed
    /// the phase so neighboring tiles drift out of sync.
    pub fn sway(&self, now_ms: f64) -> Vec2 {
        let t = (now_ms * 0.001) as f32 * self.speed;
        Vec2::new(
            self.offset.x + (t + self.pos.x).sin() * 15.0,
            self.offset.y + (t + self.pos.y).cos() * 15.0,
        )
    }

    /// Current tilt in radians, up to 10 degrees either way.
    pub fn tilt(&self, now_ms: f64) -> f32 {
        let t = (now_ms * 0.001) as f32 * self.speed;
        (t.sin() * 10.0).to_radians()
    }
}

/// Grid of fruit tiles covering the whole menu screen, regenerated whenever
/// the viewport changes size.
#[derive(Debug, Clone, Default)]
pub struct FruitField {
    tiles: Vec<FruitTile>,
    generated_for: Option<Viewport>,
}

impl FruitField {
    /// Regenerate the grid if the viewport differs from the one the current
    /// tiles were laid out for.
    pub fn ensure(&mut self, rng: &mut Pcg32, vp: Viewport) {
        if self.generated_for == Some(vp) {
            return;
        }
        self.tiles.clear();

        let spacing = (vp.width.min(vp.height) * 0.15).max(100.0);
        let mut y = 0.0;
        while y < vp.height + spacing {
            let mut x = 0.0;
            while x < vp.width + spacing {
                self.tiles.push(FruitTile {
                    pos: Vec2::new(x, y),
                    offset: Vec2::new(
                        rng.random::<f32>() * 20.0 - 10.0,
                        rng.random::<f32>() * 20.0 - 10.0,
                    ),
                    speed: 0.5 + rng.random::<f32>() * 0.5,
                });
                x += spacing;
            }
            y += spacing;
        }
        self.generated_for = Some(vp);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FruitTile> {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn vp() -> Viewport {
        Viewport::new(600.0, 700.0)
    }

    #[test]
    fn clouds_wrap_to_left_edge() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut clouds = Clouds::new(&mut rng, vp());
        for cloud in &mut clouds.items {
            cloud.pos.x = vp().width + cloud.size.x + 0.5;
        }
        clouds.update(&mut rng, vp());
        for cloud in clouds.iter() {
            assert_eq!(cloud.pos.x, -cloud.size.x);
            assert!(cloud.pos.y >= 50.0);
            assert!(cloud.pos.y <= 50.0 + vp().height * 0.4);
        }
    }

    #[test]
    fn clouds_drift_right() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut clouds = Clouds::new(&mut rng, vp());
        let before: Vec<f32> = clouds.iter().map(|c| c.pos.x).collect();
        clouds.update(&mut rng, vp());
        for (cloud, x0) in clouds.iter().zip(before) {
            assert!(cloud.pos.x > x0);
        }
    }

    #[test]
    fn field_covers_viewport_and_tracks_resizes() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = FruitField::default();
        field.ensure(&mut rng, vp());

        // 600x700 gives 100px spacing, a 7x8 grid including overhang
        assert_eq!(field.iter().count(), 56);

        let count = field.iter().count();
        field.ensure(&mut rng, vp());
        assert_eq!(field.iter().count(), count, "same viewport, no regen");

        field.ensure(&mut rng, Viewport::new(1200.0, 700.0));
        assert_ne!(field.iter().count(), count);
    }

    #[test]
    fn tile_sway_stays_within_orbit() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = FruitField::default();
        field.ensure(&mut rng, vp());
        let tile = *field.iter().next().unwrap();

        for step in 0..100 {
            let sway = tile.sway(step as f64 * 33.0);
            assert!(sway.x.abs() <= 25.0 + 1e-3);
            assert!(sway.y.abs() <= 25.0 + 1e-3);
            assert!(tile.tilt(step as f64 * 33.0).abs() <= 10.0_f32.to_radians() + 1e-6);
        }
    }
}
