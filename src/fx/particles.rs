//! Particle system for catch, impact and confetti effects.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::Viewport;
use crate::view::Color;

/// Downward acceleration applied to every particle per tick.
const GRAVITY: f32 = 0.15;
/// How far past the viewport edge a particle may drift before culling.
const MARGIN: f32 = 50.0;

/// Which shape the renderer draws for a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Five-point star, used for confetti.
    Star,
    /// Two overlapping rotated squares, used on catches.
    Sparkle,
    /// Plain filled circle, used for ground impacts.
    Dust,
}

/// A single particle with physics and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub kind: ParticleKind,
    pub rotation: f32,
    pub rot_speed: f32,
    pub color: Color,
}

impl Particle {
    /// Advance one tick of physics. Returns false when expired or far
    /// enough off screen; there is no top bound so confetti thrown above
    /// the viewport falls back in.
    pub fn tick(&mut self, vp: Viewport) -> bool {
        self.pos += self.vel;
        self.rotation += self.rot_speed;
        self.vel.y += GRAVITY;
        self.life -= self.decay;

        self.life > 0.0
            && self.pos.x >= -MARGIN
            && self.pos.x <= vp.width + MARGIN
            && self.pos.y <= vp.height + MARGIN
    }
}

/// All live particles. Bursts push, `update` integrates and culls.
#[derive(Debug, Clone, Default)]
pub struct Particles {
    items: Vec<Particle>,
}

impl Particles {
    pub fn update(&mut self, vp: Viewport) {
        self.items.retain_mut(|p| p.tick(vp));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Ring of 12 warm sparkles thrown out from a catch point.
    pub fn catch_burst(&mut self, rng: &mut Pcg32, at: Vec2) {
        for i in 0..12 {
            let angle = TAU * i as f32 / 12.0;
            let speed = 2.0 + rng.random::<f32>() * 3.0;
            self.items.push(Particle {
                pos: at,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
                life: 1.0,
                decay: 0.02 + rng.random::<f32>() * 0.01,
                size: 4.0 + rng.random::<f32>() * 4.0,
                kind: ParticleKind::Sparkle,
                rotation: rng.random::<f32>() * TAU,
                rot_speed: (rng.random::<f32>() - 0.5) * 0.2,
                color: Color::hsl(
                    40.0 + rng.random::<f32>() * 40.0,
                    100.0,
                    60.0 + rng.random::<f32>() * 30.0,
                ),
            });
        }
    }

    /// Low fan of 8 earth-toned dust puffs where a drop hit the ground.
    /// Vertical speed is halved so the dust hugs the floor.
    pub fn impact_burst(&mut self, rng: &mut Pcg32, at: Vec2) {
        for _ in 0..8 {
            let angle = PI + (rng.random::<f32>() - 0.5) * 1.5;
            let speed = 1.0 + rng.random::<f32>() * 2.0;
            self.items.push(Particle {
                pos: at,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed * 0.5),
                life: 1.0,
                decay: 0.015 + rng.random::<f32>() * 0.01,
                size: 3.0 + rng.random::<f32>() * 5.0,
                kind: ParticleKind::Dust,
                rotation: 0.0,
                rot_speed: 0.0,
                color: Color::hsl(
                    25.0 + rng.random::<f32>() * 15.0,
                    40.0 + rng.random::<f32>() * 20.0,
                    30.0 + rng.random::<f32>() * 20.0,
                ),
            });
        }
    }

    /// 30 rainbow stars launched upward for a new personal best.
    pub fn confetti_burst(&mut self, rng: &mut Pcg32, at: Vec2) {
        for i in 0..30 {
            let angle = TAU * i as f32 / 30.0 + rng.random::<f32>() * 0.5;
            let speed = 3.0 + rng.random::<f32>() * 4.0;
            self.items.push(Particle {
                pos: at,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed - 2.0),
                life: 1.0,
                decay: 0.008 + rng.random::<f32>() * 0.005,
                size: 5.0 + rng.random::<f32>() * 8.0,
                kind: ParticleKind::Star,
                rotation: rng.random::<f32>() * TAU,
                rot_speed: (rng.random::<f32>() - 0.5) * 0.3,
                color: Color::hsl(rng.random::<f32>() * 360.0, 100.0, 50.0 + rng.random::<f32>() * 30.0),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn vp() -> Viewport {
        Viewport::new(600.0, 700.0)
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn still(kind: ParticleKind) -> Particle {
        Particle {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            life: 1.0,
            decay: 0.1,
            size: 4.0,
            kind,
            rotation: 0.0,
            rot_speed: 0.0,
            color: Color::Css("#ffffff"),
        }
    }

    #[test]
    fn particle_expires_when_life_runs_out() {
        let mut p = still(ParticleKind::Dust);
        p.decay = 0.25;
        for _ in 0..3 {
            assert!(p.tick(vp()), "alive while life positive");
        }
        assert!(!p.tick(vp()), "expires on the fourth tick");
    }

    #[test]
    fn particle_accelerates_downward() {
        let mut p = still(ParticleKind::Dust);
        p.decay = 0.001;
        p.tick(vp());
        p.tick(vp());
        assert!((p.vel.y - 2.0 * GRAVITY).abs() < 1e-6);
        assert!(p.pos.y > 300.0, "gravity pulls the particle down");
    }

    #[test]
    fn particle_culled_past_side_margin_but_not_above() {
        let mut left = still(ParticleKind::Star);
        left.pos.x = -MARGIN - 1.0;
        left.decay = 0.0;
        assert!(!left.tick(vp()));

        let mut above = still(ParticleKind::Star);
        above.pos.y = -500.0;
        above.vel.y = -1.0;
        above.decay = 0.0;
        assert!(above.tick(vp()), "no top bound, confetti may re-enter");
    }

    #[test]
    fn bursts_push_expected_counts() {
        let mut rng = rng();
        let mut particles = Particles::default();
        particles.catch_burst(&mut rng, Vec2::new(100.0, 100.0));
        assert_eq!(particles.len(), 12);
        particles.impact_burst(&mut rng, Vec2::new(100.0, 620.0));
        assert_eq!(particles.len(), 20);
        particles.confetti_burst(&mut rng, Vec2::new(300.0, 250.0));
        assert_eq!(particles.len(), 50);
        assert!(particles.iter().all(|p| p.life == 1.0));

        particles.clear();
        assert!(particles.is_empty());
    }

    #[test]
    fn update_drops_dead_particles() {
        let mut particles = Particles::default();
        particles.items.push(still(ParticleKind::Sparkle));
        let mut gone = still(ParticleKind::Sparkle);
        gone.decay = 2.0;
        particles.items.push(gone);

        particles.update(vp());
        assert_eq!(particles.len(), 1);
    }

    #[test]
    fn impact_dust_stays_low() {
        let mut rng = rng();
        let mut particles = Particles::default();
        particles.impact_burst(&mut rng, Vec2::new(100.0, 620.0));
        for p in particles.iter() {
            assert!(p.vel.y.abs() <= 1.5, "halved vertical speed, got {}", p.vel.y);
            assert_eq!(p.kind, ParticleKind::Dust);
        }
    }
}
