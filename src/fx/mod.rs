//! Cosmetic feedback layer.
//!
//! Everything here is derived from simulation events and time; nothing
//! feeds back into gameplay. The scene controller forwards each frame's
//! events through [`Effects::absorb`], then ticks [`Effects::update`].

pub mod animations;
pub mod backdrop;
pub mod particles;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Viewport;
use crate::sim::GameEvent;
use animations::{CatchBounce, ScorePulse};
use backdrop::{Clouds, FruitField};
use particles::Particles;

/// All per-session visual feedback state.
#[derive(Debug, Clone)]
pub struct Effects {
    pub bounce: CatchBounce,
    pub pulse: ScorePulse,
    pub particles: Particles,
    pub clouds: Clouds,
    pub field: FruitField,
    confetti_fired: bool,
    rng: Pcg32,
}

impl Effects {
    /// Seed is offset from the sim's so the two streams stay distinct.
    pub fn new(seed: u64) -> Self {
        Self {
            bounce: CatchBounce::default(),
            pulse: ScorePulse::default(),
            particles: Particles::default(),
            clouds: Clouds::default(),
            field: FruitField::default(),
            confetti_fired: false,
            rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// Fresh visual state for a new play session.
    pub fn reset_session(&mut self, vp: Viewport) {
        self.clouds = Clouds::new(&mut self.rng, vp);
        self.bounce.reset();
        self.pulse.reset();
        self.particles.clear();
        self.confetti_fired = false;
    }

    /// Lazily (re)build the menu fruit pattern for the current viewport.
    pub fn ensure_backdrop(&mut self, vp: Viewport) {
        self.field.ensure(&mut self.rng, vp);
    }

    /// Turn this frame's simulation events into bursts and bounces.
    pub fn absorb(&mut self, events: &[GameEvent], now_ms: f64) {
        for event in events {
            match *event {
                GameEvent::Caught { at, .. } => {
                    self.particles.catch_burst(&mut self.rng, at);
                    self.bounce.trigger(now_ms);
                    self.pulse.trigger();
                }
                GameEvent::Landed { at, .. } => {
                    self.particles.impact_burst(&mut self.rng, at);
                }
                GameEvent::Ended { .. } => {}
            }
        }
    }

    /// Per-frame advance. Clouds and particles keep moving through pause
    /// and game over; the scalar animations freeze with the sim.
    pub fn update(&mut self, vp: Viewport, now_ms: f64, running: bool) {
        self.clouds.update(&mut self.rng, vp);
        self.particles.update(vp);
        if running {
            self.bounce.update(now_ms);
            self.pulse.update();
        }
    }

    /// Fire the new-record confetti, at most once per session.
    pub fn confetti(&mut self, origin: Vec2) {
        if self.confetti_fired {
            return;
        }
        self.particles.confetti_burst(&mut self.rng, origin);
        self.confetti_fired = true;
    }
}
