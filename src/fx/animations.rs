//! Scalar feedback animations.
//!
//! Three tiny state machines the renderer samples: the player's catch
//! bounce, the score pop, and the menu item activation bounce. None of them
//! feed back into gameplay; resetting them mid-flight is always safe.

use std::f32::consts::PI;

use crate::consts::BOUNCE_MS;

/// 300ms sinusoidal scale pulse on the player sprite.
///
/// Retriggering while active restarts the timer, it never stacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchBounce {
    started_ms: Option<f64>,
}

impl CatchBounce {
    pub fn trigger(&mut self, now_ms: f64) {
        self.started_ms = Some(now_ms);
    }

    /// Expire a finished pulse.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(start) = self.started_ms {
            if now_ms - start >= BOUNCE_MS {
                self.started_ms = None;
            }
        }
    }

    /// Current sprite scale; 1.0 when idle.
    pub fn scale(&self, now_ms: f64) -> f32 {
        match self.started_ms {
            Some(start) => {
                let progress = ((now_ms - start) / BOUNCE_MS).clamp(0.0, 1.0) as f32;
                1.0 + (progress * PI).sin() * 0.15
            }
            None => 1.0,
        }
    }

    pub fn reset(&mut self) {
        self.started_ms = None;
    }
}

/// Score pop: an upward velocity integrated into a scale, reversed past the
/// upper bound, clamped back to neutral. One over/under bounce per trigger,
/// not a sustained oscillation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePulse {
    scale: f32,
    velocity: f32,
}

impl Default for ScorePulse {
    fn default() -> Self {
        Self {
            scale: 1.0,
            velocity: 0.0,
        }
    }
}

impl ScorePulse {
    pub fn trigger(&mut self) {
        self.velocity = 0.15;
    }

    pub fn update(&mut self) {
        if self.scale <= 1.0 && self.velocity == 0.0 {
            return;
        }
        self.scale += self.velocity;
        if self.scale > 1.3 {
            self.velocity = -0.1;
        }
        if self.scale < 1.0 {
            self.scale = 1.0;
            self.velocity = 0.0;
        }
    }

    /// Current score text scale, always >= 1.0.
    pub fn value(&self) -> f32 {
        self.scale
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-item menu activation bounce. Intensity snaps to 1.0 on trigger and
/// decays linearly; the draw offset traces half a sine through it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBounce {
    intensity: Vec<f32>,
}

impl MenuBounce {
    pub fn new(items: usize) -> Self {
        Self {
            intensity: vec![0.0; items],
        }
    }

    /// Out-of-range indices are ignored.
    pub fn trigger(&mut self, index: usize) {
        if let Some(slot) = self.intensity.get_mut(index) {
            *slot = 1.0;
        }
    }

    pub fn update(&mut self) {
        for value in &mut self.intensity {
            *value = (*value - 0.1).max(0.0);
        }
    }

    /// Vertical draw offset for an item, in pixels.
    pub fn offset(&self, index: usize) -> f32 {
        let intensity = self.intensity.get(index).copied().unwrap_or(0.0);
        (intensity * PI).sin() * 10.0
    }

    /// Whether an item's bounce is still in flight.
    pub fn active(&self, index: usize) -> bool {
        self.intensity.get(index).copied().unwrap_or(0.0) > 0.0
    }
}
