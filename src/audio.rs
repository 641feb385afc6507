//! Audio via Web Audio oscillators, no sound files.
//!
//! Two one-shot effects plus a low ambient loop. Every call degrades to
//! silence when the AudioContext is unavailable or still suspended.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// One-shot sound effects the scene controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Caught an edible drop
    Point,
    /// Session ended
    GameOver,
}

#[cfg(target_arch = "wasm32")]
const SFX_POINT_VOLUME: f32 = 0.12;
#[cfg(target_arch = "wasm32")]
const SFX_END_VOLUME: f32 = 0.15;
#[cfg(target_arch = "wasm32")]
const MUSIC_VOLUME: f32 = 0.08;

/// Oscillator graph of the running music loop, kept so it can be stopped.
#[cfg(target_arch = "wasm32")]
struct MusicHandle {
    osc_a: OscillatorNode,
    osc_b: OscillatorNode,
    lfo: OscillatorNode,
    lfo_gain: GainNode,
    gain: GainNode,
}

/// Owns the AudioContext and the music loop handle.
#[cfg(target_arch = "wasm32")]
pub struct AudioDirector {
    ctx: Option<AudioContext>,
    music: Option<MusicHandle>,
}

#[cfg(target_arch = "wasm32")]
impl Default for AudioDirector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioDirector {
    pub fn new() -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("failed to create AudioContext, audio disabled");
        }
        Self { ctx, music: None }
    }

    /// Resume the context after a user gesture.
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn play(&self, sound: Sound) {
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match sound {
            Sound::Point => self.play_point(ctx),
            Sound::GameOver => self.play_game_over(ctx),
        }
    }

    /// Start the ambient loop. Idempotent while already playing.
    pub fn start_music(&mut self) {
        if self.music.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        self.music = build_music(ctx);
    }

    /// Tear the loop down. Safe to call when nothing is playing.
    pub fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            music.osc_a.stop().ok();
            music.osc_b.stop().ok();
            music.lfo.stop().ok();
            music.lfo_gain.disconnect().ok();
            music.gain.disconnect().ok();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Point - short rising chirp
    fn play_point(&self, ctx: &AudioContext) {
        let Some((osc, gain)) = self.create_osc(ctx, 600.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(SFX_POINT_VOLUME, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(600.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(900.0, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Game over - sad descending
    fn play_game_over(&self, ctx: &AudioContext) {
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(SFX_END_VOLUME, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }
}

/// Two low oscillators a fifth apart into one gain node, with a slow LFO
/// breathing the gain. Dropping any handle leaves nodes running, so the
/// whole graph is returned for later teardown.
#[cfg(target_arch = "wasm32")]
fn build_music(ctx: &AudioContext) -> Option<MusicHandle> {
    let gain = ctx.create_gain().ok()?;
    gain.gain().set_value(MUSIC_VOLUME);
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    let osc_a = ctx.create_oscillator().ok()?;
    osc_a.set_type(OscillatorType::Sine);
    osc_a.frequency().set_value(110.0);
    osc_a.connect_with_audio_node(&gain).ok()?;

    let osc_b = ctx.create_oscillator().ok()?;
    osc_b.set_type(OscillatorType::Triangle);
    osc_b.frequency().set_value(164.8);
    osc_b.connect_with_audio_node(&gain).ok()?;

    let lfo = ctx.create_oscillator().ok()?;
    lfo.set_type(OscillatorType::Sine);
    lfo.frequency().set_value(0.125);
    let lfo_gain = ctx.create_gain().ok()?;
    lfo_gain.gain().set_value(MUSIC_VOLUME * 0.5);
    lfo.connect_with_audio_node(&lfo_gain).ok()?;
    lfo_gain.connect_with_audio_param(&gain.gain()).ok()?;

    osc_a.start().ok()?;
    osc_b.start().ok()?;
    lfo.start().ok()?;

    Some(MusicHandle {
        osc_a,
        osc_b,
        lfo,
        lfo_gain,
        gain,
    })
}
