//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no sample files. Every effect is
//! a handful of oscillators with gain envelopes, fired and forgotten; an
//! audio failure never reaches game state.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, BiquadFilterType, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Foam swish while brushing
    Bubble,
    /// Germ busted
    Sparkle,
    /// Round over with a mostly-clean mouth
    Win,
    /// Round over with the sugar bugs ahead
    Lose,
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Resume the audio context (browsers require a user gesture first).
    #[cfg(target_arch = "wasm32")]
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resume(&self) {}

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Resolved output volume after the mute flag
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    #[cfg(target_arch = "wasm32")]
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Bubble => self.play_bubble(ctx, vol),
            SoundEffect::Sparkle => self.play_sparkle(ctx, vol),
            SoundEffect::Win => self.play_win(ctx, vol),
            SoundEffect::Lose => self.play_lose(ctx, vol),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&self, _effect: SoundEffect) {}
}

// === Sound generators ===

#[cfg(target_arch = "wasm32")]
impl AudioManager {
    /// Create an oscillator wired through a fresh gain node
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

    /// Soft pop with a quick upward pitch ramp, randomized per bubble
    fn play_bubble(&self, ctx: &AudioContext, vol: f32) {
        let start_freq = 200.0 + js_sys::Math::random() as f32 * 100.0;
        let Some((osc, gain)) = self.create_osc(ctx, start_freq, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        let end_freq = 500.0 + js_sys::Math::random() as f32 * 200.0;
        osc.frequency().set_value_at_time(start_freq, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(end_freq, t + 0.1)
            .ok();

        gain.gain().set_value_at_time(0.0, t).ok();
        gain.gain()
            .linear_ramp_to_value_at_time(vol * 0.05, t + 0.02)
            .ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Clean double chime, an octave apart
    fn play_sparkle(&self, ctx: &AudioContext, vol: f32) {
        for (i, offset) in [0.0f64, 0.1].iter().enumerate() {
            let freq = if i == 0 { 880.0 } else { 1760.0 };
            if let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sine) {
                let t = ctx.current_time() + offset;
                gain.gain().set_value_at_time(0.0, t).ok();
                gain.gain()
                    .linear_ramp_to_value_at_time(vol * 0.05, t + 0.02)
                    .ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, t + 0.2)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.2).ok();
            }
        }
    }

    /// Major arpeggio: C5, E5, G5, C6
    fn play_win(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.25, 659.25, 783.99, 1046.50].iter().enumerate() {
            let delay = i as f64 * 0.1;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(0.0, t).ok();
                gain.gain()
                    .linear_ramp_to_value_at_time(vol * 0.1, t + 0.05)
                    .ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, t + 0.4)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }

    /// Descending womp-womp: G4, F#4, F4, E4 through a lowpass
    fn play_lose(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [392.00, 369.99, 349.23, 329.63].iter().enumerate() {
            let t = ctx.current_time() + i as f64 * 0.25;

            let Ok(osc) = ctx.create_oscillator() else { continue };
            let Ok(gain) = ctx.create_gain() else { continue };
            let Ok(filter) = ctx.create_biquad_filter() else { continue };

            osc.set_type(OscillatorType::Sawtooth);
            osc.frequency().set_value(*freq);
            filter.set_type(BiquadFilterType::Lowpass);
            filter.frequency().set_value(400.0);

            // Sawtooth is harsh; keep it quiet and muffled
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain()
                .linear_ramp_to_value_at_time(vol * 0.03, t + 0.05)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, t + 0.5)
                .ok();

            if osc.connect_with_audio_node(&filter).is_err() {
                continue;
            }
            if filter.connect_with_audio_node(&gain).is_err() {
                continue;
            }
            if gain.connect_with_audio_node(&ctx.destination()).is_err() {
                continue;
            }

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.5).ok();
        }
    }
}
