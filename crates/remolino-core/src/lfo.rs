//! Low-frequency oscillator for stereo modulation effects.
//!
//! Provides the control signal that sweeps the delay time in chorus,
//! flanger, and vibrato processing. The oscillator produces a pair of
//! sine outputs per step: the right channel is phase-offset from the left
//! to create stereo width.

use core::f32::consts::TAU;
use libm::sinf;

/// Stereo low-frequency oscillator with a single phase accumulator.
///
/// One authoritative phase drives both channels. The right-channel value
/// is evaluated at `phase + phase_offset` (wrapped), recomputed from the
/// authoritative phase on every step rather than integrated by a second
/// oscillator — two independent accumulators would drift apart over time,
/// while a derived offset keeps the channels locked.
///
/// Both outputs are evaluated *before* the phase advances, so the first
/// step after a reset sees phase 0 exactly.
///
/// # Example
///
/// ```rust
/// use remolino_core::StereoLfo;
///
/// let mut lfo = StereoLfo::new(44100.0, 2.0); // 2 Hz
/// lfo.set_phase_offset(0.25); // right channel 90° ahead
///
/// let (left, right) = lfo.advance();
/// ```
#[derive(Debug, Clone)]
pub struct StereoLfo {
    /// Current phase position [0.0, 1.0)
    phase: f32,
    /// Phase increment per sample
    phase_inc: f32,
    /// Right-channel offset in cycles [0.0, 1.0]
    phase_offset: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl Default for StereoLfo {
    fn default() -> Self {
        Self::new(48000.0, 1.0)
    }
}

impl StereoLfo {
    /// Create a new LFO with the given sample rate and frequency.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: freq_hz / sample_rate,
            phase_offset: 0.0,
            sample_rate,
        }
    }

    /// Set frequency in Hz.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.phase_inc = freq_hz / self.sample_rate;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase_inc * self.sample_rate
    }

    /// Set the right-channel phase offset in cycles (0.0 - 1.0).
    ///
    /// 0.0 = in phase, 0.25 = 90°, 0.5 = 180°.
    pub fn set_phase_offset(&mut self, offset: f32) {
        self.phase_offset = offset.clamp(0.0, 1.0);
    }

    /// Get the right-channel phase offset in cycles.
    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Get current phase (0.0 - 1.0).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Produce the next `(left, right)` sine pair and advance the phase.
    ///
    /// Both values are computed at the current phase; the right channel at
    /// `phase + phase_offset` wrapped into one cycle. Only then does the
    /// authoritative phase advance by `freq / sample_rate`, wrapping by
    /// subtracting one full cycle when it exceeds 1.
    #[inline]
    pub fn advance(&mut self) -> (f32, f32) {
        let left = sinf(TAU * self.phase);

        let mut right_phase = self.phase + self.phase_offset;
        if right_phase > 1.0 {
            right_phase -= 1.0;
        }
        let right = sinf(TAU * right_phase);

        self.phase += self.phase_inc;
        if self.phase > 1.0 {
            self.phase -= 1.0;
        }

        (left, right)
    }

    /// Set sample rate, preserving the configured frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let freq = self.phase_inc * self.sample_rate;
        self.sample_rate = sample_rate;
        self.set_frequency(freq);
    }
}
