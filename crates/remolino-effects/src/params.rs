//! Shared parameter set for the modulated-delay processor.
//!
//! The six parameters live in independent lock-free cells so a control
//! thread can move them while the audio thread is inside a block. Each
//! audio sample reads whatever values are current; there is no
//! cross-parameter snapshot and no smoothing — an instantaneous jump is
//! audible as a step, which is the accepted contract for this processor.

use core::sync::atomic::{AtomicU32, Ordering};
use remolino_core::AtomicF32;

use crate::mode::DelayMode;

/// The modulated-delay parameter set.
///
/// | param | range | default |
/// |-------|-------|---------|
/// | dry/wet | 0-1 | 0.5 |
/// | feedback | 0-1 | 0.5 |
/// | depth | 0-1 | 0.5 |
/// | rate | 0.1-20 Hz | 10 |
/// | phase offset | 0-1 cycles | 0 |
/// | mode | 0-3 | Chorus |
///
/// Setters clamp to the valid range. Share the set between the processor
/// and a control surface with `Arc`:
///
/// ```rust
/// use std::sync::Arc;
/// use remolino_effects::{ModDelayParams, DelayMode};
///
/// let params = Arc::new(ModDelayParams::new());
/// params.set_rate_hz(2.0);
/// params.set_mode(DelayMode::Flanger);
/// assert_eq!(params.rate_hz(), 2.0);
/// ```
#[derive(Debug)]
pub struct ModDelayParams {
    dry_wet: AtomicF32,
    feedback: AtomicF32,
    depth: AtomicF32,
    rate_hz: AtomicF32,
    phase_offset: AtomicF32,
    mode: AtomicU32,
}

impl ModDelayParams {
    /// Minimum LFO rate in Hz.
    pub const MIN_RATE_HZ: f32 = 0.1;
    /// Maximum LFO rate in Hz.
    pub const MAX_RATE_HZ: f32 = 20.0;

    /// Create a parameter set with the default values.
    pub fn new() -> Self {
        Self {
            dry_wet: AtomicF32::new(0.5),
            feedback: AtomicF32::new(0.5),
            depth: AtomicF32::new(0.5),
            rate_hz: AtomicF32::new(10.0),
            phase_offset: AtomicF32::new(0.0),
            mode: AtomicU32::new(DelayMode::Chorus.index()),
        }
    }

    /// Current dry/wet blend (0 = dry, 1 = wet).
    #[inline]
    pub fn dry_wet(&self) -> f32 {
        self.dry_wet.load()
    }

    /// Set the dry/wet blend, clamped to \[0, 1\].
    pub fn set_dry_wet(&self, value: f32) {
        self.dry_wet.store(value.clamp(0.0, 1.0));
    }

    /// Current feedback amount.
    #[inline]
    pub fn feedback(&self) -> f32 {
        self.feedback.load()
    }

    /// Set the feedback amount, clamped to \[0, 1\].
    pub fn set_feedback(&self, value: f32) {
        self.feedback.store(value.clamp(0.0, 1.0));
    }

    /// Current modulation depth.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth.load()
    }

    /// Set the modulation depth, clamped to \[0, 1\].
    pub fn set_depth(&self, value: f32) {
        self.depth.store(value.clamp(0.0, 1.0));
    }

    /// Current LFO rate in Hz.
    #[inline]
    pub fn rate_hz(&self) -> f32 {
        self.rate_hz.load()
    }

    /// Set the LFO rate in Hz, clamped to \[0.1, 20\].
    pub fn set_rate_hz(&self, value: f32) {
        self.rate_hz
            .store(value.clamp(Self::MIN_RATE_HZ, Self::MAX_RATE_HZ));
    }

    /// Current right-channel phase offset in cycles.
    #[inline]
    pub fn phase_offset(&self) -> f32 {
        self.phase_offset.load()
    }

    /// Set the right-channel phase offset, clamped to \[0, 1\].
    pub fn set_phase_offset(&self, value: f32) {
        self.phase_offset.store(value.clamp(0.0, 1.0));
    }

    /// Current delay mode.
    #[inline]
    pub fn mode(&self) -> DelayMode {
        DelayMode::from_index(self.mode.load(Ordering::Acquire))
    }

    /// Select the delay mode.
    pub fn set_mode(&self, mode: DelayMode) {
        self.mode.store(mode.index(), Ordering::Release);
    }
}

impl Default for ModDelayParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ModDelayParams::new();
        assert_eq!(params.dry_wet(), 0.5);
        assert_eq!(params.feedback(), 0.5);
        assert_eq!(params.depth(), 0.5);
        assert_eq!(params.rate_hz(), 10.0);
        assert_eq!(params.phase_offset(), 0.0);
        assert_eq!(params.mode(), DelayMode::Chorus);
    }

    #[test]
    fn test_setters_clamp() {
        let params = ModDelayParams::new();

        params.set_dry_wet(1.5);
        assert_eq!(params.dry_wet(), 1.0);
        params.set_dry_wet(-0.5);
        assert_eq!(params.dry_wet(), 0.0);

        params.set_feedback(2.0);
        assert_eq!(params.feedback(), 1.0);

        params.set_depth(-1.0);
        assert_eq!(params.depth(), 0.0);

        params.set_rate_hz(0.0);
        assert_eq!(params.rate_hz(), ModDelayParams::MIN_RATE_HZ);
        params.set_rate_hz(100.0);
        assert_eq!(params.rate_hz(), ModDelayParams::MAX_RATE_HZ);

        params.set_phase_offset(3.0);
        assert_eq!(params.phase_offset(), 1.0);
    }

    #[test]
    fn test_mode_roundtrip() {
        let params = ModDelayParams::new();
        for mode in [
            DelayMode::Chorus,
            DelayMode::Slapback,
            DelayMode::Flanger,
            DelayMode::Vibrato,
        ] {
            params.set_mode(mode);
            assert_eq!(params.mode(), mode);
        }
    }

    #[test]
    fn test_interior_mutability_through_shared_ref() {
        // Setters take &self, so a shared handle can drive the set
        let params = ModDelayParams::new();
        let view = &params;
        view.set_depth(0.8);
        assert_eq!(params.depth(), 0.8);
    }
}
