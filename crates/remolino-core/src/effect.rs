//! Core Effect trait.
//!
//! The [`Effect`] trait is the interface between an audio processor and
//! whatever drives it with buffers — an offline renderer, a test harness,
//! or a host's block callback.
//!
//! ## Design Decisions
//!
//! - **Object-safe**: `dyn Effect` works for runtime dispatch, though
//!   static dispatch is preferred for performance.
//!
//! - **No allocations**: all methods are designed to be called in
//!   real-time audio contexts with zero heap allocations.
//!
//! - **Stereo-aware**: effects whose two channels share state (coupled
//!   delay lines, phase-offset modulation) override
//!   [`process_stereo`](Effect::process_stereo) and report
//!   [`is_true_stereo`](Effect::is_true_stereo); for everything else the
//!   default routes each channel through the mono path.

/// Core trait for audio effects.
///
/// Effects process samples one at a time or in blocks. Block methods have
/// default implementations in terms of the per-sample ones; override them
/// only when a more efficient block path exists.
///
/// # Example
///
/// ```rust
/// use remolino_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {
///         // Gain doesn't depend on sample rate
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
/// ```
pub trait Effect {
    /// Process a single mono sample.
    ///
    /// For effects with internal state (delay lines, oscillators), this
    /// advances the state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process one stereo frame.
    ///
    /// The default routes each channel through [`process`](Self::process)
    /// in turn, which is only correct for stateless or per-channel
    /// effects. True-stereo effects override this.
    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        (self.process(left), self.process(right))
    }

    /// Process a block of mono samples.
    ///
    /// # Panics
    /// Default implementation debug-panics if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of mono samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Process a stereo block in-place.
    ///
    /// Processes `min(left.len(), right.len())` frames; mismatched slice
    /// lengths are tolerated rather than being an error, with the excess
    /// of the longer channel left untouched.
    fn process_stereo_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        let frames = left.len().min(right.len());
        for i in 0..frames {
            let (l, r) = self.process_stereo(left[i], right[i]);
            left[i] = l;
            right[i] = r;
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate any sample-rate-dependent state (delay lengths
    /// in samples, oscillator increments).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state.
    ///
    /// Clears all internal state (delay lines, oscillator phase, feedback
    /// memory) without changing parameters. Called when playback
    /// stops/starts to prevent artifacts.
    fn reset(&mut self);

    /// Whether the stereo path carries cross-channel state.
    ///
    /// When `true`, callers must use [`process_stereo`](Self::process_stereo)
    /// or [`process_stereo_block`](Self::process_stereo_block) rather than
    /// running two mono instances.
    fn is_true_stereo(&self) -> bool {
        false
    }

    /// Report processing latency in samples.
    ///
    /// Default returns 0 (no latency).
    fn latency_samples(&self) -> usize {
        0
    }
}
