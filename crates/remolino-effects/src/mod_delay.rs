//! Stereo modulated-delay processor.
//!
//! The classic chorus/flanger architecture: each channel is delayed by a
//! time that sweeps under an LFO, the delayed signal is blended with the
//! dry input, and a scaled copy of the delayed signal feeds back into the
//! delay line. The right channel runs the same sweep at a configurable
//! phase offset for stereo width.
//!
//! ## Signal flow per sample
//!
//! 1. `input + feedback` is written into both delay lines at the shared
//!    cursor position.
//! 2. The LFO produces both channel values (right derived from the left
//!    phase plus the offset) and advances.
//! 3. Each value is scaled by depth, then remapped from the fixed
//!    `[-1, 1]` domain onto the selected mode's delay band and converted
//!    to samples.
//! 4. Each delay line is read at its fractional offset behind the cursor.
//! 5. The delayed sample, scaled by the feedback amount, becomes the next
//!    sample's feedback term.
//! 6. Dry and wet blend in place. The delay lines never see the blended
//!    output, so feedback coloration builds up independently of the mix.
//!
//! ## Real-time behavior
//!
//! Buffers are allocated by [`ModDelay::prepare`]; the processing path
//! itself never allocates, locks, or blocks. Parameters arrive through
//! lock-free cells and may change on any sample boundary.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::sync::Arc;

use remolino_core::{
    DelayLine, Effect, ParamDescriptor, ParamFlags, ParameterInfo, StereoLfo, flush_denormal,
    mono_sum, wet_dry_mix_stereo,
};

use crate::mode::MODE_LABELS;
use crate::params::ModDelayParams;

/// Stereo delay storage, created on the first prepare call.
///
/// Both lines are written every sample, so their cursors stay in
/// lock-step and behave as one shared write head.
#[derive(Debug, Clone)]
struct StereoBuffers {
    left: DelayLine,
    right: DelayLine,
}

impl StereoBuffers {
    fn new(capacity: usize) -> Self {
        Self {
            left: DelayLine::new(capacity),
            right: DelayLine::new(capacity),
        }
    }

    fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

/// Stereo modulated-delay effect (chorus / slapback / flanger / vibrato).
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Dry / Wet | 0-1 | 0.5 |
/// | 1 | Feedback | 0-1 | 0.5 |
/// | 2 | Depth | 0-1 | 0.5 |
/// | 3 | Rate | 0.1-20 Hz | 10.0 |
/// | 4 | Phase Offset | 0-1 | 0.0 |
/// | 5 | Mode | 0-3 (stepped) | 0 (Chorus) |
///
/// # Lifecycle
///
/// A new processor is unprepared: processing passes audio through
/// untouched. [`prepare`](Self::prepare) allocates the delay storage for
/// the session sample rate and resets all state; it may be called again
/// at any point between blocks to reset, and reallocates only when the
/// sample rate actually changes.
///
/// # Example
///
/// ```rust
/// use remolino_core::Effect;
/// use remolino_effects::{DelayMode, ModDelay};
///
/// let mut effect = ModDelay::new();
/// effect.prepare(44100.0, 512);
///
/// let params = effect.params();
/// params.set_mode(DelayMode::Flanger);
/// params.set_rate_hz(0.5);
///
/// let mut left = vec![0.0f32; 512];
/// let mut right = vec![0.0f32; 512];
/// effect.process_stereo_block(&mut left, &mut right);
/// ```
#[derive(Debug, Clone)]
pub struct ModDelay {
    params: Arc<ModDelayParams>,
    buffers: Option<StereoBuffers>,
    lfo: StereoLfo,
    /// Feedback sample for regeneration (left), already feedback-scaled.
    feedback_l: f32,
    /// Feedback sample for regeneration (right), already feedback-scaled.
    feedback_r: f32,
    sample_rate: f32,
}

impl ModDelay {
    /// Delay storage headroom in seconds. The longest mode sweep reaches
    /// 1.0 s, so the buffer always has at least a full second of slack and
    /// reads wrap at most once.
    pub const MAX_DELAY_SECONDS: f32 = 2.0;

    /// Create an unprepared processor with its own parameter set.
    pub fn new() -> Self {
        Self::with_params(Arc::new(ModDelayParams::new()))
    }

    /// Create an unprepared processor sharing an existing parameter set.
    pub fn with_params(params: Arc<ModDelayParams>) -> Self {
        let rate = params.rate_hz();
        Self {
            params,
            buffers: None,
            lfo: StereoLfo::new(48000.0, rate),
            feedback_l: 0.0,
            feedback_r: 0.0,
            sample_rate: 48000.0,
        }
    }

    /// A shared handle to the parameter set.
    ///
    /// Hand this to a control thread; parameter changes become visible to
    /// the audio thread on a subsequent sample.
    pub fn params(&self) -> Arc<ModDelayParams> {
        Arc::clone(&self.params)
    }

    /// Allocate (or reuse) delay storage for `sample_rate` and reset all
    /// processing state.
    ///
    /// Must be called before processing; until then the processor passes
    /// audio through. Capacity is `sample_rate * MAX_DELAY_SECONDS`,
    /// recomputed from the current rate on every call — a rate change
    /// reallocates, a repeat call at the same rate only clears contents
    /// and resets the cursor, LFO phase, and feedback state.
    ///
    /// `block_size` does not affect the algorithm; it is surfaced in the
    /// diagnostics for hosts that log their session setup.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn prepare(&mut self, sample_rate: f32, block_size: usize) {
        let capacity = ((sample_rate * Self::MAX_DELAY_SECONDS) as usize).max(1);

        let reusable = matches!(&self.buffers, Some(b) if b.left.capacity() == capacity);
        if reusable {
            if let Some(buffers) = &mut self.buffers {
                buffers.clear();
            }
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(sample_rate, capacity, block_size, "allocating delay buffers");
            self.buffers = Some(StereoBuffers::new(capacity));
        }

        self.sample_rate = sample_rate;
        self.lfo.set_sample_rate(sample_rate);
        self.lfo.reset();
        self.feedback_l = 0.0;
        self.feedback_r = 0.0;
    }

    /// Whether delay storage has been allocated.
    pub fn is_prepared(&self) -> bool {
        self.buffers.is_some()
    }

    /// The session sample rate set by the last prepare call.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

impl Default for ModDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for ModDelay {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        // Mono input drives both channels; fold the stereo result back down.
        let (l, r) = self.process_stereo(input, input);
        mono_sum(l, r)
    }

    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        let Some(buffers) = self.buffers.as_mut() else {
            // Unprepared: pass through rather than touch missing storage
            return (left, right);
        };

        let dry_wet = self.params.dry_wet();
        let feedback = self.params.feedback();
        let depth = self.params.depth();
        let rate = self.params.rate_hz();
        let phase_offset = self.params.phase_offset();
        let mode = self.params.mode();

        // The delay lines receive input plus the previous sample's scaled
        // feedback — never the blended output.
        buffers.left.write(left + self.feedback_l);
        buffers.right.write(right + self.feedback_r);

        self.lfo.set_frequency(rate);
        self.lfo.set_phase_offset(phase_offset);
        let (lfo_l, lfo_r) = self.lfo.advance();

        // Depth scales the oscillator before the fixed-domain remap, so a
        // reduced depth sweeps a narrower band around the mode midpoint.
        let delay_l = mode.map_to_seconds(lfo_l * depth) * self.sample_rate;
        let delay_r = mode.map_to_seconds(lfo_r * depth) * self.sample_rate;

        let wet_l = buffers.left.read(delay_l);
        let wet_r = buffers.right.read(delay_r);

        self.feedback_l = flush_denormal(wet_l * feedback);
        self.feedback_r = flush_denormal(wet_r * feedback);

        wet_dry_mix_stereo(left, right, wet_l, wet_r, dry_wet)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        // A rate change invalidates delay contents and timing; run the full
        // prepare path (reallocate if needed, reset state).
        self.prepare(sample_rate, 0);
    }

    fn reset(&mut self) {
        if let Some(buffers) = &mut self.buffers {
            buffers.clear();
        }
        self.lfo.reset();
        self.feedback_l = 0.0;
        self.feedback_r = 0.0;
    }

    fn is_true_stereo(&self) -> bool {
        true
    }
}

impl ParameterInfo for ModDelay {
    fn param_count(&self) -> usize {
        6
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::unipolar("Dry / Wet", "Mix", 0.5).with_id("mdly_mix")),
            1 => Some(ParamDescriptor::unipolar("Feedback", "Fdbk", 0.5).with_id("mdly_fdbk")),
            2 => Some(ParamDescriptor::unipolar("Depth", "Depth", 0.5).with_id("mdly_depth")),
            3 => Some(
                ParamDescriptor::rate_hz(
                    ModDelayParams::MIN_RATE_HZ,
                    ModDelayParams::MAX_RATE_HZ,
                    10.0,
                )
                .with_id("mdly_rate"),
            ),
            4 => {
                Some(ParamDescriptor::unipolar("Phase Offset", "Phase", 0.0).with_id("mdly_phase"))
            }
            5 => Some(
                ParamDescriptor::custom("Mode", "Mode", 0.0, 3.0, 0.0)
                    .with_step(1.0)
                    .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED))
                    .with_step_labels(MODE_LABELS)
                    .with_id("mdly_mode"),
            ),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.params.dry_wet(),
            1 => self.params.feedback(),
            2 => self.params.depth(),
            3 => self.params.rate_hz(),
            4 => self.params.phase_offset(),
            5 => self.params.mode().index() as f32,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.params.set_dry_wet(value),
            1 => self.params.set_feedback(value),
            2 => self.params.set_depth(value),
            3 => self.params.set_rate_hz(value),
            4 => self.params.set_phase_offset(value),
            5 => self
                .params
                .set_mode(crate::mode::DelayMode::from_index(value.clamp(0.0, 3.0) as u32)),
            _ => {}
        }
    }
}
