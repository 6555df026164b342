//! Delay-mode selection and the oscillator-to-seconds mapping.
//!
//! The processor's character is set by which band of delay times the LFO
//! sweeps. Each mode fixes a target range in seconds; the oscillator value
//! is remapped linearly from the full bipolar domain onto that range.

use remolino_core::map_range;

/// Labels for the mode parameter, indexed by [`DelayMode::index`].
pub const MODE_LABELS: &[&str] = &["Chorus", "Slapback", "Flanger", "Vibrato"];

/// Selects the delay-time band the LFO sweeps.
///
/// | mode | delay range | character |
/// |------|-------------|-----------|
/// | [`Chorus`](Self::Chorus) | 5-30 ms | classic detune shimmer |
/// | [`Slapback`](Self::Slapback) | 1-5 ms | tight comb/doubling |
/// | [`Flanger`](Self::Flanger) | 30-100 ms | broad sweep |
/// | [`Vibrato`](Self::Vibrato) | 100-1000 ms | slow pitch wobble |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DelayMode {
    /// 5-30 ms sweep.
    #[default]
    Chorus,
    /// 1-5 ms sweep.
    Slapback,
    /// 30-100 ms sweep.
    Flanger,
    /// 100-1000 ms sweep.
    Vibrato,
}

impl DelayMode {
    /// Construct from a parameter index; out-of-range values fall back to
    /// [`Chorus`](Self::Chorus).
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => Self::Slapback,
            2 => Self::Flanger,
            3 => Self::Vibrato,
            _ => Self::Chorus,
        }
    }

    /// The parameter index of this mode.
    pub const fn index(self) -> u32 {
        match self {
            Self::Chorus => 0,
            Self::Slapback => 1,
            Self::Flanger => 2,
            Self::Vibrato => 3,
        }
    }

    /// Display label for this mode.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chorus => "Chorus",
            Self::Slapback => "Slapback",
            Self::Flanger => "Flanger",
            Self::Vibrato => "Vibrato",
        }
    }

    /// The `(low, high)` delay bounds of this mode in seconds.
    pub const fn range_seconds(self) -> (f32, f32) {
        match self {
            Self::Chorus => (0.005, 0.03),
            Self::Slapback => (0.001, 0.005),
            Self::Flanger => (0.03, 0.1),
            Self::Vibrato => (0.1, 1.0),
        }
    }

    /// Map an oscillator value onto this mode's delay range in seconds.
    ///
    /// The source domain is fixed at `[-1, 1]` regardless of the actual
    /// excursion of the input: a depth-attenuated oscillator therefore
    /// sweeps a proportionally narrower band centered on the range
    /// midpoint, and zero always maps to the midpoint exactly.
    #[inline]
    pub fn map_to_seconds(self, value: f32) -> f32 {
        let (lo, hi) = self.range_seconds();
        map_range(value, -1.0, 1.0, lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for mode in [
            DelayMode::Chorus,
            DelayMode::Slapback,
            DelayMode::Flanger,
            DelayMode::Vibrato,
        ] {
            assert_eq!(DelayMode::from_index(mode.index()), mode);
        }
    }

    #[test]
    fn test_out_of_range_index_falls_back() {
        assert_eq!(DelayMode::from_index(4), DelayMode::Chorus);
        assert_eq!(DelayMode::from_index(u32::MAX), DelayMode::Chorus);
    }

    #[test]
    fn test_labels_match_indices() {
        for (i, &label) in MODE_LABELS.iter().enumerate() {
            assert_eq!(DelayMode::from_index(i as u32).label(), label);
        }
    }

    #[test]
    fn test_extremes_land_on_range_bounds() {
        for mode in [
            DelayMode::Chorus,
            DelayMode::Slapback,
            DelayMode::Flanger,
            DelayMode::Vibrato,
        ] {
            let (lo, hi) = mode.range_seconds();
            assert_eq!(mode.map_to_seconds(-1.0), lo);
            assert_eq!(mode.map_to_seconds(1.0), hi);
        }
    }

    #[test]
    fn test_zero_maps_to_midpoint() {
        let mid = DelayMode::Chorus.map_to_seconds(0.0);
        assert!((mid - 0.0175).abs() < 1e-7);

        let mid = DelayMode::Vibrato.map_to_seconds(0.0);
        assert!((mid - 0.55).abs() < 1e-7);
    }

    #[test]
    fn test_attenuated_input_compresses_toward_midpoint() {
        // Half-scale oscillator reaches only half the band
        let lo = DelayMode::Flanger.map_to_seconds(-0.5);
        let hi = DelayMode::Flanger.map_to_seconds(0.5);
        assert!(lo > 0.03 && hi < 0.1);
        let mid = DelayMode::Flanger.map_to_seconds(0.0);
        assert!((mid - (lo + hi) * 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_max_delay_below_two_seconds() {
        // The longest mapped delay must fit the processor's buffer headroom
        for i in 0..4 {
            let (_, hi) = DelayMode::from_index(i).range_seconds();
            assert!(hi <= 1.0);
        }
    }
}
