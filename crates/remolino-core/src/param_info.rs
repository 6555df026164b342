//! Parameter introspection for discoverable effect parameters.
//!
//! The [`ParameterInfo`] trait and supporting types enable runtime
//! discovery and manipulation of an effect's parameters: a CLI can print
//! the parameter table, a host can bind controls, and a preset layer can
//! serialize values through the stable string ids.
//!
//! The system uses index-based parameter access. Each parameter is
//! described by a [`ParamDescriptor`] containing display metadata,
//! validation bounds, and the default value.

/// Parameter capability flags.
///
/// Small bitflag type; use [`union`](Self::union) to combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// An external controller may drive this parameter (default).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (enum-like, integer values).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz) - for frequency parameters like LFO rate.
    Hertz,
    /// Percentage (%) - for normalized parameters shown as 0-100.
    Percent,
    /// No unit - for dimensionless 0-1 or stepped parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// The `short_name` field should be 8 characters or less for compatibility
/// with hardware displays.
///
/// # Example
///
/// ```rust
/// use remolino_core::ParamDescriptor;
///
/// let rate = ParamDescriptor::rate_hz(0.1, 20.0, 10.0).with_id("mdly_rate");
/// assert_eq!(rate.string_id, "mdly_rate");
/// assert_eq!(rate.clamp(25.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Dry / Wet", "Phase Offset").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the effect is initialized or reset.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Human-readable stable ID for presets, debugging, and serialization.
    ///
    /// Convention: `"effect_param"` (e.g., `"mdly_rate"`).
    /// Default: `""` (unassigned).
    pub string_id: &'static str,

    /// Capability flags.
    pub flags: ParamFlags,

    /// Display labels for stepped parameters, one per integer step.
    ///
    /// Empty for continuous parameters.
    pub step_labels: &'static [&'static str],
}

impl ParamDescriptor {
    /// Parameter with a custom name and range, no unit.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            step_labels: &[],
        }
    }

    /// Normalized 0-1 parameter (mix, feedback, depth, phase offset).
    pub const fn unipolar(name: &'static str, short_name: &'static str, default: f32) -> Self {
        Self::custom(name, short_name, 0.0, 1.0, default)
    }

    /// LFO rate parameter in Hz.
    pub const fn rate_hz(min: f32, max: f32, default: f32) -> Self {
        Self {
            name: "Rate",
            short_name: "Rate",
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 0.05,
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            step_labels: &[],
        }
    }

    /// Sets the stable string ID.
    ///
    /// Builder pattern — call after a factory method or struct literal.
    pub const fn with_id(mut self, string_id: &'static str) -> Self {
        self.string_id = string_id;
        self
    }

    /// Sets the step increment.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the display labels for a stepped parameter.
    pub const fn with_step_labels(mut self, labels: &'static [&'static str]) -> Self {
        self.step_labels = labels;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }
}

/// Trait for effects that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the effect instance. Use [`param_count`](Self::param_count) to determine
/// valid indices.
///
/// # Thread Safety
///
/// This trait does not require thread safety by itself. Effects that store
/// parameters in atomic cells can forward `set_param` to them, making the
/// same values reachable lock-free from other threads through a shared
/// handle.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-bounds indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp the value to the descriptor range and ignore
    /// out-of-bounds indices.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against both [`ParamDescriptor::name`] and
    /// [`ParamDescriptor::short_name`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        for i in 0..self.param_count() {
            if let Some(desc) = self.param_info(i)
                && (desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name))
            {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEffect {
        mix: f32,
        rate: f32,
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(ParamDescriptor::unipolar("Mix", "Mix", 0.5).with_id("test_mix")),
                1 => Some(ParamDescriptor::rate_hz(0.1, 20.0, 10.0).with_id("test_rate")),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.mix,
                1 => self.rate,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            match index {
                0 => self.mix = self.param_info(0).unwrap().clamp(value),
                1 => self.rate = self.param_info(1).unwrap().clamp(value),
                _ => {}
            }
        }
    }

    #[test]
    fn test_param_info_lookup() {
        let effect = TestEffect {
            mix: 0.5,
            rate: 10.0,
        };

        assert_eq!(effect.param_count(), 2);
        assert_eq!(effect.param_info(0).unwrap().name, "Mix");
        assert_eq!(effect.param_info(1).unwrap().unit, ParamUnit::Hertz);
        assert!(effect.param_info(2).is_none());
    }

    #[test]
    fn test_get_set_with_clamping() {
        let mut effect = TestEffect {
            mix: 0.5,
            rate: 10.0,
        };

        effect.set_param(0, 0.75);
        assert_eq!(effect.get_param(0), 0.75);

        effect.set_param(0, 2.0);
        assert_eq!(effect.get_param(0), 1.0);

        effect.set_param(1, 0.01);
        assert_eq!(effect.get_param(1), 0.1);

        // Out of bounds: get returns 0, set is ignored
        assert_eq!(effect.get_param(99), 0.0);
        effect.set_param(99, 42.0);
        assert_eq!(effect.get_param(0), 1.0);
    }

    #[test]
    fn test_find_param_by_name() {
        let effect = TestEffect {
            mix: 0.5,
            rate: 10.0,
        };

        assert_eq!(effect.find_param_by_name("mix"), Some(0));
        assert_eq!(effect.find_param_by_name("RATE"), Some(1));
        assert_eq!(effect.find_param_by_name("unknown"), None);
    }

    #[test]
    fn test_descriptor_clamp() {
        let desc = ParamDescriptor::unipolar("Depth", "Depth", 0.5);
        assert_eq!(desc.clamp(0.5), 0.5);
        assert_eq!(desc.clamp(-1.0), 0.0);
        assert_eq!(desc.clamp(2.0), 1.0);
    }

    #[test]
    fn test_normalize_denormalize() {
        let desc = ParamDescriptor::rate_hz(0.1, 20.0, 10.0);

        assert_eq!(desc.normalize(0.1), 0.0);
        assert_eq!(desc.normalize(20.0), 1.0);

        let rt = desc.denormalize(desc.normalize(5.0));
        assert!((rt - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_zero_range() {
        let desc = ParamDescriptor::custom("Fixed", "Fixed", 1.0, 1.0, 1.0);
        assert_eq!(desc.normalize(1.0), 0.0);
    }

    #[test]
    fn test_stepped_descriptor() {
        const LABELS: &[&str] = &["A", "B", "C"];
        let desc = ParamDescriptor::custom("Mode", "Mode", 0.0, 2.0, 0.0)
            .with_step(1.0)
            .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED))
            .with_step_labels(LABELS);

        assert!(desc.flags.contains(ParamFlags::STEPPED));
        assert!(desc.flags.contains(ParamFlags::AUTOMATABLE));
        assert_eq!(desc.step_labels.len(), 3);
        assert_eq!(desc.step, 1.0);
    }

    #[test]
    fn test_param_flags() {
        assert!(ParamFlags::AUTOMATABLE.contains(ParamFlags::AUTOMATABLE));
        assert!(!ParamFlags::AUTOMATABLE.contains(ParamFlags::STEPPED));
        assert!(!ParamFlags::NONE.contains(ParamFlags::AUTOMATABLE));

        let combined = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
        assert!(combined.contains(ParamFlags::AUTOMATABLE));
        assert!(combined.contains(ParamFlags::STEPPED));
    }

    #[test]
    fn test_param_unit_suffix() {
        assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
        assert_eq!(ParamUnit::Percent.suffix(), "%");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
