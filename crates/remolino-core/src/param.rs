//! Lock-free parameter storage for cross-thread control.
//!
//! Audio processors read parameters on a real-time thread while a control
//! thread (UI, CLI, host) writes them. [`AtomicF32`] gives each parameter
//! its own lock-free cell: a write becomes visible to the audio thread on
//! some subsequent sample with no blocking on either side. There is
//! deliberately no cross-parameter snapshot — each value is independently
//! "a recent value", which is the contract modulation effects actually
//! need, and anything stricter would require locks in the audio path.

use core::sync::atomic::{AtomicU32, Ordering};

/// An `f32` value in a lock-free atomic cell.
///
/// The value is stored as its IEEE 754 bit pattern in an [`AtomicU32`].
/// Stores use `Release` and loads use `Acquire`, so a written value is
/// fully formed when observed; torn reads are impossible.
///
/// # Example
///
/// ```rust
/// use remolino_core::AtomicF32;
///
/// let cell = AtomicF32::new(0.5);
/// cell.store(0.75); // control thread
/// assert_eq!(cell.load(), 0.75); // audio thread
/// ```
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    /// Create a cell holding `value`.
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    /// Read the current value.
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    /// Replace the current value.
    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f32> for AtomicF32 {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_roundtrip() {
        let cell = AtomicF32::new(0.0);
        for &v in &[0.0, -0.0, 1.0, -1.0, 0.1, 20.0, f32::MIN_POSITIVE] {
            cell.store(v);
            assert_eq!(cell.load().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(AtomicF32::default().load(), 0.0);
    }

    #[test]
    fn test_from_f32() {
        let cell = AtomicF32::from(0.5);
        assert_eq!(cell.load(), 0.5);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_cross_thread_visibility() {
        use std::sync::Arc;

        let cell = Arc::new(AtomicF32::new(0.0));
        let writer = Arc::clone(&cell);

        let handle = std::thread::spawn(move || {
            writer.store(0.25);
        });
        handle.join().unwrap();

        assert_eq!(cell.load(), 0.25);
    }
}
