//! Remolino Effects - the stereo modulated-delay processor
//!
//! This crate implements the remolino effect on top of `remolino-core`:
//!
//! - [`ModDelay`] - Stereo modulated delay (chorus / slapback / flanger /
//!   vibrato), the processing core
//! - [`ModDelayParams`] - Lock-free shared parameter set
//! - [`DelayMode`] - Delay-band selector with the oscillator-to-seconds
//!   mapping
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use remolino_core::Effect;
//! use remolino_effects::{DelayMode, ModDelay, ModDelayParams};
//!
//! let params = Arc::new(ModDelayParams::new());
//! let mut effect = ModDelay::with_params(Arc::clone(&params));
//! effect.prepare(48000.0, 256);
//!
//! // A control thread can move parameters while audio runs
//! params.set_mode(DelayMode::Chorus);
//! params.set_dry_wet(0.7);
//!
//! let mut left = vec![0.0f32; 256];
//! let mut right = vec![0.0f32; 256];
//! effect.process_stereo_block(&mut left, &mut right);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod mod_delay;
pub mod mode;
pub mod params;

// Re-export main types at crate root
pub use mod_delay::ModDelay;
pub use mode::{DelayMode, MODE_LABELS};
pub use params::ModDelayParams;
