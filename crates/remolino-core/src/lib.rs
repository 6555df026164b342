//! Remolino Core - DSP primitives for modulated-delay processing
//!
//! This crate provides the foundational building blocks for the remolino
//! effect processor, designed for real-time audio with zero allocation in
//! the audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for audio effects, with mono, stereo,
//!   and block processing entry points
//!
//! ## Delay & Modulation
//!
//! - [`DelayLine`] - Circular delay buffer with fractional-delay
//!   linear-interpolated reads
//! - [`StereoLfo`] - Single-accumulator LFO producing a phase-offset
//!   stereo pair per step
//!
//! ## Parameters
//!
//! - [`AtomicF32`] - Lock-free parameter cell for cross-thread control
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Runtime parameter discovery
//!
//! ## Utilities
//!
//! - Math functions: [`lerp`], [`map_range`], [`wet_dry_mix`],
//!   [`flush_denormal`], etc.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! remolino-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Lock-free control**: Parameters cross threads through atomic cells,
//!   never locks

#![cfg_attr(not(feature = "std"), no_std)]

pub mod delay;
pub mod effect;
pub mod lfo;
pub mod math;
pub mod param;
pub mod param_info;

// Re-export main types at crate root
pub use delay::DelayLine;
pub use effect::Effect;
pub use lfo::StereoLfo;
pub use math::{
    flush_denormal, lerp, map_range, mono_sum, ms_to_samples, samples_to_ms, wet_dry_mix,
    wet_dry_mix_stereo,
};
pub use param::AtomicF32;
pub use param_info::{ParamDescriptor, ParamFlags, ParamUnit, ParameterInfo};
