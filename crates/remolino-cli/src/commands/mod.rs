//! CLI subcommand implementations.

pub mod params;
pub mod process;
