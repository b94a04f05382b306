//! Subcommand implementations

pub mod replay;
pub mod scan;
pub mod synth;
