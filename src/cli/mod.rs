//! CLI infrastructure for the rigtac quick-play tool
//!
//! This module backs the `rigtac` binary: synthesize scripted sequences,
//! animate them through a live game, and scan boards given on the command
//! line.

pub mod commands;
pub mod output;
