//! CLI tooling for the RCA tree engine.

pub mod cli;
pub mod format;
