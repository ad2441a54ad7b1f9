//! CLI subcommands.

pub mod dump;
pub mod reset;
pub mod seed;
