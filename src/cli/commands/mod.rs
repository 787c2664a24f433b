//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod best;
pub mod play;
