//! Command implementations for the shelfr CLI
//!
//! Each submodule implements one family of subcommands against an
//! already-seeded catalog store. Commands format with the `output` module
//! and honor the global quiet/json flags; none of them talk to the network.

pub mod browse;
pub mod list;
pub mod mutate;
