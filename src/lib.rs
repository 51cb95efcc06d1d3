//! Blocktris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the
//! application layer shared by the binary and the integration tests:
//! configuration loading and command-line overrides.

pub mod cli;
pub mod config;

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
