//! Terminal input.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Keys act
//! once per press; terminal auto-repeat provides held movement.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, should_quit};
