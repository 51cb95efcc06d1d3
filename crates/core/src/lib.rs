//! Core game logic - pure, deterministic, and testable
//!
//! Everything needed to play a session without a screen: the board, the
//! tetrimino matrices and their rotation, the falling piece, the piece
//! queue, the scoring tables and the per-edition rulesets. No I/O happens
//! here; the only side effect is `tracing` events on lock, start and game
//! over.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of color ids, collision queries, merge and line clearing
//! - [`tetrimino`]: square piece matrices, rotated by transposition
//! - [`piece`]: the falling piece (matrix plus board offset)
//! - [`rng`]: seeded LCG and the next-piece queue
//! - [`scoring`]: line scores, levels and drop intervals
//! - [`rules`]: which features each edition turns on
//! - [`game_state`]: one play session
//! - [`snapshot`]: copy-only view for renderers
//!
//! # Example
//!
//! ```
//! use blocktris_core::{GameState, Ruleset, TickOutcome};
//! use blocktris_core::types::GameAction;
//!
//! let mut game = GameState::new(Ruleset::modern(), 12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//! assert!(game.score() > 0); // Hard drop awards points
//!
//! // Gravity only fires once the drop interval has elapsed.
//! assert_eq!(game.advance(1), TickOutcome::Idle);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod tetrimino;

pub use blocktris_types as types;

pub use board::{Board, Grid};
pub use game_state::{GameState, LockEvent, TickOutcome};
pub use piece::{FallingPiece, Position};
pub use rng::{PieceQueue, SimpleRng};
pub use rules::{Ruleset, WALL_KICKS};
pub use scoring::{drop_interval_ms, drop_score, level_for_lines, line_score};
pub use snapshot::GameSnapshot;
pub use tetrimino::Tetrimino;
