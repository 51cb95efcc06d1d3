//! Terminal rendering.
//!
//! A small game-oriented layer: [`GameView`] draws a snapshot into a
//! [`FrameBuffer`] of styled glyphs, and [`TerminalRenderer`] pushes frames to
//! the terminal. Two terminal columns per board cell keep the aspect ratio
//! close to square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, GameView, Viewport, MAX_CELL_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
