//! Copy-only view of a game for renderers.

use arrayvec::ArrayVec;

use crate::board::Grid;
use crate::piece::FallingPiece;
use crate::types::{Edition, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, MAX_PREVIEW};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub edition: Edition,
    pub board: Grid,
    pub active: Option<FallingPiece>,
    /// Row offset where the active piece would land, when the shadow is enabled.
    pub shadow_y: Option<i8>,
    pub next: ArrayVec<PieceKind, MAX_PREVIEW>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.shadow_y = None;
        self.next.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.running = false;
        self.paused = false;
        self.game_over = false;
    }

    /// True while input should affect the game.
    pub fn playable(&self) -> bool {
        self.running && !self.paused && !self.game_over
    }

    /// The active piece moved down to its shadow row.
    pub fn shadow(&self) -> Option<FallingPiece> {
        let active = self.active?;
        let y = self.shadow_y?;
        Some(active.moved(0, y - active.pos.y))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            board: [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            shadow_y: None,
            next: ArrayVec::new(),
            score: 0,
            level: 0,
            lines: 0,
            running: false,
            paused: false,
            game_over: false,
        }
    }
}
