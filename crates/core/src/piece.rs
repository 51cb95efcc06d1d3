//! The falling piece: a tetrimino matrix plus its offset on the board.

use crate::board::Board;
use crate::tetrimino::Tetrimino;
use crate::types::{Cell, PieceKind, BOARD_WIDTH};

/// Board-relative offset of a matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub tiles: Tetrimino,
    pub pos: Position,
}

impl FallingPiece {
    /// A fresh piece in spawn orientation on row 0.
    ///
    /// `centered` places the matrix in the middle of the board; otherwise it
    /// starts at the left wall.
    pub fn spawn(kind: PieceKind, centered: bool) -> Self {
        Self::spawn_shaped(kind, Tetrimino::template(kind), centered)
    }

    /// Like [`FallingPiece::spawn`] with an explicit spawn matrix.
    pub fn spawn_shaped(kind: PieceKind, tiles: Tetrimino, centered: bool) -> Self {
        let x = if centered {
            (BOARD_WIDTH as i8 - tiles.size() as i8) / 2
        } else {
            0
        };
        Self {
            kind,
            tiles,
            pos: Position::new(x, 0),
        }
    }

    /// Absolute board coordinates and values of the filled tiles.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.tiles
            .tiles()
            .map(move |(dx, dy, v)| (self.pos.x + dx, self.pos.y + dy, v))
    }

    /// Can the piece be shifted by `(dx, dy)` without leaving the board or
    /// overlapping a filled cell? Empty matrix entries never collide.
    pub fn can_move(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.cells().all(|(x, y, _)| board.is_empty(x + dx, y + dy))
    }

    /// Does the piece fit where it is?
    pub fn fits(&self, board: &Board) -> bool {
        self.can_move(board, 0, 0)
    }

    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            pos: Position::new(self.pos.x + dx, self.pos.y + dy),
            ..*self
        }
    }

    /// Same offset, matrix turned a quarter. No collision check.
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            tiles: self.tiles.rotated(clockwise),
            ..*self
        }
    }

    /// How many rows the piece can fall before it rests on something.
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while self.can_move(board, 0, distance + 1) {
            distance += 1;
        }
        distance
    }
}
