//! Board module - the playfield grid
//!
//! The board is a 10x20 grid of color ids stored as a flat row-major array.
//! Coordinates are `(x, y)` with x growing to the right and y growing downward;
//! row 0 is the top of the well.

use arrayvec::ArrayVec;

use crate::piece::FallingPiece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one call to [`Board::clear_full_rows`].
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// Plain 2D copy of the board, indexed `[y][x]`.
pub type Grid = [[Cell; WIDTH]; HEIGHT];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Build a board from rows given top to bottom.
    ///
    /// Missing rows at the top are left empty, so callers only need to spell
    /// out the interesting bottom part of a position. Extra rows and columns
    /// beyond the board are ignored.
    pub fn from_rows(rows: &[[Cell; WIDTH]]) -> Self {
        let mut board = Self::new();
        let skip = rows.len().saturating_sub(HEIGHT);
        let top = HEIGHT - (rows.len() - skip);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            let start = (top + i) * WIDTH;
            board.cells[start..start + WIDTH].copy_from_slice(row);
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::is_within_board(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// True if `(x, y)` addresses a cell of the board.
    #[inline]
    pub fn is_within_board(x: i8, y: i8) -> bool {
        y >= 0 && (y as usize) < HEIGHT && x >= 0 && (x as usize) < WIDTH
    }

    /// Cell value at `(x, y)`, or `None` outside the board.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Inside the board and not filled.
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY_CELL)
    }

    /// Inside the board and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY_CELL)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&c| c != EMPTY_CELL))
    }

    /// Remove every complete row and let the rows above fall into the gap.
    ///
    /// Returns the indices (in the pre-clear board) of the removed rows, bottom
    /// to top. Rows are compacted in one bottom-up pass; the freed rows at the
    /// top become empty.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(EMPTY_CELL);
        cleared
    }

    /// Write the falling piece's non-empty tiles into the grid.
    ///
    /// Tiles that lie outside the board are dropped, so a piece that locks
    /// while poking over the top loses its hidden part.
    pub fn merge(&mut self, piece: &FallingPiece) {
        for (x, y, value) in piece.cells() {
            self.set(x, y, value);
        }
    }

    /// True when no cell is filled.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY_CELL)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Copy the board into a 2D grid without allocating.
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    pub fn to_grid(&self) -> Grid {
        let mut grid = [[EMPTY_CELL; WIDTH]; HEIGHT];
        self.write_grid(&mut grid);
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_row_major() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn from_rows_anchors_to_bottom() {
        let board = Board::from_rows(&[[1; WIDTH], [0, 2, 0, 0, 0, 0, 0, 0, 0, 0]]);
        assert!(board.is_row_full(18));
        assert_eq!(board.get(1, 19), Some(2));
        assert_eq!(board.get(0, 19), Some(0));
        assert_eq!(board.filled_count(), WIDTH + 1);
    }

    #[test]
    fn clear_full_rows_compacts_non_adjacent_rows() {
        let mut marker = [0; WIDTH];
        marker[4] = 3;
        let board_rows = [marker, [1; WIDTH], [0, 5, 0, 0, 0, 0, 0, 0, 0, 0], [6; WIDTH]];
        let mut board = Board::from_rows(&board_rows);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // Survivors keep their relative order and sit at the bottom.
        assert_eq!(board.get(1, 19), Some(5));
        assert_eq!(board.get(4, 18), Some(3));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn clear_full_rows_handles_more_than_four_rows() {
        let mut board = Board::from_rows(&[[7; WIDTH]; 6]);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 6);
        assert!(board.is_clear());
    }
}
