//! Tetrimino shapes as square matrices, rotated by transposition.
//!
//! Each template is an `n x n` matrix (n = 2, 3 or 4) whose non-zero entries
//! hold the piece's color id. Rotation never looks up a table: a clockwise
//! turn is a transpose followed by reversing every row, a counter-clockwise
//! turn is a transpose followed by reversing the row order.

use crate::types::{Cell, Edition, PieceKind, EMPTY_CELL};

/// Largest template side length (the I piece).
pub const MAX_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetrimino {
    size: u8,
    cells: [[Cell; MAX_SIZE]; MAX_SIZE],
}

impl Tetrimino {
    /// Build a matrix from its rows.
    ///
    /// Returns `None` unless the rows form a non-empty square of side at most
    /// [`MAX_SIZE`].
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SIZE || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let mut cells = [[EMPTY_CELL; MAX_SIZE]; MAX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..size].copy_from_slice(row);
        }
        Some(Self {
            size: size as u8,
            cells,
        })
    }

    /// Spawn-orientation template for a piece kind.
    pub fn template(kind: PieceKind) -> Self {
        let (size, filled): (u8, &[(usize, usize)]) = match kind {
            PieceKind::I => (4, &[(0, 1), (1, 1), (2, 1), (3, 1)]),
            PieceKind::O => (2, &[(0, 0), (1, 0), (0, 1), (1, 1)]),
            PieceKind::T => (3, &[(1, 0), (0, 1), (1, 1), (2, 1)]),
            PieceKind::S => (3, &[(1, 0), (2, 0), (0, 1), (1, 1)]),
            PieceKind::Z => (3, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
            PieceKind::J => (3, &[(0, 0), (0, 1), (1, 1), (2, 1)]),
            PieceKind::L => (3, &[(2, 0), (0, 1), (1, 1), (2, 1)]),
        };
        Self::filled(kind, size, filled)
    }

    /// Spawn shapes of the two-piece prototype: a flat I on the top row and
    /// a standing L. Other kinds use [`Tetrimino::template`].
    pub fn prototype(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::filled(kind, 4, &[(0, 0), (1, 0), (2, 0), (3, 0)]),
            PieceKind::L => Self::filled(kind, 3, &[(0, 0), (0, 1), (0, 2), (1, 2)]),
            _ => Self::template(kind),
        }
    }

    /// Spawn shape of `kind` in the given edition.
    pub fn for_edition(kind: PieceKind, edition: Edition) -> Self {
        match edition {
            Edition::Prototype => Self::prototype(kind),
            Edition::Classic | Edition::Modern => Self::template(kind),
        }
    }

    fn filled(kind: PieceKind, size: u8, filled: &[(usize, usize)]) -> Self {
        let c = kind.color_id();
        let mut cells = [[EMPTY_CELL; MAX_SIZE]; MAX_SIZE];
        for &(x, y) in filled {
            cells[y][x] = c;
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Value at column `x`, row `y`; empty outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.size() && y < self.size() {
            self.cells[y][x]
        } else {
            EMPTY_CELL
        }
    }

    /// Mirror across the main diagonal.
    pub fn transpose(&self) -> Self {
        let n = self.size();
        let mut out = *self;
        for y in 0..n {
            for x in 0..n {
                out.cells[y][x] = self.cells[x][y];
            }
        }
        out
    }

    /// Quarter turn clockwise.
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut out = self.transpose();
        for row in out.cells.iter_mut().take(n) {
            row[..n].reverse();
        }
        out
    }

    /// Quarter turn counter-clockwise.
    pub fn rotate_ccw(&self) -> Self {
        let n = self.size();
        let mut out = self.transpose();
        out.cells[..n].reverse();
        out
    }

    pub fn rotated(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    /// Filled cells as `(dx, dy, value)` relative to the matrix origin.
    pub fn tiles(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != EMPTY_CELL).then_some((x as i8, y as i8, v))
            })
        })
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_tiles_of_its_color() {
        for kind in PieceKind::ALL {
            let t = Tetrimino::template(kind);
            assert_eq!(t.tile_count(), 4, "{:?}", kind);
            assert!(t.tiles().all(|(_, _, v)| v == kind.color_id()));
        }
    }

    #[test]
    fn t_rotates_clockwise_to_point_right() {
        let t = Tetrimino::template(PieceKind::T).rotate_cw();
        let expected = Tetrimino::from_rows(&[&[0, 3, 0], &[0, 3, 3], &[0, 3, 0]]).unwrap();
        assert_eq!(t, expected);
    }

    #[test]
    fn l_rotates_counter_clockwise() {
        let l = Tetrimino::template(PieceKind::L).rotate_ccw();
        let expected = Tetrimino::from_rows(&[&[7, 7, 0], &[0, 7, 0], &[0, 7, 0]]).unwrap();
        assert_eq!(l, expected);
    }

    #[test]
    fn i_turns_into_a_column() {
        let i = Tetrimino::template(PieceKind::I).rotate_cw();
        let cols: Vec<i8> = i.tiles().map(|(x, _, _)| x).collect();
        assert_eq!(cols, vec![2, 2, 2, 2]);
    }

    #[test]
    fn prototype_shapes_start_on_the_top_row() {
        let i = Tetrimino::for_edition(PieceKind::I, Edition::Prototype);
        let rows: Vec<i8> = i.tiles().map(|(_, y, _)| y).collect();
        assert_eq!(rows, vec![0, 0, 0, 0]);

        let l = Tetrimino::prototype(PieceKind::L);
        let expected = Tetrimino::from_rows(&[&[7, 0, 0], &[7, 0, 0], &[7, 7, 0]]).unwrap();
        assert_eq!(l, expected);

        assert_eq!(
            Tetrimino::for_edition(PieceKind::L, Edition::Classic),
            Tetrimino::template(PieceKind::L)
        );
    }

    #[test]
    fn from_rows_rejects_non_square_input() {
        assert!(Tetrimino::from_rows(&[&[1, 1, 1, 1]]).is_none());
        assert!(Tetrimino::from_rows(&[]).is_none());
        let too_big: [&[Cell]; 5] = [&[1; 5]; 5];
        assert!(Tetrimino::from_rows(&too_big).is_none());
    }
}
