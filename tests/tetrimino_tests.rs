//! Tetrimino matrix and rotation tests

use blocktris::core::Tetrimino;
use blocktris::types::{Cell, PieceKind};

fn rows(t: &Tetrimino) -> Vec<Vec<Cell>> {
    (0..t.size())
        .map(|y| (0..t.size()).map(|x| t.get(x, y)).collect())
        .collect()
}

#[test]
fn test_template_sizes() {
    assert_eq!(Tetrimino::template(PieceKind::I).size(), 4);
    assert_eq!(Tetrimino::template(PieceKind::O).size(), 2);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(Tetrimino::template(kind).size(), 3, "{kind:?}");
    }
}

#[test]
fn test_t_rotates_clockwise() {
    let t = Tetrimino::template(PieceKind::T);
    assert_eq!(rows(&t), vec![vec![0, 3, 0], vec![3, 3, 3], vec![0, 0, 0]]);
    assert_eq!(
        rows(&t.rotate_cw()),
        vec![vec![0, 3, 0], vec![0, 3, 3], vec![0, 3, 0]]
    );
    assert_eq!(
        rows(&t.rotate_ccw()),
        vec![vec![0, 3, 0], vec![3, 3, 0], vec![0, 3, 0]]
    );
}

#[test]
fn test_i_turns_vertical() {
    let i = Tetrimino::template(PieceKind::I).rotate_cw();
    let tiles: Vec<_> = i.tiles().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(tiles, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_four_turns_are_identity() {
    for kind in PieceKind::ALL {
        let t = Tetrimino::template(kind);
        let spun = t.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(spun, t, "{kind:?}");
        assert_eq!(t.rotate_cw().rotate_ccw(), t, "{kind:?}");
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = Tetrimino::template(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);
    assert_eq!(o.rotate_ccw(), o);
}

#[test]
fn test_from_rows_builds_custom_matrix() {
    let custom = Tetrimino::from_rows(&[&[1, 1], &[0, 1]]).unwrap();
    assert_eq!(custom.tile_count(), 3);
    assert_eq!(rows(&custom.transpose()), vec![vec![1, 0], vec![1, 1]]);
    assert!(Tetrimino::from_rows(&[&[1, 1], &[1]]).is_none());
}
