//! End-to-end render: game state -> snapshot -> framebuffer -> terminal bytes.

use blocktris::core::{Board, GameState, Ruleset};
use blocktris::term::{encode_diff_into, encode_full_into, GameView, Viewport};
use blocktris::types::{Cell, GameAction, PieceKind};

fn state_with_locked_pieces() -> GameState {
    let bottom: [Cell; 10] = [0, 0, 0, 0, 2, 2, 0, 0, 0, 0];
    let middle: [Cell; 10] = [0, 0, 0, 1, 1, 1, 1, 0, 0, 0];
    let empty: [Cell; 10] = [0; 10];
    let board = Board::from_rows(&[middle, empty, bottom, bottom]);
    let mut game = GameState::with_board(Ruleset::classic(), 12345, board);
    game.start();
    game
}

#[test]
fn locked_pieces_survive_to_the_framebuffer() {
    let game = state_with_locked_pieces();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // O cells at columns 4..=5, rows 18..=19.
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19), (3, 16), (6, 16)] {
        let px = 1 + x * 2;
        let py = 1 + y;
        assert_eq!(fb.get(px, py).unwrap().ch, '█', "cell ({x}, {y})");
    }
    assert_ne!(fb.get(1, 20).unwrap().ch, '█');
}

#[test]
fn full_frame_encodes_visible_text() {
    let mut game = GameState::new(Ruleset::modern().with_pieces(&[PieceKind::T]), 1);
    game.start();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(50, 24));

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("SCORE"));
    assert!(text.contains('█'));
}

#[test]
fn moving_a_piece_produces_a_small_diff() {
    let mut game = GameState::new(Ruleset::modern().with_pieces(&[PieceKind::T]), 1);
    game.start();
    let view = GameView::default();
    let vp = Viewport::new(50, 24);

    let before = view.render(&game.snapshot(), vp);
    assert!(game.apply_action(GameAction::MoveRight));
    let after = view.render(&game.snapshot(), vp);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 2);
}
