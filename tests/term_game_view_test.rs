use blocktris::core::{GameSnapshot, GameState, Ruleset};
use blocktris::term::{piece_color, FrameBuffer, GameView, Viewport};
use blocktris::types::{GameAction, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn started(rules: Ruleset) -> GameState {
    let mut game = GameState::new(rules, 1);
    game.start();
    game
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(Ruleset::modern(), 1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 high.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = PieceKind::I.color_id();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let cell = fb.get(1, 20).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, piece_color(1));
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_single_column_cells() {
    let mut snap = GameSnapshot::default();
    snap.board[0][9] = 5;

    let view = GameView::new(1).with_grid(false);
    let fb = view.render(&snap, Viewport::new(12, 22));
    assert_eq!(fb.get(10, 1).unwrap().ch, '█');
    assert_eq!(fb.get(11, 1).unwrap().ch, '│');
    assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_shadow_below_active_piece() {
    let game = started(Ruleset::modern().with_pieces(&[PieceKind::O]));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // Active O at columns 4..=5, rows 0..=1; shadow on rows 18..=19.
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(fb.get(9, 19).unwrap().ch, '░');
    assert_eq!(fb.get(12, 20).unwrap().ch, '░');
}

#[test]
fn term_view_has_no_shadow_in_classic() {
    let game = started(Ruleset::classic().with_pieces(&[PieceKind::O]));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains('░'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = started(Ruleset::modern()).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text = screen_text(&fb);
    for needle in ["MODERN", "SCORE", "1234", "LEVEL", "LINES", "NEXT"] {
        assert!(text.contains(needle), "missing {needle}");
    }
}

#[test]
fn term_view_hides_next_without_preview() {
    let snap = started(Ruleset::prototype()).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text = screen_text(&fb);
    assert!(text.contains("PROTOTYPE"));
    assert!(!text.contains("NEXT"));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let snap = started(Ruleset::modern()).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays() {
    let mut game = started(Ruleset::modern());
    game.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));

    let mut snap = GameSnapshot::default();
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
}

#[test]
fn render_into_reuses_and_resizes_buffer() {
    let snap = GameSnapshot::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 30)));
}
