use blockfall::core::{CellSnapshot, EngineConfig, GameController, GameSnapshot};
use blockfall::term::{AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, Move, RunState, ShapeKind};

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|c| c.ch).unwrap_or('?')
}

#[test]
fn border_fills_an_exact_viewport() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 22));

    assert_eq!(ch(&fb, 0, 0), '┌');
    assert_eq!(ch(&fb, 21, 0), '┐');
    assert_eq!(ch(&fb, 0, 21), '└');
    assert_eq!(ch(&fb, 21, 21), '┘');
    assert_eq!(ch(&fb, 10, 0), '─');
    assert_eq!(ch(&fb, 0, 10), '│');
    assert_eq!(ch(&fb, 1, 1), '·');
}

#[test]
fn row_zero_is_drawn_at_the_bottom() {
    let mut snap = GameSnapshot::default();
    snap.occupancy[0][0] = true;
    snap.locked.push(CellSnapshot {
        row: 0,
        col: 0,
        color: Color::Red,
    });

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert_eq!(ch(&fb, 1, 20), '█');
    assert_eq!(ch(&fb, 2, 20), '█');
    assert_eq!(ch(&fb, 3, 20), '·');
    assert_eq!(ch(&fb, 1, 1), '·');
}

#[test]
fn spawned_piece_is_hidden_until_it_enters_the_board() {
    let mut game = GameController::new(EngineConfig::default());
    let view = GameView::default();

    let fb = view.render(&GameSnapshot::from(&game.frame()), Viewport::new(22, 22));
    assert!(!fb.row_text(1).contains('█'));

    game.handle(Move::Down);
    game.handle(Move::Down);
    let fb = view.render(&GameSnapshot::from(&game.frame()), Viewport::new(22, 22));
    // The I bar now sits on row 19, columns 4 through 7.
    for x in 9..=16 {
        assert_eq!(ch(&fb, x, 1), '█');
    }
    assert_ne!(ch(&fb, 8, 1), '█');
    assert_ne!(ch(&fb, 17, 1), '█');
}

#[test]
fn side_panel_shows_state_lines_and_next() {
    let snap = GameSnapshot {
        state: RunState::Running,
        next: ShapeKind::T,
        lines: 12,
        ..GameSnapshot::default()
    };
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));

    // Board is centered at x = 19, so the panel starts at 19 + 22 + 2.
    assert_eq!(fb.row_text(0).find("STATE"), Some(43));
    assert!(fb.row_text(1).contains("RUNNING"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(4).contains("12"));
    assert!(fb.row_text(6).contains("NEXT"));
    assert_eq!(ch(&fb, 43, 7), 'T');
    assert!(fb.row_text(9).contains("p play"));
}

#[test]
fn narrow_viewport_skips_the_panel() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(30, 22));
    for y in 0..fb.height() {
        assert!(!fb.row_text(y).contains("STATE"));
    }
}

#[test]
fn paused_and_game_over_overlays() {
    let view = GameView::default();

    let paused = GameSnapshot {
        state: RunState::Paused,
        ..GameSnapshot::default()
    };
    let fb = view.render(&paused, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));

    let over = GameSnapshot {
        state: RunState::GameOver,
        ..GameSnapshot::default()
    };
    let fb = view.render(&over, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER!"));

    let fb = view.render(&GameSnapshot::default(), Viewport::new(22, 22));
    assert!(!fb.row_text(11).contains("PAUSED"));
}

#[test]
fn anchor_controls_vertical_placement() {
    let snap = GameSnapshot::default();

    let centered = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(ch(&centered, 0, 4), '┌');
    assert_eq!(ch(&centered, 0, 0), ' ');

    let top = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 30));
    assert_eq!(ch(&top, 0, 0), '┌');
    assert_eq!(ch(&top, 0, 21), '└');
}

#[test]
fn render_into_reuses_and_resizes_the_buffer() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(5, 5);
    view.render_into(&GameSnapshot::default(), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
}
