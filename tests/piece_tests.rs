//! Piece tests - spawn layouts, trials and rotation

use blockfall::core::{Cell, EngineConfig, Piece};
use blockfall::types::{Move, Rotation, ShapeKind, SPAWN_COLUMN, SPAWN_ROW};

const S: i32 = 20;

fn spawn(kind: ShapeKind) -> Piece {
    let config = EngineConfig::default();
    Piece::spawn(kind, config.spawn_origin(), config.cell_size)
}

fn positions(cells: &[Cell]) -> Vec<(i32, i32)> {
    let mut v: Vec<_> = cells.iter().map(Cell::grid_position).collect();
    v.sort_unstable();
    v
}

#[test]
fn test_spawn_layouts_at_canonical_anchor() {
    let expected = [
        (ShapeKind::I, vec![(21, 4), (21, 5), (21, 6), (21, 7)]),
        (ShapeKind::J, vec![(20, 4), (20, 5), (20, 6), (21, 4)]),
        (ShapeKind::L, vec![(20, 2), (20, 3), (20, 4), (21, 4)]),
        (ShapeKind::S, vec![(20, 3), (20, 4), (21, 4), (21, 5)]),
        (ShapeKind::Z, vec![(20, 5), (20, 6), (21, 4), (21, 5)]),
        (ShapeKind::O, vec![(20, 4), (20, 5), (21, 4), (21, 5)]),
        (ShapeKind::T, vec![(20, 3), (20, 4), (20, 5), (21, 4)]),
    ];
    for (kind, cells) in expected {
        let piece = spawn(kind);
        assert_eq!(positions(piece.cells()), cells, "{kind:?}");
        assert_eq!(piece.rotation(), Rotation::North);
        assert!(piece.cells().iter().all(|c| c.color() == kind.color()));
    }
}

#[test]
fn test_spawn_at_matches_spawn_origin() {
    for kind in ShapeKind::ALL {
        assert_eq!(
            Piece::spawn_at(kind, SPAWN_ROW, SPAWN_COLUMN, S),
            spawn(kind)
        );
    }
}

#[test]
fn test_trial_does_not_mutate_piece() {
    let piece = spawn(ShapeKind::T);
    let before = *piece.cells();
    for movement in [Move::Left, Move::Right, Move::Down, Move::Rotate] {
        let _ = piece.trial(movement);
        assert_eq!(*piece.cells(), before);
        assert_eq!(piece.rotation(), Rotation::North);
    }
}

#[test]
fn test_commit_applies_trial() {
    let mut piece = spawn(ShapeKind::L);
    let trial = piece.trial(Move::Down);
    piece.commit(trial);
    assert_eq!(piece.cells(), trial.cells());
    assert_eq!(
        positions(piece.cells()),
        vec![(19, 2), (19, 3), (19, 4), (20, 4)]
    );
}

#[test]
fn test_rotation_trial_advances_state() {
    let piece = spawn(ShapeKind::S);
    let trial = piece.trial(Move::Rotate);
    assert_eq!(trial.rotation(), Rotation::East);
    assert_eq!(trial.movement(), Move::Rotate);
    assert_eq!(piece.trial(Move::Left).rotation(), Rotation::North);
}

#[test]
fn test_four_rotations_return_original_cells() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::spawn_at(kind, 10, 4, S);
        let original = positions(piece.cells());
        for _ in 0..4 {
            piece.commit(piece.trial(Move::Rotate));
        }
        assert_eq!(positions(piece.cells()), original, "{kind:?}");
        assert_eq!(piece.rotation(), Rotation::North);
    }
}

#[test]
fn test_o_rotation_never_changes_cells() {
    let mut piece = Piece::spawn_at(ShapeKind::O, 8, 2, S);
    let original = positions(piece.cells());
    for turn in 1..=9 {
        piece.commit(piece.trial(Move::Rotate));
        assert_eq!(positions(piece.cells()), original);
        assert_eq!(piece.rotation(), Rotation::from_index(turn));
    }
}

#[test]
fn test_non_o_rotation_changes_cells() {
    for kind in ShapeKind::ALL.into_iter().filter(|k| *k != ShapeKind::O) {
        let piece = Piece::spawn_at(kind, 10, 4, S);
        let turned = piece.trial(Move::Rotate);
        assert_ne!(positions(turned.cells()), positions(piece.cells()), "{kind:?}");
    }
}

#[test]
fn test_j_rotates_about_its_pivot() {
    let piece = Piece::spawn_at(ShapeKind::J, 21, 4, S);
    let turned = piece.trial(Move::Rotate);
    assert_eq!(
        positions(turned.cells()),
        vec![(19, 5), (20, 5), (21, 5), (21, 6)]
    );
}

#[test]
fn test_pivot_follows_translation() {
    let mut piece = spawn(ShapeKind::Z);
    let before = piece.pivot();
    piece.commit(piece.trial(Move::Right));
    piece.commit(piece.trial(Move::Down));
    let after = piece.pivot();
    assert_eq!(after.x - before.x, f64::from(S));
    assert_eq!(after.y - before.y, -f64::from(S));

    piece.commit(piece.trial(Move::Rotate));
    assert_eq!(piece.pivot(), after);
}

#[test]
fn test_bounds_follow_rotation_state() {
    let mut piece = Piece::spawn_at(ShapeKind::J, 10, 4, S);
    let b = piece.bounds();
    assert_eq!(((b.max_x - b.min_x) / S, (b.max_y - b.min_y) / S), (3, 2));

    piece.commit(piece.trial(Move::Rotate));
    let b = piece.bounds();
    assert_eq!(((b.max_x - b.min_x) / S, (b.max_y - b.min_y) / S), (2, 3));
    for cell in piece.cells() {
        let c = cell.bounds();
        assert!(c.min_x >= b.min_x && c.max_x <= b.max_x);
        assert!(c.min_y >= b.min_y && c.max_y <= b.max_y);
    }
}

#[test]
fn test_overlaps() {
    let piece = spawn(ShapeKind::O);
    let other = Piece::spawn_at(ShapeKind::I, 21, 5, S);
    let far = Piece::spawn_at(ShapeKind::I, 5, 0, S);
    assert!(piece.overlaps(other.cells()));
    assert!(!piece.overlaps(far.cells()));
}
