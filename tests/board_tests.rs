//! Board tests - construction, cell access, and row clearing

use tetris_view::core::Board;
use tetris_view::types::PieceKind;

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 25);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 25);
    assert_eq!(board.cells().len(), 250);

    for y in 0..25 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
#[should_panic]
fn test_board_new_rejects_zero_width() {
    let _ = Board::new(0, 5);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(5, 10);
    assert_eq!(board.get(5, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert_eq!(board.get(u32::MAX, u32::MAX), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(5, 10);

    assert!(board.set(3, 7, Some(PieceKind::T)));
    assert_eq!(board.get(3, 7), Some(Some(PieceKind::T)));

    assert!(board.set(0, 0, Some(PieceKind::I)));
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));

    assert!(board.set(3, 7, None));
    assert_eq!(board.get(3, 7), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(5, 10);
    assert!(!board.set(5, 0, Some(PieceKind::T)));
    assert!(!board.set(0, 10, Some(PieceKind::T)));
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new(4, 2);

    for x in 0..4 {
        board.set(x, 1, Some(PieceKind::J));
    }
    assert!(board.is_row_full(1));
    assert!(!board.is_row_full(0));

    // Any gap breaks fullness.
    board.set(2, 1, None);
    assert!(!board.is_row_full(1));

    // Out of range is never full.
    assert!(!board.is_row_full(2));
}

// Shift scenario: bottom row full, two single cells above it. Clearing must
// drop both survivors by one row.
#[test]
fn test_clear_shifts_rows_down() {
    let mut board = Board::new(3, 3);
    board.set(0, 0, Some(PieceKind::T));
    board.set(0, 1, Some(PieceKind::J));
    board.set(0, 2, Some(PieceKind::I));
    board.set(1, 2, Some(PieceKind::J));
    board.set(2, 2, Some(PieceKind::L));

    assert_eq!(board.tick(), 1);

    assert_eq!(board.get(0, 0), Some(None));
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 2), Some(None));
}

#[test]
fn test_clear_middle_row() {
    let mut board = Board::new(3, 3);
    board.set(0, 0, Some(PieceKind::T));
    board.set(0, 1, Some(PieceKind::I));
    board.set(1, 1, Some(PieceKind::J));
    board.set(2, 1, Some(PieceKind::L));
    board.set(0, 2, Some(PieceKind::J));

    assert_eq!(board.tick(), 1);

    // Row above the cleared one dropped; the bottom row stayed put.
    assert_eq!(board.get(0, 0), Some(None));
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 2), Some(None));
}

#[test]
fn test_tick_clears_multiple_rows_at_once() {
    let mut board = Board::new(4, 5);
    for y in [2, 4] {
        for x in 0..4 {
            board.set(x, y, Some(PieceKind::S));
        }
    }
    board.set(1, 3, Some(PieceKind::Z));

    assert_eq!(board.tick(), 2);
    // The lone survivor ends up on the bottom row.
    assert_eq!(board.get(1, 4), Some(Some(PieceKind::Z)));
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_tick_without_full_rows_is_a_no_op() {
    let mut board = Board::new(3, 3);
    board.set(1, 2, Some(PieceKind::O));
    let before = board.clone();

    assert_eq!(board.tick(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_revision_tracks_mutation() {
    let mut board = Board::new(4, 4);
    let r0 = board.revision();

    board.set(0, 0, Some(PieceKind::I));
    let r1 = board.revision();
    assert!(r1 > r0);

    // Ticking with nothing to clear leaves the revision alone.
    board.tick();
    assert_eq!(board.revision(), r1);

    for x in 0..4 {
        board.set(x, 3, Some(PieceKind::L));
    }
    let r2 = board.revision();
    board.tick();
    assert!(board.revision() > r2);
}

#[test]
fn test_snapshot_is_an_owned_copy() {
    let mut board = Board::new(4, 4);
    board.set(2, 2, Some(PieceKind::Z));

    let snap = board.snapshot();
    assert_eq!(snap.get(2, 2), Some(Some(PieceKind::Z)));

    // Later mutation must not bleed into the snapshot.
    board.set(2, 2, None);
    board.set(0, 0, Some(PieceKind::I));
    assert_eq!(snap.get(2, 2), Some(Some(PieceKind::Z)));
    assert_eq!(snap.get(0, 0), Some(None));

    // The new revision is observable on a fresh snapshot.
    assert!(board.snapshot().revision() > snap.revision());
}

#[test]
fn test_snapshot_length_invariant() {
    for (w, h) in [(1, 1), (3, 7), (10, 25)] {
        let board = Board::new(w, h);
        let snap = board.snapshot();
        assert_eq!(snap.cells().len(), (w * h) as usize);
        assert!(snap.is_empty());
    }
}

#[test]
fn test_board_clear() {
    let mut board = Board::new(3, 3);
    board.set(1, 1, Some(PieceKind::T));
    let rev = board.revision();

    board.clear();
    assert!(board.snapshot().is_empty());
    assert!(board.revision() > rev);

    // Clearing an already-empty board changes nothing.
    let rev = board.revision();
    board.clear();
    assert_eq!(board.revision(), rev);
}
