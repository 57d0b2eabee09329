use super::*;
use crate::types::PieceKind;

fn s(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_opening_pawn_has_two_moves() {
    let mut b = Board::startpos();
    assert_eq!(legal_moves(&mut b, s(6, 4)), Ok(vec![s(5, 4), s(4, 4)]));
}

#[test]
fn test_startpos_has_twenty_moves() {
    let mut b = Board::startpos();
    let total: usize = all_legal_moves(&mut b, Color::White)
        .unwrap()
        .iter()
        .map(|(_, targets)| targets.len())
        .sum();
    assert_eq!(total, 20);
}

#[test]
fn test_empty_square_has_no_moves() {
    let mut b = Board::startpos();
    assert_eq!(legal_moves(&mut b, s(4, 4)), Ok(vec![]));
}

#[test]
fn test_pinned_rook_stays_on_file() {
    // White rook e2 pinned by black rook e8 against king e1
    let mut b = Board::from_placement("4r1k1/8/8/8/8/8/4R3/4K3").unwrap();
    let moves = legal_moves(&mut b, s(6, 4)).unwrap();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.col == 4));
    assert!(moves.contains(&s(0, 4)), "capturing the pinner is legal");
}

#[test]
fn test_king_cannot_step_into_attack() {
    // Black rook on d8 covers the d-file
    let mut b = Board::from_placement("3r2k1/8/8/8/8/8/8/4K3").unwrap();
    let moves = legal_moves(&mut b, s(7, 4)).unwrap();
    assert!(!moves.contains(&s(7, 3)));
    assert!(!moves.contains(&s(6, 3)));
    assert!(moves.contains(&s(6, 4)));
    assert!(moves.contains(&s(7, 5)));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // Black queen e2 defended by black rook e8; the king may not take it
    let mut b = Board::from_placement("4r1k1/8/8/8/8/8/4q3/4K3").unwrap();
    let moves = legal_moves(&mut b, s(7, 4)).unwrap();
    assert!(!moves.contains(&s(6, 4)));
    assert!(moves.is_empty());
}

#[test]
fn test_check_must_be_answered() {
    // White in check from the rook on e8; only blocks, captures and king
    // moves off the file survive
    let mut b = Board::from_placement("4r1k1/8/8/8/8/8/N7/4K3").unwrap();
    let knight = legal_moves(&mut b, s(6, 0)).unwrap();
    assert_eq!(knight, vec![]);

    let mut b = Board::from_placement("4r1k1/8/8/8/8/2N5/8/4K3").unwrap();
    let knight = legal_moves(&mut b, s(5, 2)).unwrap();
    assert_eq!(knight, vec![s(4, 4), s(6, 4)], "only the blocks on e4 and e2");
}

#[test]
fn test_filtering_leaves_board_untouched() {
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "4r1k1/8/8/8/8/8/4R3/4K3",
        "4r1k1/8/8/8/8/8/4q3/4K3",
    ];
    for placement in positions {
        let mut b = Board::from_placement(placement).unwrap();
        let squares: Vec<Square> = b.pieces().map(|pc| pc.square).collect();
        for from in squares {
            let before = b.clone();
            legal_moves(&mut b, from).unwrap();
            assert_eq!(b, before, "{placement}: {from} changed the board");
        }
    }
}

#[test]
fn test_has_moved_flag_survives_simulation() {
    let mut b = Board::startpos();
    b.piece_mut(s(7, 6)).unwrap().has_moved = true;
    let before = b.clone();
    legal_moves(&mut b, s(7, 6)).unwrap();
    legal_moves(&mut b, s(6, 4)).unwrap();
    assert_eq!(b, before);
    assert!(b.piece_at(s(7, 6)).unwrap().has_moved);
    assert!(!b.piece_at(s(6, 4)).unwrap().has_moved);
}

#[test]
fn test_error_mid_filter_restores_board() {
    // No white king: the first candidate fails the check test and the
    // guard must still undo it
    let mut b = Board::from_placement("4k3/8/8/8/8/8/4P3/8").unwrap();
    let before = b.clone();
    assert_eq!(
        legal_moves(&mut b, s(6, 4)),
        Err(RulesError::NoKingFound(Color::White))
    );
    assert_eq!(b, before);
}

#[test]
fn test_committed_move_stays() {
    let mut b = Board::startpos();
    let pawn = b.piece_at(s(6, 4)).unwrap();
    let captured = AppliedMove::apply(&mut b, pawn, s(4, 4)).commit();
    assert_eq!(captured, None);
    assert!(b.piece_at(s(6, 4)).is_none());
    let moved = b.piece_at(s(4, 4)).unwrap();
    assert_eq!(moved.kind, PieceKind::Pawn);
    assert_eq!(moved.square, s(4, 4));
}

#[test]
fn test_stalemated_side_has_no_moves() {
    let mut b = Board::from_placement("k7/2K5/1Q6/8/8/8/8/8").unwrap();
    assert_eq!(has_any_legal_move(&mut b, Color::Black), Ok(false));
    assert_eq!(has_any_legal_move(&mut b, Color::White), Ok(true));
    assert_eq!(all_legal_moves(&mut b, Color::Black), Ok(vec![]));
}
