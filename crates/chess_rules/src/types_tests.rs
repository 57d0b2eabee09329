use super::*;

#[test]
fn test_algebraic_matches_row_layout() {
    // Row 7 is White's back rank, so (7, 4) is e1
    let e1 = Square::new(7, 4).unwrap();
    assert_eq!(e1.to_algebraic(), "e1");
    assert_eq!(Square::from_algebraic("e1"), Some(e1));

    let a8 = Square::new(0, 0).unwrap();
    assert_eq!(a8.to_string(), "a8");
    assert_eq!(Square::from_algebraic("A8"), Some(a8));
}

#[test]
fn test_from_algebraic_rejects_garbage() {
    assert_eq!(Square::from_algebraic("i1"), None);
    assert_eq!(Square::from_algebraic("a9"), None);
    assert_eq!(Square::from_algebraic("e"), None);
    assert_eq!(Square::from_algebraic("e22"), None);
}

#[test]
fn test_offset_stays_on_board() {
    let h1 = Square::new(7, 7).unwrap();
    assert_eq!(h1.offset(1, 0), None);
    assert_eq!(h1.offset(0, 1), None);
    assert_eq!(h1.offset(-1, -1), Square::new(6, 6));
    assert_eq!(sq(-1, 3), None);
    assert_eq!(sq(3, 8), None);
}

#[test]
fn test_index_round_trip_covers_board() {
    for idx in 0..64 {
        let s = Square::from_index(idx).unwrap();
        assert_eq!(s.index(), idx);
    }
    assert_eq!(Square::from_index(64), None);
}

#[test]
fn test_pawn_direction_per_color() {
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.forward(), 1);
    assert_eq!(Color::White.promotion_row(), 0);
    assert_eq!(Color::Black.promotion_row(), 7);
    assert_eq!(Color::White.other(), Color::Black);
}

#[test]
fn test_symbols() {
    assert_eq!(
        PieceKind::Knight.symbol(Color::White, NotationStyle::Figurine),
        '♘'
    );
    assert_eq!(
        PieceKind::Pawn.symbol(Color::Black, NotationStyle::Figurine),
        '♟'
    );
    assert_eq!(
        PieceKind::Queen.symbol(Color::Black, NotationStyle::Letter),
        'q'
    );
    assert_eq!(PieceKind::from_letter('k'), Some(PieceKind::King));
    assert_eq!(PieceKind::from_letter('x'), None);
}

#[test]
fn test_try_from_coordinates() {
    assert_eq!(Square::try_from((6, 4)), Ok(Square::new(6, 4).unwrap()));
    assert_eq!(
        Square::try_from((8, 0)),
        Err(RulesError::OutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(
        Square::try_from((0, -1)),
        Err(RulesError::OutOfBounds { row: 0, col: -1 })
    );
}
