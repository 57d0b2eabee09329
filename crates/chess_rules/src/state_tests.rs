use super::*;

fn state_of(placement: &str, to_move: Color) -> Result<GameState, RulesError> {
    let mut b = Board::from_placement(placement).unwrap();
    evaluate_state(&mut b, to_move)
}

#[test]
fn test_startpos_is_playing() {
    assert_eq!(
        state_of("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Color::White),
        Ok(GameState::Playing)
    );
}

#[test]
fn test_check_with_escape() {
    assert_eq!(
        state_of("4r1k1/8/8/8/8/8/8/4K3", Color::White),
        Ok(GameState::Check)
    );
}

#[test]
fn test_scholars_mate() {
    assert_eq!(
        state_of("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR", Color::Black),
        Ok(GameState::Checkmate)
    );
}

#[test]
fn test_back_rank_mate() {
    assert_eq!(
        state_of("3R2k1/5ppp/8/8/8/8/8/6K1", Color::Black),
        Ok(GameState::Checkmate)
    );
}

#[test]
fn test_stalemate_positions() {
    assert_eq!(
        state_of("k7/2K5/1Q6/8/8/8/8/8", Color::Black),
        Ok(GameState::Stalemate)
    );
    assert_eq!(
        state_of("6k1/6P1/6K1/8/8/8/8/8", Color::Black),
        Ok(GameState::Stalemate)
    );
}

#[test]
fn test_missing_king_propagates() {
    assert_eq!(
        state_of("8/8/8/8/8/8/8/4K3", Color::Black),
        Err(RulesError::NoKingFound(Color::Black))
    );
}

#[test]
fn test_terminal_states() {
    assert!(GameState::Checkmate.is_terminal());
    assert!(GameState::Stalemate.is_terminal());
    assert!(!GameState::Check.is_terminal());
    assert!(!GameState::Playing.is_terminal());
    assert_eq!(GameState::default(), GameState::Playing);
}
