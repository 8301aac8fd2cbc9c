//! Strategy integration tests on known positions.

use minimax_engine::core::{Error, GameState, Player};
use minimax_engine::games::{SubtractSquareMove, SubtractSquareState, TippyMove, TippyState};
use minimax_engine::search::{
    AlphaBeta, MemoizedMinimax, Minimax, MyopicMinimax, RandomStrategy, SearchConfig, Strategy,
    TranspositionTable,
};

const X: Option<Player> = Some(Player::P1);
const O: Option<Player> = Some(Player::P2);
const E: Option<Player> = None;

/// One instance of every exhaustive strategy.
fn exhaustive<S: GameState + 'static>() -> Vec<Box<dyn Strategy<S>>> {
    let mut strategies: Vec<Box<dyn Strategy<S>>> = Vec::new();
    strategies.push(Box::new(Minimax::new()));
    strategies.push(Box::new(AlphaBeta::new()));
    strategies.push(Box::new(MemoizedMinimax::<S>::new()));
    strategies
}

fn near_complete_tippy() -> TippyState {
    TippyState::from_rows(Player::P1, &[vec![X, X, E], vec![O, X, E], vec![O, O, E]])
        .unwrap()
}

// =============================================================================
// Subtract Square
// =============================================================================

#[test]
fn test_known_subtract_square_answers() {
    let cases = [(25, 25), (27, 25), (28, 16), (29, 9)];

    for player in Player::ALL {
        for (total, expected) in cases {
            let state = SubtractSquareState::new(player, total);
            for mut strategy in exhaustive::<SubtractSquareState>() {
                let result = strategy.search(&state).unwrap();
                assert_eq!(
                    result.best_move,
                    SubtractSquareMove(expected),
                    "{} at {total} for {player}",
                    strategy.name()
                );
                assert_eq!(result.score, 1.0);
                assert!(result.complete);
            }
        }
    }
}

#[test]
fn test_suggested_move_is_legal_and_wins() {
    let state = SubtractSquareState::new(Player::P2, 27);
    let mv = Minimax::new().suggest_move(&state).unwrap();

    assert!(state.possible_next_moves().contains(&mv));
    let next = state.apply_move(&mv).unwrap();
    assert_eq!(next.current_total(), 2);
}

#[test]
fn test_game_over_rejected_by_every_strategy() {
    let state = SubtractSquareState::new(Player::P1, 0);

    for mut strategy in exhaustive::<SubtractSquareState>() {
        assert_eq!(strategy.suggest_move(&state), Err(Error::GameOver));
    }
    assert_eq!(
        MyopicMinimax::new(2).suggest_move(&state),
        Err(Error::GameOver)
    );
    assert_eq!(RandomStrategy::new(1).suggest_move(&state), Err(Error::GameOver));
}

// =============================================================================
// Tippy
// =============================================================================

#[test]
fn test_near_complete_tippy_board() {
    let state = near_complete_tippy();
    let expected = TippyMove::new(2, 1);

    for mut strategy in exhaustive::<TippyState>() {
        let result = strategy.search(&state).unwrap();
        assert_eq!(result.best_move, expected, "{}", strategy.name());
        assert_eq!(result.score, 1.0);
    }

    let winning = state.apply_move(&expected).unwrap();
    assert!(winning.is_over());
    assert!(winning.winner(Player::P1));
}

#[test]
fn test_search_does_not_mutate_state() {
    let state = near_complete_tippy();
    let before = state.to_string();

    AlphaBeta::new().search(&state).unwrap();
    MemoizedMinimax::new().search(&state).unwrap();

    assert_eq!(state.to_string(), before);
    assert_eq!(state.possible_next_moves().len(), 3);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let state = near_complete_tippy();
    let err = state.apply_move(&TippyMove::new(0, 0)).unwrap_err();

    assert!(matches!(err, Error::IllegalMove { .. }));
    assert_eq!(state.cell(0, 0), X);
    assert_eq!(state.next_player(), Some(Player::P1));
}

// =============================================================================
// Determinism and Sharing
// =============================================================================

#[test]
fn test_repeated_searches_agree() {
    let state = TippyState::new(Player::P2, 3)
        .and_then(|s| s.apply_move(&TippyMove::new(1, 1)))
        .unwrap();

    let first = Minimax::new().search(&state).unwrap();
    let second = Minimax::new().search(&state).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shared_table_across_strategies() {
    let table = TranspositionTable::<u32>::new();
    let state = SubtractSquareState::new(Player::P1, 29);

    let mut first = MemoizedMinimax::with_table(table.clone());
    first.search(&state).unwrap();
    let stored = table.len();

    let mut second = MemoizedMinimax::with_table(table.clone());
    let result = second.search(&state).unwrap();

    assert_eq!(result.best_move, SubtractSquareMove(9));
    assert_eq!(table.len(), stored);
    assert_eq!(second.stats().cache_misses, 0);
}

#[test]
fn test_node_budget_still_returns_legal_move() {
    let state = TippyState::new(Player::P1, 4).unwrap();
    let config = SearchConfig::default().with_node_limit(1_000);
    let mut search = AlphaBeta::with_config(config).unwrap();

    let result = search.search(&state).unwrap();
    assert!(!result.complete);
    assert!(state.possible_next_moves().contains(&result.best_move));
}

#[test]
fn test_zero_node_limit_rejected() {
    let config = SearchConfig::default().with_node_limit(0);
    assert!(matches!(
        Minimax::with_config(config),
        Err(Error::InvalidConfiguration { .. })
    ));
}
