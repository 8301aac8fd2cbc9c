//! Full-match tests through the play driver.

use minimax_engine::core::{Error, GameState, Player};
use minimax_engine::games::{SubtractSquareMove, SubtractSquareState, TippyMove, TippyState};
use minimax_engine::play::{play_game, MatchConfig, ScriptedMoves, StrategyPlayer};
use minimax_engine::search::{AlphaBeta, MemoizedMinimax, Minimax, MyopicMinimax, RandomStrategy};

// =============================================================================
// Strategy vs Strategy
// =============================================================================

#[test]
fn test_minimax_beats_random_from_winning_totals() {
    for total in [25, 27, 28, 29] {
        for seed in 0..5 {
            let root = SubtractSquareState::new(Player::P1, total);
            let mut p1 = StrategyPlayer::new(Minimax::new());
            let mut p2 = StrategyPlayer::new(RandomStrategy::new(seed));

            let record = play_game(root, &mut p1, &mut p2, &MatchConfig::default()).unwrap();
            assert_eq!(record.winner, Some(Player::P1), "total {total} seed {seed}");
            assert_eq!(record.final_state.current_total(), 0);
        }
    }
}

#[test]
fn test_second_player_wins_from_losing_total() {
    // 5 is lost for the mover: 5-1=4 and 5-4=1 both hand over a square.
    let root = SubtractSquareState::new(Player::P1, 5);
    let mut p1 = StrategyPlayer::new(AlphaBeta::new());
    let mut p2 = StrategyPlayer::new(MemoizedMinimax::<SubtractSquareState>::new());

    let record = play_game(root, &mut p1, &mut p2, &MatchConfig::default()).unwrap();
    assert_eq!(record.winner, Some(Player::P2));
}

#[test]
fn test_moves_replay_to_final_state() {
    let root = TippyState::new(Player::P1, 3).unwrap();
    let mut p1 = StrategyPlayer::new(MyopicMinimax::new(2));
    let mut p2 = StrategyPlayer::new(RandomStrategy::new(11));

    let record = play_game(root.clone(), &mut p1, &mut p2, &MatchConfig::default()).unwrap();

    let mut replayed = root;
    for mv in &record.moves {
        replayed = replayed.apply_move(mv).unwrap();
    }
    assert_eq!(replayed, record.final_state);
    assert!(replayed.is_over());
}

// =============================================================================
// Scripted Games
// =============================================================================

#[test]
fn test_scripted_tippy_draw() {
    // Final board:
    //   X O X
    //   X O X
    //   O X O
    let root = TippyState::new(Player::P1, 3).unwrap();
    let mut p1 = ScriptedMoves::new([
        TippyMove::new(0, 0),
        TippyMove::new(2, 0),
        TippyMove::new(0, 1),
        TippyMove::new(2, 1),
        TippyMove::new(1, 2),
    ]);
    let mut p2 = ScriptedMoves::new([
        TippyMove::new(1, 0),
        TippyMove::new(1, 1),
        TippyMove::new(0, 2),
        TippyMove::new(2, 2),
    ]);

    let record = play_game(root, &mut p1, &mut p2, &MatchConfig::default()).unwrap();

    assert!(record.is_draw());
    assert_eq!(record.moves.len(), 9);
    assert_eq!(p1.remaining(), 0);
    assert_eq!(p2.remaining(), 0);
}

#[test]
fn test_illegal_attempts_counted_per_player() {
    // p2 first asks for more than the total, then plays legally.
    let root = SubtractSquareState::new(Player::P1, 3);
    let mut p1 = ScriptedMoves::new([SubtractSquareMove(1), SubtractSquareMove(1)]);
    let mut p2 = ScriptedMoves::new([SubtractSquareMove(4), SubtractSquareMove(1)]);

    let record = play_game(root, &mut p1, &mut p2, &MatchConfig::default()).unwrap();

    assert_eq!(record.winner, Some(Player::P1));
    assert_eq!(record.illegal_moves[Player::P1], 0);
    assert_eq!(record.illegal_moves[Player::P2], 1);
}

#[test]
fn test_no_retries_allowed() {
    let root = SubtractSquareState::new(Player::P1, 3);
    let mut p1 = ScriptedMoves::new([SubtractSquareMove(2), SubtractSquareMove(1)]);
    let mut p2 = ScriptedMoves::new(Vec::<SubtractSquareMove>::new());
    let config = MatchConfig::default().with_max_illegal_attempts(0);

    let err = play_game(root, &mut p1, &mut p2, &config).unwrap_err();
    assert_eq!(
        err,
        Error::IllegalMove {
            mv: "2".to_string()
        }
    );
}
