//! The match driver.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Error, GameState, Player, PlayerMap, Result};

use super::source::MoveSource;

/// Default number of illegal moves tolerated per turn.
pub const DEFAULT_MAX_ILLEGAL_ATTEMPTS: u32 = 3;

/// Match rules that sit outside the game itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Illegal moves a source may make on one turn before the match is
    /// abandoned with its `IllegalMove` error. 0 means the first one ends it.
    pub max_illegal_attempts: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_illegal_attempts: DEFAULT_MAX_ILLEGAL_ATTEMPTS,
        }
    }
}

impl MatchConfig {
    pub fn with_max_illegal_attempts(mut self, attempts: u32) -> Self {
        self.max_illegal_attempts = attempts;
        self
    }
}

/// Everything that happened in a finished match.
#[derive(Clone, Debug)]
pub struct MatchRecord<S: GameState> {
    /// Accepted moves, in play order.
    pub moves: Vec<S::Move>,

    /// Position after the last move.
    pub final_state: S,

    /// `None` for a draw.
    pub winner: Option<Player>,

    /// Rejected moves per player.
    pub illegal_moves: PlayerMap<u32>,
}

impl<S: GameState> MatchRecord<S> {
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Play `root` to the end, asking `p1` and `p2` for moves in turn.
///
/// Illegal moves are logged and the same source is asked again, up to
/// `config.max_illegal_attempts` times per turn. Any other error from a
/// source aborts the match.
pub fn play_game<S, A, B>(
    root: S,
    p1: &mut A,
    p2: &mut B,
    config: &MatchConfig,
) -> Result<MatchRecord<S>>
where
    S: GameState,
    A: MoveSource<S>,
    B: MoveSource<S>,
{
    let mut state = root;
    let mut moves = Vec::new();
    let mut illegal_moves = PlayerMap::with_value(0u32);

    while let Some(player) = state.next_player() {
        let source: &mut dyn MoveSource<S> = match player {
            Player::P1 => &mut *p1,
            Player::P2 => &mut *p2,
        };

        let mut attempts = 0;
        state = loop {
            let mv = source.choose_move(&state)?;
            match state.apply_move(&mv) {
                Ok(next) => {
                    debug!(%player, %mv, ply = moves.len() + 1, "move played");
                    moves.push(mv);
                    break next;
                }
                Err(err @ Error::IllegalMove { .. }) => {
                    illegal_moves[player] += 1;
                    attempts += 1;
                    warn!(%player, %mv, attempts, "illegal move rejected");
                    if attempts > config.max_illegal_attempts {
                        return Err(err);
                    }
                }
                Err(err) => return Err(err),
            }
        };
    }

    let winner = Player::ALL.into_iter().find(|&p| state.winner(p));
    match winner {
        Some(player) => info!(%player, plies = moves.len(), "match won"),
        None => info!(plies = moves.len(), "match drawn"),
    }

    Ok(MatchRecord {
        moves,
        final_state: state,
        winner,
        illegal_moves,
    })
}
