//! Tippy state and move.
//!
//! The board is an `im::Vector`, so applying a move shares every untouched
//! chunk with the parent state instead of deep-copying the grid.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::shapes::{Coord, TippyTable};
use crate::core::{Error, GameState, Player, PlayerMap, Result, Score, DRAW, LOSE, WIN};

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 3;

/// Place a mark at column `x`, row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TippyMove {
    pub x: usize,
    pub y: usize,
}

impl TippyMove {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    fn coord(self) -> Coord {
        (self.x, self.y)
    }
}

impl std::fmt::Display for TippyMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Tippy position.
#[derive(Clone, Debug)]
pub struct TippyState {
    to_move: Player,
    /// Cell owners, row-major.
    board: Vector<Option<Player>>,
    shapes: Arc<TippyTable>,
    winner: Option<Player>,
    filled: usize,
}

impl TippyState {
    /// Empty `size x size` board with `to_move` to play first.
    ///
    /// Returns `Error::InvalidConfiguration` if `size` is below 3.
    pub fn new(to_move: Player, size: usize) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self {
            to_move,
            board: std::iter::repeat(None).take(size * size).collect(),
            shapes: Arc::new(TippyTable::new(size)),
            winner: None,
            filled: 0,
        })
    }

    /// Position from explicit rows (`rows[y][x]`).
    ///
    /// The board must be square, at least 3 wide, and not show a
    /// completed tippy for both players.
    pub fn from_rows(to_move: Player, rows: &[Vec<Option<Player>>]) -> Result<Self> {
        let size = rows.len();
        Self::check_size(size)?;
        if let Some(bad) = rows.iter().position(|row| row.len() != size) {
            return Err(Error::invalid_configuration(format!(
                "row {bad} has {} cells, expected {size}",
                rows[bad].len()
            )));
        }

        let board: Vector<Option<Player>> = rows.iter().flatten().copied().collect();
        let shapes = Arc::new(TippyTable::new(size));
        let won = PlayerMap::new(|player| {
            shapes
                .shapes()
                .iter()
                .any(|shape| shape.iter().all(|&(x, y)| board[y * size + x] == Some(player)))
        });
        let winner = match (won[Player::P1], won[Player::P2]) {
            (true, true) => {
                return Err(Error::invalid_configuration(
                    "both players have completed a tippy",
                ))
            }
            (true, false) => Some(Player::P1),
            (false, true) => Some(Player::P2),
            (false, false) => None,
        };
        let filled = board.iter().filter(|cell| cell.is_some()).count();

        Ok(Self {
            to_move,
            board,
            shapes,
            winner,
            filled,
        })
    }

    fn check_size(size: usize) -> Result<()> {
        if size < MIN_BOARD_SIZE {
            return Err(Error::invalid_configuration(format!(
                "board size {size} is below {MIN_BOARD_SIZE}"
            )));
        }
        Ok(())
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.shapes.size()
    }

    /// Owner of `(x, y)`, or `None` if empty or off the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Player> {
        let size = self.size();
        if x >= size || y >= size {
            return None;
        }
        self.board[y * size + x]
    }

    /// The shared winning-shape table.
    #[must_use]
    pub fn shapes(&self) -> &Arc<TippyTable> {
        &self.shapes
    }

    fn owner(&self, (x, y): Coord) -> Option<Player> {
        self.board[y * self.size() + x]
    }
}

impl GameState for TippyState {
    type Move = TippyMove;
    type Key = Vector<Option<Player>>;

    fn player_to_move(&self) -> Player {
        self.to_move
    }

    fn possible_next_moves(&self) -> Vec<TippyMove> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let size = self.size();
        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| TippyMove::new(idx % size, idx / size))
            .collect()
    }

    fn apply_move(&self, mv: &TippyMove) -> Result<Self> {
        let size = self.size();
        if self.winner.is_some() || mv.x >= size || mv.y >= size {
            return Err(Error::illegal_move(mv));
        }
        let idx = mv.y * size + mv.x;
        if self.board[idx].is_some() {
            return Err(Error::illegal_move(mv));
        }

        let mover = self.to_move;
        let board = self.board.update(idx, Some(mover));
        let completed = self
            .shapes
            .through(mv.coord())
            .any(|shape| shape.iter().all(|&(x, y)| board[y * size + x] == Some(mover)));

        Ok(Self {
            to_move: mover.opponent(),
            board,
            shapes: Arc::clone(&self.shapes),
            winner: completed.then_some(mover),
            filled: self.filled + 1,
        })
    }

    fn winner(&self, player: Player) -> bool {
        self.winner == Some(player)
    }

    /// Compare shapes still open only to the mover against those open only
    /// to the opponent.
    fn rough_outcome(&self) -> Score {
        let me = self.to_move;
        let mut open: PlayerMap<usize> = PlayerMap::with_value(0);

        for shape in self.shapes.shapes() {
            let mut marks: PlayerMap<bool> = PlayerMap::with_value(false);
            for &cell in shape {
                if let Some(owner) = self.owner(cell) {
                    marks[owner] = true;
                }
            }
            match (marks[me], marks[me.opponent()]) {
                (true, false) => open[me] += 1,
                (false, true) => open[me.opponent()] += 1,
                _ => {}
            }
        }

        match open[me].cmp(&open[me.opponent()]) {
            std::cmp::Ordering::Greater => WIN,
            std::cmp::Ordering::Less => LOSE,
            std::cmp::Ordering::Equal => DRAW,
        }
    }

    fn transposition_key(&self) -> Self::Key {
        self.board.clone()
    }

    fn is_over(&self) -> bool {
        self.winner.is_some() || self.filled == self.board.len()
    }
}

impl PartialEq for TippyState {
    fn eq(&self, other: &Self) -> bool {
        self.to_move == other.to_move && self.board == other.board
    }
}

impl Eq for TippyState {}

impl std::fmt::Display for TippyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let rule = format!("\t-{}", "----".repeat(size));

        write!(f, "\n\t")?;
        for x in 0..size {
            write!(f, "  {x} ")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        for y in 0..size {
            write!(f, "    {y}\t")?;
            for x in 0..size {
                let piece = match self.cell(x, y) {
                    None => "   ",
                    Some(Player::P1) => " X ",
                    Some(Player::P2) => " O ",
                };
                write!(f, "|{piece}")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    const X: Option<Player> = Some(Player::P1);
    const O: Option<Player> = Some(Player::P2);
    const E: Option<Player> = None;

    #[test]
    fn test_new_board() {
        let state = TippyState::new(Player::P1, 3).unwrap();

        assert_eq!(state.size(), 3);
        assert_eq!(state.next_player(), Some(Player::P1));
        let moves = state.possible_next_moves();
        assert_eq!(moves.len(), 9);
        assert_eq!(&moves[..4], &[
            TippyMove::new(0, 0),
            TippyMove::new(1, 0),
            TippyMove::new(2, 0),
            TippyMove::new(0, 1),
        ]);
    }

    #[test]
    fn test_board_size_validated() {
        assert!(matches!(
            TippyState::new(Player::P1, 2),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            TippyState::from_rows(Player::P1, &[vec![E, E, E], vec![E, E], vec![E, E, E]]),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_apply_move_is_pure() {
        let state = TippyState::new(Player::P1, 3).unwrap();
        let next = state.apply_move(&TippyMove::new(1, 1)).unwrap();

        assert_eq!(state.cell(1, 1), None);
        assert_eq!(next.cell(1, 1), Some(Player::P1));
        assert_eq!(next.player_to_move(), Player::P2);
        assert_eq!(next.possible_next_moves().len(), 8);
        assert!(Arc::ptr_eq(state.shapes(), next.shapes()));
    }

    #[test]
    fn test_illegal_moves() {
        let state = TippyState::new(Player::P1, 3)
            .unwrap()
            .apply_move(&TippyMove::new(0, 0))
            .unwrap();

        let occupied = state.apply_move(&TippyMove::new(0, 0));
        assert!(matches!(occupied, Err(Error::IllegalMove { .. })));
        let off_board = state.apply_move(&TippyMove::new(3, 0));
        assert!(matches!(off_board, Err(Error::IllegalMove { .. })));
        assert_eq!(state.cell(0, 0), Some(Player::P1));
        assert_eq!(state.player_to_move(), Player::P2);
    }

    #[test]
    fn test_completing_a_tippy_ends_the_game() {
        let state = TippyState::from_rows(Player::P1, &[
            vec![X, X, E],
            vec![O, X, E],
            vec![O, O, E],
        ])
        .unwrap();
        assert!(!state.is_over());

        let won = state.apply_move(&TippyMove::new(2, 1)).unwrap();
        assert!(won.is_over());
        assert!(won.possible_next_moves().is_empty());
        assert!(won.winner(Player::P1));
        assert!(!won.winner(Player::P2));
        assert_eq!(won.outcome().unwrap(), Outcome::Lose);
        assert!(matches!(
            won.apply_move(&TippyMove::new(2, 2)),
            Err(Error::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_full_board_draw() {
        let state = TippyState::from_rows(Player::P2, &[
            vec![X, O, X],
            vec![X, O, X],
            vec![O, X, O],
        ])
        .unwrap();

        assert!(state.is_over());
        assert_eq!(state.next_player(), None);
        assert_eq!(state.outcome().unwrap(), Outcome::Draw);
    }

    #[test]
    fn test_from_rows_detects_winner() {
        let state = TippyState::from_rows(Player::P2, &[
            vec![X, X, E],
            vec![O, X, X],
            vec![O, O, E],
        ])
        .unwrap();

        assert!(state.winner(Player::P1));
        assert_eq!(state.outcome().unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_rough_outcome() {
        let empty = TippyState::new(Player::P1, 3).unwrap();
        assert_eq!(empty.rough_outcome(), DRAW);

        let state = TippyState::from_rows(Player::P2, &[
            vec![X, X, E],
            vec![O, X, X],
            vec![O, O, E],
        ])
        .unwrap();
        assert_eq!(state.rough_outcome(), LOSE);
    }

    #[test]
    fn test_transposition_key_ignores_move_order() {
        let root = TippyState::new(Player::P1, 3).unwrap();
        let a = root
            .apply_move(&TippyMove::new(0, 0))
            .and_then(|s| s.apply_move(&TippyMove::new(1, 1)))
            .and_then(|s| s.apply_move(&TippyMove::new(2, 2)))
            .unwrap();
        let b = root
            .apply_move(&TippyMove::new(2, 2))
            .and_then(|s| s.apply_move(&TippyMove::new(1, 1)))
            .and_then(|s| s.apply_move(&TippyMove::new(0, 0)))
            .unwrap();

        assert_eq!(a.transposition_key(), b.transposition_key());
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let state = TippyState::new(Player::P1, 3).unwrap();
        let expected = "\n\t  0   1   2 \n\t-------------\n    0\t|   |   |   \
                        |\n\t-------------\n    1\t|   |   |   |\n\t-------------\
                        \n    2\t|   |   |   |\n\t-------------\n";
        assert_eq!(state.to_string(), expected);
        assert_eq!(TippyMove::new(2, 1).to_string(), "[2, 1]");
    }
}
