//! Tippy: tic-tac-toe on an n x n grid where the winning line is bent.
//!
//! - Players alternate placing marks (`X` for p1, `O` for p2)
//! - Four marks forming a tippy (an S/Z-shaped walk) win
//! - A full board with no tippy is a draw
//!
//! ```text
//!           0   1   2
//!         -------------
//!     0   | X | X | O |
//!         -------------
//!     1   | O | X | X |
//!         -------------
//!     2   | O |   |   |
//!         -------------
//! ```

mod shapes;
mod state;

pub use shapes::{Coord, Shape, TippyTable};
pub use state::{TippyMove, TippyState, MIN_BOARD_SIZE};
