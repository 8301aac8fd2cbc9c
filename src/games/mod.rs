//! Game implementations.
//!
//! - `subtract_square`: subtract perfect squares from a shared total
//! - `tippy`: tic-tac-toe variant with bent winning lines on an n x n grid

pub mod subtract_square;
pub mod tippy;

pub use subtract_square::{SubtractSquareMove, SubtractSquareState};
pub use tippy::{TippyMove, TippyState};
