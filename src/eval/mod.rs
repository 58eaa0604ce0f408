//! Static evaluation for the negamax search

use crate::board::{BoardView, Side};

/// Score `board` from `side`'s perspective: its cell count minus the
/// opponent's.
///
/// Symmetric by construction, `evaluate(s, b) == -evaluate(s.opposite(), b)`,
/// which negamax relies on when it negates child values. Static values are
/// bounded by the cell count, so they never reach the search's win/loss
/// sentinels.
#[must_use]
pub fn evaluate<B: BoardView + ?Sized>(side: Side, board: &B) -> i32 {
    board.num_of_side(side) as i32 - board.num_of_side(side.opposite()) as i32
}
