//! Error types shared across the crate
//!
//! Only recoverable conditions are modeled as errors. Contract violations
//! (out-of-range coordinates, undo on an empty history) are programming
//! errors and panic instead; see the board documentation.

use thiserror::Error;

use crate::board::Side;

/// Recoverable game-level errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A move that failed the legality check. Reported to the input
    /// boundary so the player can be re-prompted; never silently replaced
    /// with another move.
    #[error("illegal move for {side:?} at ({row}, {col})")]
    IllegalMove { side: Side, row: usize, col: usize },

    /// No legal move exists for the side to play.
    #[error("no legal moves for {side:?}")]
    NoMoves { side: Side },
}
