//! AI engine facade
//!
//! Wraps the [`Searcher`] with per-move configuration: a maximum deepening
//! depth and a time budget. The engine clones the authoritative board into
//! a private working copy for every request, so the caller's board is never
//! mutated by a search.
//!
//! # Example
//!
//! ```
//! use spillover::{AIEngine, Board, Side};
//!
//! let mut board = Board::new(4);
//! board.add_spot(Side::Red, 2, 2);
//!
//! let mut engine = AIEngine::with_config(3, 200);
//! if let Some(mv) = engine.get_move(&board, Side::Blue) {
//!     board.add_spot(Side::Blue, mv.row, mv.col);
//! }
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Move, Side};
use crate::search::{SearchResult, Searcher};

/// Result of a move request with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Negamax value of the chosen move
    pub score: i32,
    /// Deepest fully completed search depth
    pub depth: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI engine.
///
/// Searches by iterative deepening up to a configured depth, spending at
/// most the configured time budget per move. An exhausted budget is not an
/// error: the engine answers with the best move of the last completed
/// depth.
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u32,
    time_limit: Duration,
}

impl AIEngine {
    /// Engine with default settings: depth 4, 15 second budget per move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(4, 15_000)
    }

    /// Engine with a custom maximum depth and per-move budget.
    #[must_use]
    pub fn with_config(max_depth: u32, time_limit_ms: u64) -> Self {
        AIEngine {
            searcher: Searcher::new(),
            max_depth,
            time_limit: Duration::from_millis(time_limit_ms),
        }
    }

    /// Best move for `side`, or `None` when no legal move exists.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Best move for `side` with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        let SearchResult {
            best_move,
            score,
            depth,
            nodes,
        } = self
            .searcher
            .search_timed(board, side, self.max_depth, self.time_limit);
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "{side:?} move {best_move:?}: score {score}, depth {depth}, {nodes} nodes, {time_ms} ms"
        );
        MoveResult {
            best_move,
            score,
            depth,
            time_ms,
            nodes,
        }
    }

    /// Set the maximum deepening depth.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.max_depth = depth;
    }

    /// The current maximum deepening depth.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Set the per-move time budget.
    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.time_limit = Duration::from_millis(time_ms);
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
