//! Players and the driver contract
//!
//! A [`Player`] chooses moves; the surrounding driver (session loop, input
//! parsing, rendering) implements [`Game`] and is only *called* from here.
//! Neither player type applies moves itself: both submit through the
//! driver, which owns the authoritative board.

use rand::Rng;

use crate::board::{Board, BoardView, Move, Side};
use crate::engine::AIEngine;
use crate::error::GameError;
use crate::search::legal_moves;

/// Driver-side collaborator contract.
pub trait Game {
    /// Blocking retrieval of a human coordinate pair; `None` once input is
    /// exhausted.
    fn get_move(&mut self) -> Option<(usize, usize)>;

    /// Apply a move to the authoritative board.
    fn make_move(&mut self, row: usize, col: usize);

    /// Echo a chosen move for logging and synchronization.
    fn report_move(&mut self, side: Side, row: usize, col: usize);
}

/// Anything that can take a turn.
pub trait Player {
    /// The side this player moves for.
    fn side(&self) -> Side;

    /// Choose one move and submit it through `game`.
    fn make_move(&mut self, board: &Board, game: &mut dyn Game) -> Result<(), GameError>;
}

/// A player that takes moves from the driver's input source.
pub struct HumanPlayer {
    side: Side,
}

impl HumanPlayer {
    #[must_use]
    pub fn new(side: Side) -> Self {
        HumanPlayer { side }
    }
}

impl Player for HumanPlayer {
    fn side(&self) -> Side {
        self.side
    }

    /// Retrieve a coordinate pair and submit it if legal. Illegal input
    /// comes back as an error for the boundary to re-prompt on; exhausted
    /// input is not an error.
    fn make_move(&mut self, board: &Board, game: &mut dyn Game) -> Result<(), GameError> {
        let Some((row, col)) = game.get_move() else {
            return Ok(());
        };
        if !board.is_legal(self.side, row, col) {
            return Err(GameError::IllegalMove {
                side: self.side,
                row,
                col,
            });
        }
        game.make_move(row, col);
        Ok(())
    }
}

/// Move-selection policy for [`AiPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A uniformly random legal move
    Random,
    /// Full negamax search
    Search,
}

/// An automated player.
pub struct AiPlayer {
    side: Side,
    engine: AIEngine,
    strategy: Strategy,
}

impl AiPlayer {
    /// Searching player with default engine settings.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self::with_engine(side, AIEngine::new())
    }

    /// Searching player over a pre-configured engine.
    #[must_use]
    pub fn with_engine(side: Side, engine: AIEngine) -> Self {
        AiPlayer {
            side,
            engine,
            strategy: Strategy::Search,
        }
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    fn choose(&mut self, board: &Board) -> Option<Move> {
        match self.strategy {
            Strategy::Search => self.engine.get_move(board, self.side),
            Strategy::Random => {
                let moves = legal_moves(board, self.side);
                if moves.is_empty() {
                    None
                } else {
                    Some(moves[rand::rng().random_range(0..moves.len())])
                }
            }
        }
    }
}

impl Player for AiPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn make_move(&mut self, board: &Board, game: &mut dyn Game) -> Result<(), GameError> {
        let Some(mv) = self.choose(board) else {
            return Err(GameError::NoMoves { side: self.side });
        };
        game.make_move(mv.row, mv.col);
        game.report_move(self.side, mv.row, mv.col);
        Ok(())
    }
}
