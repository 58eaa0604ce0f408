//! Mutable board with chain-reaction propagation and undo history

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{BoardView, Move, Side, Square};

/// Callback invoked after every completed top-level mutation.
type Observer = Box<dyn FnMut(&Board)>;

/// Game board: an N x N grid of [`Square`]s plus the undo history.
///
/// This is the only type that mutates game state; all other consumers go
/// through the read-only [`BoardView`] surface. Each top-level
/// [`add_spot`](Board::add_spot) pushes one full snapshot onto the history,
/// so the stack depth always equals the number of completed moves since
/// creation or [`clear`](Board::clear).
pub struct Board {
    size: usize,
    /// Row-major grid; `(row, col)` lives at `(row - 1) * size + (col - 1)`.
    grid: Vec<Square>,
    /// Completed top-level moves since creation or `clear`.
    moves: u32,
    /// Whether Red / Blue has made at least one move. A winner can only be
    /// decided once both have, so one-sided speculative sequences never
    /// produce a premature winner.
    moved: [bool; 2],
    history: Vec<Snapshot>,
    observers: Vec<Observer>,
}

/// One undo frame: an independent deep copy of everything a move can change.
#[derive(Clone)]
struct Snapshot {
    grid: Vec<Square>,
    moves: u32,
    moved: [bool; 2],
}

impl Board {
    /// A fresh `size` x `size` board: every cell neutral with one spot.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2, got {size}");
        Board {
            size,
            grid: vec![Square::INITIAL; size * size],
            moves: 0,
            moved: [false; 2],
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Reinitialize to a fresh `size` x `size` board. Clears the undo
    /// history, resets the move counter and notifies observers.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`.
    pub fn clear(&mut self, size: usize) {
        assert!(size >= 2, "board size must be at least 2, got {size}");
        self.size = size;
        self.grid = vec![Square::INITIAL; size * size];
        self.moves = 0;
        self.moved = [false; 2];
        self.history.clear();
        self.announce();
    }

    /// Number of orthogonal neighbors of `(row, col)`: 2 for a corner, 3 for
    /// an edge, 4 for an interior cell. This is the overflow capacity.
    #[inline]
    pub fn neighbors(&self, row: usize, col: usize) -> u32 {
        let mut n = 0;
        if row > 1 {
            n += 1;
        }
        if row < self.size {
            n += 1;
        }
        if col > 1 {
            n += 1;
        }
        if col < self.size {
            n += 1;
        }
        n
    }

    /// Completed top-level moves since creation or [`clear`](Board::clear).
    #[inline]
    pub fn num_moves(&self) -> u32 {
        self.moves
    }

    /// Add a spot for `side` at `(row, col)`, cascading overflows.
    ///
    /// Pushes one undo frame before any mutation, then drains pending
    /// additions to fixpoint: a cell whose count exceeds its capacity keeps
    /// the residual and feeds one spot to each in-range neighbor (queued up,
    /// down, left, right). The drain stops the instant a winner is decided,
    /// leaving further cells untouched. Callers are responsible for
    /// ownership legality; a speculative call on a board that already has a
    /// winner leaves the grid unchanged. Observers are notified exactly
    /// once, after the cascade settles.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of range.
    pub fn add_spot(&mut self, side: Side, row: usize, col: usize) {
        assert!(
            self.contains(row, col),
            "({row}, {col}) out of range on a size-{} board",
            self.size
        );
        debug_assert!(side != Side::Neutral, "neutral cannot move");
        self.mark_undo();
        self.moves += 1;
        if self.winner().is_none() {
            self.moved[Self::slot(side)] = true;
            self.apply_spots(side, row, col);
        }
        self.announce();
    }

    /// [`add_spot`](Board::add_spot) addressed by 0-based linear index.
    pub fn add_spot_index(&mut self, side: Side, n: usize) {
        let mv = Move::from_index(n, self.size);
        self.add_spot(side, mv.row, mv.col);
    }

    /// Overwrite one cell directly, bypassing propagation, history and
    /// notification. Intended for test setup.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of range or `spots` is 0.
    pub fn set(&mut self, row: usize, col: usize, spots: u32, side: Side) {
        assert!(
            self.contains(row, col),
            "({row}, {col}) out of range on a size-{} board",
            self.size
        );
        let i = self.index(row, col);
        self.grid[i] = Square::new(side, spots);
    }

    /// Revert the most recent top-level move, restoring the grid, move
    /// counter and per-side flags wholesale.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to undo. A silent no-op here would
    /// desynchronize a search's working copy from its explored tree.
    pub fn undo(&mut self) {
        let frame = self.history.pop().expect("undo with empty history");
        self.grid = frame.grid;
        self.moves = frame.moves;
        self.moved = frame.moved;
    }

    /// Register `observer`, called after each completed top-level mutation.
    pub fn on_change(&mut self, observer: impl FnMut(&Board) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + (col - 1)
    }

    #[inline]
    fn slot(side: Side) -> usize {
        match side {
            Side::Red => 0,
            Side::Blue => 1,
            Side::Neutral => unreachable!("neutral never moves"),
        }
    }

    /// Record the state the upcoming move is about to change.
    fn mark_undo(&mut self) {
        self.history.push(Snapshot {
            grid: self.grid.clone(),
            moves: self.moves,
            moved: self.moved,
        });
    }

    /// Drain pending spot additions to fixpoint.
    ///
    /// The first addition always lands (the caller has already ruled out a
    /// decided winner); every later one re-checks the winner first, so a
    /// cascade stops the instant the game is decided.
    fn apply_spots(&mut self, side: Side, row: usize, col: usize) {
        let mut pending = VecDeque::new();
        pending.push_back((row, col));
        let mut first = true;
        while let Some((r, c)) = pending.pop_front() {
            if !first && self.winner().is_some() {
                break;
            }
            first = false;
            let i = self.index(r, c);
            let spots = self.grid[i].spots() + 1;
            let capacity = self.neighbors(r, c);
            if spots > capacity {
                self.grid[i] = Square::new(side, spots - capacity);
                if r > 1 {
                    pending.push_back((r - 1, c));
                }
                if r < self.size {
                    pending.push_back((r + 1, c));
                }
                if c > 1 {
                    pending.push_back((r, c - 1));
                }
                if c < self.size {
                    pending.push_back((r, c + 1));
                }
            } else {
                self.grid[i] = Square::new(side, spots);
            }
        }
    }

    /// Notify observers of a completed mutation.
    fn announce(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer(self);
        }
        // Keep observers registered from inside a callback.
        observers.extend(std::mem::take(&mut self.observers));
        self.observers = observers;
    }
}

impl BoardView for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: usize, col: usize) -> Square {
        assert!(
            self.contains(row, col),
            "({row}, {col}) out of range on a size-{} board",
            self.size
        );
        self.grid[self.index(row, col)]
    }

    fn num_of_side(&self, side: Side) -> usize {
        self.grid.iter().filter(|sq| sq.side() == side).count()
    }

    fn num_pieces(&self) -> usize {
        self.grid.iter().map(|sq| sq.spots() as usize).sum()
    }

    fn is_legal(&self, side: Side, row: usize, col: usize) -> bool {
        if !self.contains(row, col) || self.winner().is_some() {
            return false;
        }
        let owner = self.grid[self.index(row, col)].side();
        owner == Side::Neutral || owner == side
    }

    fn whose_move(&self) -> Side {
        if self.moves % 2 == 0 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    fn winner(&self) -> Option<Side> {
        if !(self.moved[0] && self.moved[1]) {
            return None;
        }
        let red = self.num_of_side(Side::Red);
        let blue = self.num_of_side(Side::Blue);
        if red == 0 && blue > 0 {
            Some(Side::Blue)
        } else if blue == 0 && red > 0 {
            Some(Side::Red)
        } else {
            None
        }
    }
}

/// Value copy: identical cells and move counters, empty history, no
/// observers.
impl Clone for Board {
    fn clone(&self) -> Self {
        Board {
            size: self.size,
            grid: self.grid.clone(),
            moves: self.moves,
            moved: self.moved,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }
}

/// Full-grid value equality; history and observers are not part of a
/// board's value.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.grid.hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("moves", &self.moves)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Board {
    /// Dump format: `===` fences around rows of `<spots><owner>` cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in 1..=self.size {
            write!(f, "   ")?;
            for col in 1..=self.size {
                let sq = self.grid[self.index(row, col)];
                write!(f, " {}{}", sq.spots(), sq.side().mark())?;
            }
            writeln!(f)?;
        }
        write!(f, "===")
    }
}
