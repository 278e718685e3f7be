use std::collections::VecDeque;

use crate::grid::Position;

/// The snake body: an ordered sequence of occupied cells, head at the front.
///
/// The body is owned by the game state and mutated only through [`Body::grow`]
/// and [`Body::trim`]. Neither operation validates the new head cell; collision
/// checks happen in the tick engine before any mutation.
#[derive(Debug, Clone)]
pub struct Body {
    cells: VecDeque<Position>,
}

impl Body {
    /// Creates a one-cell body at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut cells = VecDeque::new();
        cells.push_front(start);
        Self { cells }
    }

    /// Creates a body from explicit cells (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `cells` is empty; a zero-length body is a construction
    /// defect, not a reachable game state.
    #[must_use]
    pub fn from_cells(cells: Vec<Position>) -> Self {
        assert!(!cells.is_empty(), "body must contain at least one cell");
        Self {
            cells: VecDeque::from(cells),
        }
    }

    /// Prepends a new head cell. The caller guarantees it is collision-free.
    pub fn grow(&mut self, new_head: Position) {
        self.cells.push_front(new_head);
    }

    /// Removes the tail cell. Returns whether a cell was removed.
    ///
    /// A one-cell body is left untouched; the minimum-length game-over rule
    /// is the tick engine's responsibility.
    pub fn trim(&mut self) -> bool {
        if self.cells.len() <= 1 {
            return false;
        }
        self.cells.pop_back().is_some()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .cells
            .front()
            .expect("body must always contain at least one cell")
    }

    /// Returns true if any cell of the body occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Returns current cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over body cells from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}
