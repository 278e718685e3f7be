use crate::input::Direction;

/// Logical board dimensions as a named type.
///
/// The playable interior is `width × height` cells; one extra column on each
/// side (`x == 0` and `x == width + 1`) is reserved for the drawn walls.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns true when `position` lies inside the playable interior.
    #[must_use]
    pub fn is_in_bounds(self, position: Position) -> bool {
        position.x >= 1
            && position.x <= i32::from(self.width)
            && position.y >= 0
            && position.y < i32::from(self.height)
    }

    /// Returns true when `position` sits on one of the drawn side walls.
    ///
    /// Top and bottom edges have no wall column of their own; leaving the
    /// board vertically is caught by [`GridSize::is_in_bounds`] instead.
    #[must_use]
    pub fn is_wall(self, position: Position) -> bool {
        position.x == 0 || position.x == i32::from(self.width) + 1
    }

    /// Returns the cell at the center of the interior.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}
