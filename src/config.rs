use ratatui::style::Color;

use crate::grid::GridSize;

/// Classic board preset, the default.
pub const BOARD_CLASSIC: GridSize = GridSize {
    width: 30,
    height: 20,
};

/// Wide board preset used by later revisions.
pub const BOARD_WIDE: GridSize = GridSize {
    width: 50,
    height: 20,
};

/// Fixed simulation cadence in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Points granted for ordinary food.
pub const FOOD_POINTS: i32 = 10;

/// Points deducted for poison. Score has no floor and may go negative.
pub const POISON_PENALTY: i32 = 10;

/// Points granted for the bonus item.
pub const BONUS_POINTS: i32 = 30;

/// Body cells lost to one poison item, beyond the head just gained.
pub const POISON_TRIM_COUNT: usize = 2;

/// Difficulty preset, fixed at session start.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Maps the numeric menu choice (1-3) to a level.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Beginner),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Numeric form for the HUD and CLI.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Static obstacles generated at session start for this level.
    #[must_use]
    pub fn obstacle_count(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 3,
            Self::Advanced => 6,
        }
    }
}

pub const GLYPH_SNAKE_HEAD: &str = "O";
pub const GLYPH_SNAKE_BODY: &str = "o";
pub const GLYPH_FOOD: &str = "@";
pub const GLYPH_POISON: &str = "P";
pub const GLYPH_BONUS: &str = "$";
pub const GLYPH_OBSTACLE: &str = "#";

/// Entity colors applied to every drawn glyph.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub poison: Color,
    pub bonus: Color,
    pub obstacle: Color,
    pub border: Color,
    pub hud: Color,
    pub hint: Color,
}

pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Cyan,
    snake_body: Color::Green,
    food: Color::Yellow,
    poison: Color::Red,
    bonus: Color::Green,
    obstacle: Color::Magenta,
    border: Color::Blue,
    hud: Color::Yellow,
    hint: Color::Cyan,
};
