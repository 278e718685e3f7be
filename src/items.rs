use rand::Rng;

use crate::config::Level;
use crate::grid::{GridSize, Position};

/// The three consumable item slots, at most one of each kind on the board.
///
/// Food is always present after the first spawn. Poison and the bonus item
/// appear together on every second food spawn and are cleared independently
/// when eaten.
#[derive(Debug, Clone, Default)]
pub struct Items {
    pub food: Option<Position>,
    pub poison: Option<Position>,
    pub bonus: Option<Position>,
    food_counter: u32,
}

impl Items {
    /// Creates the empty item set used before the first spawn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a fresh food item, and on every second spawn also one poison
    /// and one bonus item.
    ///
    /// All positions are independent uniform draws from the spawn interior.
    /// Draws are deliberately never rejected against the snake body,
    /// obstacles, or each other, so items can land under the snake or on
    /// top of one another. Known quirk, kept.
    pub fn spawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: GridSize) {
        self.food = Some(random_interior(rng, grid));
        self.food_counter += 1;

        if self.food_counter % 2 == 0 {
            self.poison = Some(random_interior(rng, grid));
            self.bonus = Some(random_interior(rng, grid));
        }
    }

    /// Removes the poison item after consumption.
    pub fn clear_poison(&mut self) {
        self.poison = None;
    }

    /// Removes the bonus item after consumption.
    pub fn clear_bonus(&mut self) {
        self.bonus = None;
    }

    /// Number of food items spawned so far this session.
    #[must_use]
    pub fn food_spawn_count(&self) -> u32 {
        self.food_counter
    }
}

/// Generates the immutable obstacle set for one session.
///
/// Positions are independent draws, not deduplicated and not checked against
/// the snake's starting cell (same preserved quirk as item spawning).
#[must_use]
pub fn spawn_obstacles<R: Rng + ?Sized>(rng: &mut R, level: Level, grid: GridSize) -> Vec<Position> {
    (0..level.obstacle_count())
        .map(|_| random_interior(rng, grid))
        .collect()
}

/// Draws a uniform cell from the spawn interior `[1, width-2] × [1, height-2]`.
///
/// The spawn range leaves the rightmost playable column and the top/bottom
/// rows permanently empty of items.
fn random_interior<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Position {
    Position {
        x: rng.gen_range(1..=i32::from(grid.width) - 2),
        y: rng.gen_range(1..=i32::from(grid.height) - 2),
    }
}
