use std::time::SystemTime;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::body::Body;
use crate::config::{BONUS_POINTS, FOOD_POINTS, Level, POISON_PENALTY, POISON_TRIM_COUNT};
use crate::grid::{GridSize, Position};
use crate::input::{Direction, InputCommand};
use crate::items::{Items, spawn_obstacles};

/// Current high-level gameplay phase.
///
/// `Over` is terminal: no transition leaves it, and a new session constructs
/// a fresh [`GameState`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Running,
    Paused,
    Over,
}

/// Discrete notification produced by at most one per tick.
///
/// Consumed once by the sound/log collaborators; game correctness never
/// depends on what they do with it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    FoodEaten,
    PoisonEaten,
    BonusEaten,
    GameOver,
}

/// Session summary handed to the persistence collaborator at game end.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub player: String,
    pub score: i32,
    pub timestamp: SystemTime,
}

/// Read-only view of one frame of game state, consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub body: &'a Body,
    pub items: &'a Items,
    pub obstacles: &'a [Position],
    pub score: i32,
    pub high_score: i32,
    pub level: Level,
    pub phase: Phase,
    pub grid: GridSize,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub body: Body,
    pub items: Items,
    pub obstacles: Vec<Position>,
    pub score: i32,
    pub high_score: i32,
    pub phase: Phase,
    grid: GridSize,
    level: Level,
    direction: Direction,
    player: String,
    ended_at: Option<SystemTime>,
    rng: StdRng,
}

impl GameState {
    /// Creates a new session seeded from OS entropy.
    #[must_use]
    pub fn new(grid: GridSize, level: Level, player: &str, high_score: i32) -> Self {
        Self::from_rng(grid, level, player, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible play.
    #[must_use]
    pub fn new_with_seed(
        grid: GridSize,
        level: Level,
        player: &str,
        high_score: i32,
        seed: u64,
    ) -> Self {
        Self::from_rng(grid, level, player, high_score, StdRng::seed_from_u64(seed))
    }

    fn from_rng(
        grid: GridSize,
        level: Level,
        player: &str,
        high_score: i32,
        mut rng: StdRng,
    ) -> Self {
        let body = Body::new(grid.center());
        let obstacles = spawn_obstacles(&mut rng, level, grid);
        let mut items = Items::new();
        items.spawn_food(&mut rng, grid);

        Self {
            body,
            items,
            obstacles,
            score: 0,
            high_score,
            phase: Phase::Running,
            grid,
            level,
            direction: Direction::Right,
            player: player.to_owned(),
            ended_at: None,
            rng,
        }
    }

    /// Advances the session by one tick.
    ///
    /// Returns the at most one event this tick produced. Pause toggling and
    /// quitting consume the whole tick; no movement happens alongside them.
    ///
    /// # Panics
    ///
    /// Panics when called after the session has ended; stepping a finished
    /// game is a caller bug, not a game condition.
    pub fn step(&mut self, command: InputCommand) -> Option<GameEvent> {
        assert!(
            self.phase != Phase::Over,
            "step called on a finished session"
        );

        if command.quit {
            // External quit skips all collision checks.
            self.finish();
            return Some(GameEvent::GameOver);
        }

        if command.pause {
            self.phase = match self.phase {
                Phase::Running => Phase::Paused,
                Phase::Paused => Phase::Running,
                Phase::Over => unreachable!("guarded by the assertion above"),
            };
            return None;
        }

        if self.phase == Phase::Paused {
            return None;
        }

        if let Some(direction) = command.direction {
            // Reject exact reversals; they would mean instant self-collision.
            if direction != self.direction.opposite() {
                self.direction = direction;
            }
        }

        let new_head = self.body.head().step(self.direction);

        // Lethal checks in order, first match wins: wall, self, obstacle.
        if !self.grid.is_in_bounds(new_head) {
            self.finish();
            return Some(GameEvent::GameOver);
        }
        if self.body.occupies(new_head) {
            self.finish();
            return Some(GameEvent::GameOver);
        }
        if self.obstacles.contains(&new_head) {
            self.finish();
            return Some(GameEvent::GameOver);
        }

        if self.items.food == Some(new_head) {
            self.score += FOOD_POINTS;
            self.body.grow(new_head);
            self.items.spawn_food(&mut self.rng, self.grid);
            Some(GameEvent::FoodEaten)
        } else if self.items.poison == Some(new_head) {
            self.score -= POISON_PENALTY;
            self.body.grow(new_head);
            self.items.clear_poison();
            for _ in 0..POISON_TRIM_COUNT {
                self.body.trim();
            }
            // Poison starvation: shrinking down to the head alone ends the game.
            if self.body.len() == 1 {
                self.finish();
            }
            Some(GameEvent::PoisonEaten)
        } else if self.items.bonus == Some(new_head) {
            self.score += BONUS_POINTS;
            self.body.grow(new_head);
            self.items.clear_bonus();
            Some(GameEvent::BonusEaten)
        } else {
            self.body.grow(new_head);
            self.body.trim();
            None
        }
    }

    /// Returns a read-only view of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            body: &self.body,
            items: &self.items,
            obstacles: &self.obstacles,
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            phase: self.phase,
            grid: self.grid,
        }
    }

    /// Returns the summary handed to persistence at game end.
    ///
    /// # Panics
    ///
    /// Panics unless the session has ended.
    #[must_use]
    pub fn session_summary(&self) -> SessionSummary {
        let timestamp = self
            .ended_at
            .expect("session summary requested before the session ended");

        SessionSummary {
            player: self.player.clone(),
            score: self.score,
            timestamp,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    fn finish(&mut self) {
        self.phase = Phase::Over;
        self.ended_at = Some(SystemTime::now());
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::body::Body;
    use crate::config::{BOARD_CLASSIC, Level};
    use crate::grid::Position;
    use crate::input::{Direction, InputCommand};

    use super::{GameEvent, GameState, Phase};

    fn fresh(level: Level) -> GameState {
        GameState::new_with_seed(BOARD_CLASSIC, level, "tester", 0, 42)
    }

    #[test]
    fn new_session_starts_centered_and_running() {
        let state = fresh(Level::Beginner);

        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.body.head(), Position { x: 15, y: 10 });
        assert_eq!(state.direction(), Direction::Right);
        assert!(state.items.food.is_some());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn eating_food_grows_scores_and_respawns() {
        let mut state = fresh(Level::Beginner);
        state.items.food = Some(Position { x: 16, y: 10 });

        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::FoodEaten));
        assert_eq!(state.body.len(), 2);
        assert_eq!(state.body.head(), Position { x: 16, y: 10 });
        assert_eq!(state.score, 10);
        assert!(state.items.food.is_some(), "a new food must be drawn");
        assert_eq!(state.items.food_spawn_count(), 2);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn ordinary_movement_keeps_length_constant() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;

        let event = state.step(InputCommand::default());

        assert_eq!(event, None);
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.body.head(), Position { x: 16, y: 10 });
        assert_eq!(state.score, 0);
    }

    #[test]
    fn reverse_direction_command_is_ignored() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;

        state.step(InputCommand::turn(Direction::Left));

        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.body.head(), Position { x: 16, y: 10 });
    }

    #[test]
    fn perpendicular_turn_is_applied() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;

        state.step(InputCommand::turn(Direction::Up));

        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.body.head(), Position { x: 15, y: 9 });
    }

    #[test]
    fn pause_toggle_consumes_the_tick() {
        let mut state = fresh(Level::Beginner);

        let event = state.step(InputCommand::toggle_pause());

        assert_eq!(event, None);
        assert_eq!(state.phase, Phase::Paused);
        assert_eq!(state.body.head(), Position { x: 15, y: 10 });

        state.step(InputCommand::toggle_pause());
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.body.head(), Position { x: 15, y: 10 });
    }

    #[test]
    fn stepping_while_paused_changes_nothing() {
        let mut state = fresh(Level::Beginner);
        state.step(InputCommand::toggle_pause());

        let food_before = state.items.food;
        for _ in 0..10 {
            let event = state.step(InputCommand::default());
            assert_eq!(event, None);
        }

        assert_eq!(state.phase, Phase::Paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.body.head(), Position { x: 15, y: 10 });
        assert_eq!(state.items.food, food_before);
    }

    #[test]
    fn all_four_board_edges_are_lethal() {
        // Right wall: x == width + 1.
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.body = Body::new(Position { x: 30, y: 5 });
        assert_eq!(
            state.step(InputCommand::default()),
            Some(GameEvent::GameOver)
        );
        assert_eq!(state.phase, Phase::Over);

        // Top edge: y == -1.
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.body = Body::new(Position { x: 5, y: 0 });
        assert_eq!(
            state.step(InputCommand::turn(Direction::Up)),
            Some(GameEvent::GameOver)
        );
        assert_eq!(state.phase, Phase::Over);

        // Bottom edge: y == height.
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.body = Body::new(Position { x: 5, y: 19 });
        assert_eq!(
            state.step(InputCommand::turn(Direction::Down)),
            Some(GameEvent::GameOver)
        );
        assert_eq!(state.phase, Phase::Over);

        // Left wall: x == 0. Starting direction is Right, so turn via Up
        // first; a direct Left command would be rejected as a reversal.
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.body = Body::new(Position { x: 2, y: 5 });
        assert_eq!(state.step(InputCommand::turn(Direction::Up)), None);
        assert_eq!(state.step(InputCommand::turn(Direction::Left)), None);
        assert_eq!(state.body.head(), Position { x: 1, y: 4 });
        assert_eq!(
            state.step(InputCommand::default()),
            Some(GameEvent::GameOver)
        );
        assert_eq!(state.phase, Phase::Over);
    }

    #[test]
    fn walls_kill_even_with_an_item_on_the_head_cell() {
        let mut state = fresh(Level::Beginner);
        state.body = Body::new(Position { x: 30, y: 5 });
        state.items.food = Some(Position { x: 31, y: 5 });

        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::GameOver));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn self_collision_ends_the_session() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.body = Body::from_cells(vec![
            Position { x: 5, y: 5 },
            Position { x: 5, y: 6 },
            Position { x: 6, y: 6 },
            Position { x: 6, y: 5 },
            Position { x: 6, y: 4 },
        ]);

        // Head at (5,5) moving Right into (6,5), which the body occupies.
        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::GameOver));
        assert_eq!(state.phase, Phase::Over);
    }

    #[test]
    fn obstacle_collision_wins_over_items_on_the_same_cell() {
        let mut state = fresh(Level::Beginner);
        let target = Position { x: 16, y: 10 };
        state.obstacles = vec![target];
        state.items.food = Some(target);

        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::GameOver));
        assert_eq!(state.score, 0, "the overlapping food must not score");
        assert_eq!(state.body.len(), 1, "the head must not be placed");
    }

    #[test]
    fn poison_at_length_three_shrinks_to_two() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.body = Body::from_cells(vec![
            Position { x: 10, y: 10 },
            Position { x: 9, y: 10 },
            Position { x: 8, y: 10 },
        ]);
        state.items.poison = Some(Position { x: 11, y: 10 });

        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::PoisonEaten));
        assert_eq!(state.body.len(), 2);
        assert_eq!(state.body.head(), Position { x: 11, y: 10 });
        assert_eq!(state.score, -10);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.items.poison, None);
    }

    #[test]
    fn poison_at_length_one_is_starvation() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.items.poison = Some(Position { x: 16, y: 10 });

        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::PoisonEaten));
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.score, -10);
        assert_eq!(state.phase, Phase::Over);
    }

    #[test]
    fn bonus_grows_and_clears_only_its_slot() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.items.poison = Some(Position { x: 1, y: 1 });
        state.items.bonus = Some(Position { x: 16, y: 10 });

        let event = state.step(InputCommand::default());

        assert_eq!(event, Some(GameEvent::BonusEaten));
        assert_eq!(state.score, 30);
        assert_eq!(state.body.len(), 2);
        assert_eq!(state.items.bonus, None);
        assert_eq!(state.items.poison, Some(Position { x: 1, y: 1 }));
    }

    #[test]
    fn advanced_level_spawns_six_obstacles_in_bounds() {
        let state = fresh(Level::Advanced);

        assert_eq!(state.obstacles.len(), 6);
        for obstacle in &state.obstacles {
            assert!(obstacle.x >= 1 && obstacle.x <= 28);
            assert!(obstacle.y >= 1 && obstacle.y <= 18);
        }
    }

    #[test]
    fn quit_ends_the_session_from_running_or_paused() {
        let mut state = fresh(Level::Beginner);
        let event = state.step(InputCommand::quit());
        assert_eq!(event, Some(GameEvent::GameOver));
        assert_eq!(state.phase, Phase::Over);

        let mut state = fresh(Level::Beginner);
        state.step(InputCommand::toggle_pause());
        let event = state.step(InputCommand::quit());
        assert_eq!(event, Some(GameEvent::GameOver));
        assert_eq!(state.phase, Phase::Over);
    }

    #[test]
    fn finishing_raises_the_in_memory_high_score() {
        let mut state = GameState::new_with_seed(BOARD_CLASSIC, Level::Beginner, "tester", 50, 7);
        state.score = 60;

        state.step(InputCommand::quit());

        assert_eq!(state.high_score, 60);
    }

    #[test]
    fn lower_final_score_keeps_the_old_high_score() {
        let mut state = GameState::new_with_seed(BOARD_CLASSIC, Level::Beginner, "tester", 50, 7);
        state.score = 40;

        state.step(InputCommand::quit());

        assert_eq!(state.high_score, 50);
    }

    #[test]
    fn summary_score_matches_the_score_at_game_end() {
        let mut state = fresh(Level::Beginner);
        state.items.food = None;
        state.items.poison = Some(Position { x: 16, y: 10 });

        state.step(InputCommand::default());
        assert_eq!(state.phase, Phase::Over);

        let summary = state.session_summary();
        assert_eq!(summary.player, "tester");
        assert_eq!(summary.score, -10);
        assert_eq!(summary.score, state.score);
    }

    #[test]
    #[should_panic(expected = "finished session")]
    fn stepping_a_finished_session_is_a_defect() {
        let mut state = fresh(Level::Beginner);
        state.step(InputCommand::quit());
        let _ = state.step(InputCommand::default());
    }

    #[test]
    #[should_panic(expected = "before the session ended")]
    fn summary_before_game_end_is_a_defect() {
        let state = fresh(Level::Beginner);
        let _ = state.session_summary();
    }

    #[test]
    fn snapshot_reflects_the_current_state() {
        let state = fresh(Level::Intermediate);
        let snapshot = state.snapshot();

        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.level, Level::Intermediate);
        assert_eq!(snapshot.obstacles.len(), 3);
        assert_eq!(snapshot.body.head(), Position { x: 15, y: 10 });
    }
}
