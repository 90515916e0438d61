//! Game state and core simulation types
//!
//! The simulation owns every entity outright; hosts read it through
//! [`GameState::snapshot`] once a tick has completed.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{WallContact, ball_rect_collision, ball_wall_contact, reflect_velocity};
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick of the level is gone; the next tick advances or ends the run
    LevelCompleted,
    /// Run ended (terminal)
    GameOver,
}

/// Things that happened during the last tick, for audio and feedback hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball bounced off a side wall or the ceiling
    WallBounce,
    /// Brick at this top-left corner was destroyed
    BrickDestroyed { x: i32, y: i32 },
    /// Last brick of the level is gone
    LevelCleared { level: u32 },
    /// Fresh field laid out, including level 1 at the start of a run
    LevelStarted { level: u32 },
    /// Run ended with this final score
    GameOver { score: u64 },
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
}

impl Paddle {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.paddle_start(),
        }
    }

    /// Move under held input. Each direction is clamped on its own, so holding
    /// both keys cancels out away from the walls. A step never carries the
    /// paddle past a wall, even when the rest position is off the step grid.
    pub fn move_horizontal(&mut self, left: bool, right: bool, max_x: i32) {
        if left && self.pos.x > 0 {
            self.pos.x = (self.pos.x - PADDLE_SPEED).max(0);
        }
        if right && self.pos.x < max_x {
            self.pos.x = (self.pos.x + PADDLE_SPEED).min(max_x);
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.pos = settings.paddle_start();
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + PADDLE_WIDTH / 2
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: IVec2,
    /// Pixels per tick
    pub vel: IVec2,
}

impl Ball {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.ball_start(),
            vel: IVec2::new(BALL_START_X_SPEED, BALL_START_Y_SPEED),
        }
    }

    /// Advance one tick. Walls are tested against the projected position and
    /// the velocity is flipped before it is applied, so the ball never passes
    /// `max_x` or the ceiling.
    pub fn advance(&mut self, max_x: i32) -> WallContact {
        let contact = ball_wall_contact(self.pos, self.vel, max_x);
        self.vel = reflect_velocity(self.vel, contact);
        self.pos += self.vel;
        contact
    }

    /// Bounce off the paddle. Only the vertical direction flips and the ball
    /// is not pushed out; the reversed velocity separates it over later ticks.
    pub fn check_paddle_collision(&mut self, paddle: &Rect) -> bool {
        let hit = ball_rect_collision(&self.bounds(), paddle);
        if hit {
            self.reverse_direction_y();
        }
        hit
    }

    /// Pure overlap test against a brick
    pub fn check_brick_collision(&self, brick: &Rect) -> bool {
        ball_rect_collision(&self.bounds(), brick)
    }

    #[inline]
    pub fn reverse_direction_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_DIAMETER, BALL_DIAMETER)
    }

    pub fn reset(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + BALL_DIAMETER / 2
    }
}

/// A brick. Being present in the [`BrickField`] is what makes it alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brick {
    pub pos: IVec2,
}

impl Brick {
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// Number of brick rows laid out for a level
#[inline]
pub fn rows_for_level(level: u32) -> i32 {
    BRICK_BASE_ROWS + level as i32
}

/// Live bricks for the current level, in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out a fresh field for `level`
    pub fn for_level(level: u32) -> Self {
        let mut field = Self::default();
        field.initialize(level);
        field
    }

    /// Discard all bricks and lay out the grid for `level`
    pub fn initialize(&mut self, level: u32) {
        self.bricks.clear();
        for row in 0..rows_for_level(level) {
            for col in 0..BRICK_COLUMNS {
                self.bricks.push(Brick::new(
                    col * BRICK_WIDTH + BRICK_GRID_OFFSET,
                    row * BRICK_HEIGHT + BRICK_GRID_OFFSET,
                ));
            }
        }
    }

    /// Remove exactly the given bricks, keeping the rest in order
    pub fn remove_all(&mut self, destroyed: &[Brick]) {
        if destroyed.is_empty() {
            return;
        }
        self.bricks.retain(|brick| !destroyed.contains(brick));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn as_slice(&self) -> &[Brick] {
        &self.bricks
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield and pacing
    pub settings: Settings,
    /// Current level (1-based)
    pub level: u32,
    /// Score
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks spent in play
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Live bricks
    pub bricks: BrickField,
    /// Events raised by the most recent tick (or by `new`, before the first)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl GameState {
    /// Start a run at level 1
    pub fn new(settings: Settings) -> Self {
        log::info!("Level 1 started");
        Self {
            settings,
            level: 1,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            paddle: Paddle::new(&settings),
            ball: Ball::new(&settings),
            bricks: BrickField::for_level(1),
            events: vec![GameEvent::LevelStarted { level: 1 }],
        }
    }

    /// Move to the next level with freshly placed entities
    pub(crate) fn start_next_level(&mut self) {
        self.level += 1;
        self.phase = GamePhase::Playing;
        self.ball.reset(&self.settings);
        self.paddle.reset(&self.settings);
        self.bricks.initialize(self.level);
        self.events.push(GameEvent::LevelStarted { level: self.level });
        log::info!("Level {} started with {} bricks", self.level, self.bricks.len());
    }

    pub(crate) fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over at level {} with score {}", self.level, self.score);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
