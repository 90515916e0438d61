//! Brick Breaker - A five-level paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game phase)
//! - `renderer`: Draw lists and triangle tessellation for a host renderer
//! - `settings`: Playfield and pacing configuration
//! - `driver`: Fixed-interval tick scheduling for host loops

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FixedStep;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 800;
    pub const PLAYFIELD_HEIGHT: i32 = 600;

    /// Fixed simulation interval (100 Hz logic tick)
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Maximum ticks run per host frame before the backlog is dropped
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    pub const PADDLE_SPEED: i32 = 5;
    /// Distance from the playfield bottom to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: i32 = 50;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 15;
    pub const BALL_START_X_SPEED: i32 = 2;
    pub const BALL_START_Y_SPEED: i32 = -2;

    /// Brick grid
    pub const BRICK_WIDTH: i32 = 80;
    pub const BRICK_HEIGHT: i32 = 30;
    pub const BRICK_COLUMNS: i32 = 10;
    pub const BRICK_BASE_ROWS: i32 = 5;
    pub const BRICK_GRID_OFFSET: i32 = 10;

    /// Scoring and progression
    pub const POINTS_PER_BRICK: u32 = 10;
    pub const MAX_LEVEL: u32 = 5;
}
