//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per tick, integer geometry only
//! - Stable iteration order (bricks stay in row-major order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_rect_collision, ball_wall_contact};
pub use rect::Rect;
pub use snapshot::{Circle, Snapshot};
pub use state::{Ball, Brick, BrickField, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
