//! Read-only projection of the game for rendering
//!
//! Taken after a tick completes. Entity geometry is only exposed while
//! playing; the level-complete and game-over screens carry a message and the
//! score instead.

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::state::{GamePhase, GameState};

pub const LEVEL_COMPLETE_TEXT: &str = "Level Complete!";
pub const GAME_OVER_TEXT: &str = "Game Over";

/// A circle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Circle inscribed in a square bounding box
    pub fn inscribed(bounds: &Rect) -> Self {
        let radius = bounds.size.x as f32 / 2.0;
        Self {
            center: bounds.pos.as_vec2() + Vec2::splat(radius),
            radius,
        }
    }
}

/// What a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Snapshot {
    Playing {
        score: u64,
        level: u32,
        paddle: Rect,
        ball: Circle,
        bricks: Vec<Rect>,
    },
    Message {
        phase: GamePhase,
        score: u64,
        text: String,
    },
}

impl Snapshot {
    pub fn phase(&self) -> GamePhase {
        match self {
            Snapshot::Playing { .. } => GamePhase::Playing,
            Snapshot::Message { phase, .. } => *phase,
        }
    }

    pub fn score(&self) -> u64 {
        match self {
            Snapshot::Playing { score, .. } | Snapshot::Message { score, .. } => *score,
        }
    }
}

impl GameState {
    /// Project the current state for the renderer
    pub fn snapshot(&self) -> Snapshot {
        match self.phase {
            GamePhase::Playing => Snapshot::Playing {
                score: self.score,
                level: self.level,
                paddle: self.paddle.bounds(),
                ball: Circle::inscribed(&self.ball.bounds()),
                bricks: self.bricks.iter().map(|b| b.bounds()).collect(),
            },
            GamePhase::LevelCompleted => Snapshot::Message {
                phase: self.phase,
                score: self.score,
                text: LEVEL_COMPLETE_TEXT.to_string(),
            },
            GamePhase::GameOver => Snapshot::Message {
                phase: self.phase,
                score: self.score,
                text: GAME_OVER_TEXT.to_string(),
            },
        }
    }
}
