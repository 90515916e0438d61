//! Draw lists built from snapshots
//!
//! The host walks the list in order: clear, bricks, paddle, ball, HUD text.

use glam::Vec2;
use serde::Serialize;

use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{Rect, Snapshot};

/// Inset of HUD text from the playfield corners
pub const HUD_MARGIN: f32 = 10.0;
/// Vertical gap between a message and the score beneath it
pub const MESSAGE_LINE_GAP: f32 = 30.0;

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    TopLeft,
    TopRight,
    Center,
}

/// One primitive for the host renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        color: [f32; 4],
    },
    Rect {
        rect: Rect,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: TextAnchor,
        color: [f32; 4],
    },
}

/// Build the draw list for one frame
pub fn draw_list(snapshot: &Snapshot, settings: &Settings) -> Vec<DrawCommand> {
    let width = settings.playfield_width as f32;
    let height = settings.playfield_height as f32;
    let mut commands = vec![DrawCommand::Clear {
        color: colors::BACKGROUND,
    }];

    match snapshot {
        Snapshot::Playing {
            score,
            level,
            paddle,
            ball,
            bricks,
        } => {
            commands.reserve(bricks.len() + 4);
            commands.extend(bricks.iter().map(|brick| DrawCommand::Rect {
                rect: *brick,
                color: colors::BRICK,
            }));
            commands.push(DrawCommand::Rect {
                rect: *paddle,
                color: colors::PADDLE,
            });
            commands.push(DrawCommand::Circle {
                center: ball.center,
                radius: ball.radius,
                color: colors::BALL,
            });
            commands.push(DrawCommand::Text {
                text: format!("Score: {score}"),
                pos: Vec2::splat(HUD_MARGIN),
                anchor: TextAnchor::TopLeft,
                color: colors::TEXT,
            });
            commands.push(DrawCommand::Text {
                text: format!("Level: {level}"),
                pos: Vec2::new(width - HUD_MARGIN, HUD_MARGIN),
                anchor: TextAnchor::TopRight,
                color: colors::TEXT,
            });
        }
        Snapshot::Message { score, text, .. } => {
            let center = Vec2::new(width / 2.0, height / 2.0);
            commands.push(DrawCommand::Text {
                text: text.clone(),
                pos: center,
                anchor: TextAnchor::Center,
                color: colors::TEXT,
            });
            commands.push(DrawCommand::Text {
                text: format!("Score: {score}"),
                pos: center + Vec2::new(0.0, MESSAGE_LINE_GAP),
                anchor: TextAnchor::Center,
                color: colors::TEXT,
            });
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};

    #[test]
    fn test_playing_draw_list() {
        let state = GameState::default();
        let commands = draw_list(&state.snapshot(), &state.settings);

        // clear + 60 bricks + paddle + ball + 2 text lines
        assert_eq!(commands.len(), 65);
        assert!(matches!(commands[0], DrawCommand::Clear { color } if color == colors::BACKGROUND));
        assert!(matches!(commands[1], DrawCommand::Rect { color, .. } if color == colors::BRICK));
        assert!(matches!(
            commands[61],
            DrawCommand::Rect { rect, color } if rect == Rect::new(350, 550, 100, 20) && color == colors::PADDLE
        ));
        assert!(matches!(commands[62], DrawCommand::Circle { radius, .. } if radius == 7.5));

        let DrawCommand::Text { text, anchor, .. } = &commands[63] else {
            panic!("expected score text");
        };
        assert_eq!(text, "Score: 0");
        assert_eq!(*anchor, TextAnchor::TopLeft);

        let DrawCommand::Text { text, pos, anchor, .. } = &commands[64] else {
            panic!("expected level text");
        };
        assert_eq!(text, "Level: 1");
        assert_eq!(*anchor, TextAnchor::TopRight);
        assert_eq!(pos.x, 790.0);
    }

    #[test]
    fn test_message_draw_list_has_no_geometry() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        state.score = 250;
        let commands = draw_list(&state.snapshot(), &state.settings);

        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| !matches!(
            c,
            DrawCommand::Rect { .. } | DrawCommand::Circle { .. }
        )));
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, .. } if text == "Score: 250"
        )));
    }
}
