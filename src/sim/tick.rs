//! Fixed interval simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use super::collision::ball_out_of_bounds;
use super::state::{Brick, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Idle/demo mode - the paddle follows the ball on its own
    pub autopilot: bool,
}

impl TickInput {
    pub const fn held(left: bool, right: bool) -> Self {
        Self {
            left,
            right,
            autopilot: false,
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::GameOver => return,
        GamePhase::LevelCompleted => {
            // Transition ticks do no movement or collision work
            if state.level >= state.settings.max_level {
                state.end_game();
            } else {
                state.start_next_level();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    let input = if input.autopilot {
        autopilot_input(state)
    } else {
        *input
    };

    state
        .paddle
        .move_horizontal(input.left, input.right, state.settings.paddle_max_x());

    if state.ball.advance(state.settings.ball_max_x()).hit() {
        state.events.push(GameEvent::WallBounce);
    }

    let paddle_bounds = state.paddle.bounds();
    if state.ball.check_paddle_collision(&paddle_bounds) {
        state.events.push(GameEvent::PaddleHit);
    }

    // Every brick touched this tick is destroyed and flips the ball. Two hits
    // in the same tick flip it twice, cancelling out.
    let mut destroyed: Vec<Brick> = Vec::new();
    for brick in state.bricks.iter() {
        if state.ball.check_brick_collision(&brick.bounds()) {
            destroyed.push(*brick);
        }
    }
    for brick in &destroyed {
        state.ball.reverse_direction_y();
        state.score += u64::from(state.settings.points_per_brick);
        state.events.push(GameEvent::BrickDestroyed {
            x: brick.pos.x,
            y: brick.pos.y,
        });
        log::debug!(
            "Brick at ({}, {}) destroyed, score {}",
            brick.pos.x,
            brick.pos.y,
            state.score
        );
    }
    state.bricks.remove_all(&destroyed);

    if state.bricks.is_empty() {
        state.phase = GamePhase::LevelCompleted;
        state.events.push(GameEvent::LevelCleared { level: state.level });
        log::info!("Level {} cleared, score {}", state.level, state.score);
    }

    if ball_out_of_bounds(state.ball.pos.y, state.settings.playfield_height) {
        state.end_game();
    }
}

/// Steer the paddle centre toward the ball centre. Inside a dead zone of one
/// paddle step no key is held, so the paddle settles instead of jittering.
fn autopilot_input(state: &GameState) -> TickInput {
    let offset = state.ball.center_x() - state.paddle.center_x();
    TickInput::held(offset < -PADDLE_SPEED, offset > PADDLE_SPEED)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::{Ball, BrickField};
    use glam::IVec2;
    use proptest::prelude::*;

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>()).prop_map(|(left, right)| TickInput::held(left, right))
    }

    fn input_sequence_strategy() -> impl Strategy<Value = Vec<TickInput>> {
        prop::collection::vec(input_strategy(), 1..400)
    }

    fn speed_strategy() -> impl Strategy<Value = i32> {
        prop_oneof![Just(-2), Just(2)]
    }

    proptest! {
        /// The paddle never leaves [0, width - 100] whatever keys are held,
        /// including widths whose rest position is off the 5px step grid
        #[test]
        fn prop_paddle_stays_in_playfield(
            inputs in input_sequence_strategy(),
            width in 800..=1200i32,
        ) {
            let settings = Settings {
                playfield_width: width,
                ..Settings::default()
            };
            prop_assert!(settings.validate().is_ok());
            let mut state = GameState::new(settings);
            let max_x = state.settings.paddle_max_x();

            for input in &inputs {
                if state.phase != GamePhase::Playing {
                    break;
                }
                tick(&mut state, input);
                prop_assert!(
                    (0..=max_x).contains(&state.paddle.pos.x),
                    "paddle x {} left the playfield",
                    state.paddle.pos.x
                );
            }
        }

        /// Flip-before-add keeps the ball inside the side walls
        #[test]
        fn prop_ball_bounded_by_walls(
            x in 0..=785i32,
            y in 0..=600i32,
            vx in speed_strategy(),
            vy in speed_strategy(),
            steps in 1..2000usize,
        ) {
            let settings = Settings::default();
            let max_x = settings.ball_max_x();
            let mut ball = Ball { pos: IVec2::new(x, y), vel: IVec2::new(vx, vy) };

            for _ in 0..steps {
                ball.advance(max_x);
                prop_assert!(
                    (0..=max_x).contains(&ball.pos.x),
                    "ball x {} escaped the side walls",
                    ball.pos.x
                );
                prop_assert!(ball.pos.y >= 0, "ball y {} went above the ceiling", ball.pos.y);
            }
        }

        /// Every level lays out (5 + level) * 10 distinct, non-overlapping bricks
        #[test]
        fn prop_brick_field_layout(level in 1..=5u32) {
            let field = BrickField::for_level(level);
            prop_assert_eq!(field.len(), ((5 + level) * 10) as usize);

            let bricks = field.as_slice();
            for (i, a) in bricks.iter().enumerate() {
                for b in &bricks[i + 1..] {
                    prop_assert_ne!(a, b);
                    prop_assert!(!a.bounds().overlaps_interior(&b.bounds()));
                }
            }
        }

        /// Score never decreases while playing
        #[test]
        fn prop_score_monotonic(inputs in input_sequence_strategy()) {
            let mut state = GameState::default();
            let mut last_score = state.score;

            for input in &inputs {
                tick(&mut state, input);
                prop_assert!(state.score >= last_score);
                last_score = state.score;
            }
        }

        /// Ticking a finished game changes nothing
        #[test]
        fn prop_game_over_is_terminal(
            inputs in input_sequence_strategy(),
            score in 0..10_000u64,
            level in 1..=5u32,
        ) {
            let mut state = GameState::default();
            state.phase = GamePhase::GameOver;
            state.score = score;
            state.level = level;

            for input in &inputs {
                tick(&mut state, input);
            }

            prop_assert_eq!(state.phase, GamePhase::GameOver);
            prop_assert_eq!(state.score, score);
            prop_assert_eq!(state.level, level);
        }
    }
}
