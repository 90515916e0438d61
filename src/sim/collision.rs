//! Collision detection and response
//!
//! Walls are checked against the ball's projected next position so a bounce
//! takes effect before the ball would cross the wall. Entity contacts are
//! plain AABB overlap tests.

use glam::IVec2;

use super::rect::Rect;

/// Which velocity components a wall contact reverses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub flip_x: bool,
    /// Ceiling
    pub flip_y: bool,
}

impl WallContact {
    #[inline]
    pub fn hit(&self) -> bool {
        self.flip_x || self.flip_y
    }
}

/// Check the ball's next position against the side walls and ceiling.
///
/// `max_x` is the largest x the ball's left edge may occupy. The floor is
/// open: falling out of the bottom is a loss, not a bounce.
pub fn ball_wall_contact(pos: IVec2, vel: IVec2, max_x: i32) -> WallContact {
    let next = pos + vel;
    WallContact {
        flip_x: next.x < 0 || next.x > max_x,
        flip_y: next.y < 0,
    }
}

/// Reverse the velocity components a wall contact calls for
#[inline]
pub fn reflect_velocity(vel: IVec2, contact: WallContact) -> IVec2 {
    IVec2::new(
        if contact.flip_x { -vel.x } else { vel.x },
        if contact.flip_y { -vel.y } else { vel.y },
    )
}

/// Check whether the ball's bounding box touches a target rectangle
#[inline]
pub fn ball_rect_collision(ball: &Rect, target: &Rect) -> bool {
    ball.intersects(target)
}

/// Check if the ball fell past the bottom of the playfield
#[inline]
pub fn ball_out_of_bounds(ball_y: i32, playfield_height: i32) -> bool {
    ball_y > playfield_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_wall_contact() {
        let contact = ball_wall_contact(IVec2::new(784, 300), IVec2::new(2, -2), 785);
        assert!(contact.flip_x);
        assert!(!contact.flip_y);
        assert_eq!(reflect_velocity(IVec2::new(2, -2), contact), IVec2::new(-2, -2));
    }

    #[test]
    fn test_left_wall_and_ceiling_contact() {
        let contact = ball_wall_contact(IVec2::new(1, 1), IVec2::new(-2, -2), 785);
        assert!(contact.flip_x && contact.flip_y);
        assert_eq!(reflect_velocity(IVec2::new(-2, -2), contact), IVec2::new(2, 2));
    }

    #[test]
    fn test_exact_wall_position_is_inside() {
        // Landing exactly on 0 or max_x is still in range
        assert!(!ball_wall_contact(IVec2::new(2, 300), IVec2::new(-2, 2), 785).hit());
        assert!(!ball_wall_contact(IVec2::new(783, 300), IVec2::new(2, 2), 785).hit());
    }

    #[test]
    fn test_floor_is_open() {
        let contact = ball_wall_contact(IVec2::new(400, 599), IVec2::new(2, 2), 785);
        assert!(!contact.hit());
        assert!(ball_out_of_bounds(601, 600));
        assert!(!ball_out_of_bounds(600, 600));
    }

    #[test]
    fn test_ball_rect_collision() {
        let paddle = Rect::new(350, 550, 100, 20);
        assert!(ball_rect_collision(&Rect::new(400, 540, 15, 15), &paddle));
        // Touching the top edge counts
        assert!(ball_rect_collision(&Rect::new(400, 535, 15, 15), &paddle));
        assert!(!ball_rect_collision(&Rect::new(400, 534, 15, 15), &paddle));
    }
}
