use crate::domain::ports::{CollisionResolver, Contact};
use crate::domain::state::{Size, Vec2};

// Tolerance for "resting on the floor" after float clamping.
const SUPPORT_EPSILON: f32 = 0.01;

/// Closed rectangular arena: two walls, a ceiling, and a floor.
///
/// Stands in for the tile map so the kernel can run headless; resolves the x axis
/// first, then y, zeroing velocity on whichever axis hits a boundary.
#[derive(Debug, Clone, Copy)]
pub struct ArenaTerrain {
    pub left: f32,
    pub right: f32,
    pub ceiling: f32,
    pub floor: f32,
}

impl CollisionResolver for ArenaTerrain {
    fn resolve(&self, position: Vec2, velocity: Vec2, bounds: Size) -> Contact {
        let half_w = bounds.width / 2.0;
        let half_h = bounds.height / 2.0;
        let mut velocity = velocity;

        let mut x = position.x + velocity.x;
        if x - half_w < self.left {
            x = self.left + half_w;
            velocity.x = 0.0;
        } else if x + half_w > self.right {
            x = self.right - half_w;
            velocity.x = 0.0;
        }

        let mut y = position.y + velocity.y;
        if y + half_h > self.floor {
            y = self.floor - half_h;
            velocity.y = 0.0;
        } else if y - half_h < self.ceiling {
            y = self.ceiling + half_h;
            velocity.y = 0.0;
        }

        Contact {
            position: Vec2::new(x, y),
            velocity,
            supported: y + half_h >= self.floor - SUPPORT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> ArenaTerrain {
        ArenaTerrain {
            left: 0.0,
            right: 320.0,
            ceiling: 0.0,
            floor: 240.0,
        }
    }

    #[test]
    fn when_moving_into_the_right_wall_then_dx_is_zeroed() {
        let contact = arena().resolve(
            Vec2::new(315.0, 100.0),
            Vec2::new(3.8, 0.0),
            Size::new(14.0, 14.0),
        );

        assert_eq!(contact.position.x, 313.0);
        assert_eq!(contact.velocity.x, 0.0);
        assert!(!contact.supported);
    }

    #[test]
    fn when_falling_through_the_floor_then_body_rests_on_it() {
        let contact = arena().resolve(
            Vec2::new(100.0, 228.0),
            Vec2::new(0.0, 4.0),
            Size::new(20.0, 20.0),
        );

        assert_eq!(contact.position.y, 230.0);
        assert_eq!(contact.velocity.y, 0.0);
        assert!(contact.supported);
    }

    #[test]
    fn when_resting_on_the_floor_then_it_stays_supported() {
        let contact = arena().resolve(
            Vec2::new(100.0, 230.0),
            Vec2::new(1.0, 0.0),
            Size::new(20.0, 20.0),
        );

        assert_eq!(contact.position, Vec2::new(101.0, 230.0));
        assert!(contact.supported);
    }

    #[test]
    fn when_jumping_into_the_ceiling_then_dy_is_zeroed() {
        let contact = arena().resolve(
            Vec2::new(100.0, 12.0),
            Vec2::new(0.0, -4.5),
            Size::new(20.0, 20.0),
        );

        assert_eq!(contact.position.y, 10.0);
        assert_eq!(contact.velocity.y, 0.0);
    }
}
