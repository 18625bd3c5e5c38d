// Physics state shared by every simulated entity.

use crate::domain::ports::{CollisionResolver, Contact, Surface};
use crate::domain::state::{Facing, Rect, Size, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    /// Collision box, centered on `position`.
    pub bounds: Size,
}

impl Body {
    pub fn new(position: Vec2, bounds: Size, facing: Facing) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing,
            bounds,
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::centered(self.position, self.bounds)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.bounding_box().intersects(other)
    }
}

/// Capabilities every entity variant provides to the tick loop.
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Integrates the tentative velocity for this tick.
    fn update_physics(&mut self);

    /// Hands the tentative velocity to the terrain and applies the correction unconditionally.
    fn resolve_collision(&mut self, terrain: &dyn CollisionResolver) -> Contact {
        let body = self.body_mut();
        let contact = terrain.resolve(body.position, body.velocity, body.bounds);
        body.position = contact.position;
        body.velocity = contact.velocity;
        contact
    }

    fn render(&self, surface: &mut dyn Surface);
}
