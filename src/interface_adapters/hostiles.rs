use tracing::info;

use crate::domain::ports::Hostile;
use crate::domain::state::Rect;

/// Stationary target with a health pool. Behaviour beyond standing still is out of scope.
#[derive(Debug, Clone)]
pub struct TrainingDummy {
    pub bounds: Rect,
    pub contact_damage: i32,
    pub health: i32,
}

impl TrainingDummy {
    pub fn new(bounds: Rect, contact_damage: i32, health: i32) -> Self {
        Self {
            bounds,
            contact_damage,
            health,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

impl Hostile for TrainingDummy {
    fn bounding_box(&self) -> Rect {
        self.bounds
    }

    fn damage_output(&self) -> i32 {
        self.contact_damage
    }

    fn apply_damage(&mut self, amount: i32) {
        if self.is_destroyed() {
            return;
        }
        self.health = (self.health - amount).max(0);
        if self.is_destroyed() {
            info!(x = self.bounds.x, y = self.bounds.y, "training dummy destroyed");
        }
    }
}
