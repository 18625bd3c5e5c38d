// Ports for the collaborators the simulation depends on but does not own.

use std::time::Duration;

use crate::domain::animation::{Frame, Region};
use crate::domain::errors::AssetError;
use crate::domain::state::{Rect, Size, Vec2};

/// Terrain-corrected movement for one body over one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub position: Vec2,
    /// Zeroed on any axis that hit solid terrain.
    pub velocity: Vec2,
    /// True when solid terrain sits directly beneath the corrected bounds.
    pub supported: bool,
}

/// Port for tile-map collision. Must never place a body inside solid terrain.
pub trait CollisionResolver {
    fn resolve(&self, position: Vec2, velocity: Vec2, bounds: Size) -> Contact;
}

/// Port for retrieving the current simulation time.
pub trait Clock {
    fn now_millis(&self) -> u64;

    /// Called once at the start of every tick. Wall clocks ignore it.
    fn advance(&self, _dt: Duration) {}
}

/// Port for anything the avatar can shoot or bump into.
pub trait Hostile {
    fn bounding_box(&self) -> Rect;
    fn damage_output(&self) -> i32;
    fn apply_damage(&mut self, amount: i32);
}

impl<T: Hostile + ?Sized> Hostile for Box<T> {
    fn bounding_box(&self) -> Rect {
        (**self).bounding_box()
    }

    fn damage_output(&self) -> i32 {
        (**self).damage_output()
    }

    fn apply_damage(&mut self, amount: i32) {
        (**self).apply_damage(amount)
    }
}

/// Port for the render target. Coordinates are the frame's top-left corner.
pub trait Surface {
    fn blit(&mut self, frame: &Frame, x: f32, y: f32, flip_horizontal: bool);
}

/// Opaque handle to a loaded sound effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundId(pub String);

/// Port for asset lookup. Decoding is the adapter's concern.
pub trait AssetSource {
    fn sprite(&self, sheet: &str, region: Region) -> Result<Frame, AssetError>;
    fn sound(&self, path: &str) -> Result<SoundId, AssetError>;
}
