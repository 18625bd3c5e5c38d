// Hand-written fakes for domain ports, shared by unit tests.

use std::cell::Cell;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::animation::{Frame, Region};
use crate::domain::entities::avatar::{JUMP_SOUND, PLAYER_SHEET, SCRATCH_SOUND};
use crate::domain::errors::AssetError;
use crate::domain::ports::{
    AssetSource, Clock, CollisionResolver, Contact, Hostile, SoundId, Surface,
};
use crate::domain::state::{Rect, Size, Vec2};

fn moved(position: Vec2, velocity: Vec2) -> Vec2 {
    Vec2::new(position.x + velocity.x, position.y + velocity.y)
}

/// No terrain at all; nothing is ever supported.
pub(crate) struct FreeSpace;

impl CollisionResolver for FreeSpace {
    fn resolve(&self, position: Vec2, velocity: Vec2, _bounds: Size) -> Contact {
        Contact {
            position: moved(position, velocity),
            velocity,
            supported: false,
        }
    }
}

/// Infinite horizontal floor at `y`.
pub(crate) struct Floor {
    pub y: f32,
}

impl CollisionResolver for Floor {
    fn resolve(&self, position: Vec2, velocity: Vec2, bounds: Size) -> Contact {
        let mut position = moved(position, velocity);
        let mut velocity = velocity;
        let half = bounds.height / 2.0;

        let supported = position.y + half >= self.y;
        if supported {
            position.y = self.y - half;
            if velocity.y > 0.0 {
                velocity.y = 0.0;
            }
        }
        Contact {
            position,
            velocity,
            supported,
        }
    }
}

/// Infinite vertical wall at `x`, blocking rightward movement only.
pub(crate) struct WallAt {
    pub x: f32,
}

impl CollisionResolver for WallAt {
    fn resolve(&self, position: Vec2, velocity: Vec2, bounds: Size) -> Contact {
        let mut position = moved(position, velocity);
        let mut velocity = velocity;
        let half = bounds.width / 2.0;

        if velocity.x > 0.0 && position.x + half > self.x {
            position.x = self.x - half;
            velocity.x = 0.0;
        }
        Contact {
            position,
            velocity,
            supported: false,
        }
    }
}

#[derive(Default)]
pub(crate) struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub(crate) fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }

    fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt.as_millis() as u64);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Blit {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub flipped: bool,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub blits: Vec<Blit>,
}

impl Surface for RecordingSurface {
    fn blit(&mut self, frame: &Frame, x: f32, y: f32, flip_horizontal: bool) {
        self.blits.push(Blit {
            x,
            y,
            width: frame.region.width,
            height: frame.region.height,
            flipped: flip_horizontal,
        });
    }
}

/// In-memory assets: one sprite sheet and a set of sounds.
pub(crate) struct StaticAssets {
    sheet: Option<(u32, u32)>,
    sounds: HashSet<String>,
}

impl StaticAssets {
    pub(crate) fn complete() -> Self {
        Self {
            sheet: Some((160, 240)),
            sounds: [JUMP_SOUND, SCRATCH_SOUND]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub(crate) fn without_sound(path: &str) -> Self {
        let mut assets = Self::complete();
        assets.sounds.remove(path);
        assets
    }

    pub(crate) fn with_sheet_size(width: u32, height: u32) -> Self {
        let mut assets = Self::complete();
        assets.sheet = Some((width, height));
        assets
    }
}

impl AssetSource for StaticAssets {
    fn sprite(&self, sheet: &str, region: Region) -> Result<Frame, AssetError> {
        let Some((width, height)) = self.sheet.filter(|_| sheet == PLAYER_SHEET) else {
            return Err(AssetError::MissingSheet {
                path: sheet.to_string(),
            });
        };
        if region.x + region.width > width || region.y + region.height > height {
            return Err(AssetError::RegionOutOfBounds {
                path: sheet.to_string(),
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            });
        }
        Ok(Frame {
            sheet: Arc::from(sheet),
            region,
        })
    }

    fn sound(&self, path: &str) -> Result<SoundId, AssetError> {
        if self.sounds.contains(path) {
            Ok(SoundId(path.to_string()))
        } else {
            Err(AssetError::MissingSound {
                path: path.to_string(),
            })
        }
    }
}

/// Stationary hostile that records the damage it receives.
pub(crate) struct Dummy {
    pub bounds: Rect,
    pub damage: i32,
    pub damage_taken: i32,
}

impl Dummy {
    pub(crate) fn new(bounds: Rect, damage: i32) -> Self {
        Self {
            bounds,
            damage,
            damage_taken: 0,
        }
    }
}

impl Hostile for Dummy {
    fn bounding_box(&self) -> Rect {
        self.bounds
    }

    fn damage_output(&self) -> i32 {
        self.damage
    }

    fn apply_damage(&mut self, amount: i32) {
        self.damage_taken += amount;
    }
}
