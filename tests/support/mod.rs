// Shared fixtures for integration tests: a small arena with the stock assets.
#![allow(dead_code)]

use jetpack_core::domain::Avatar;
use jetpack_core::domain::state::{Rect, Vec2};
use jetpack_core::domain::tuning::avatar::AvatarTuning;
use jetpack_core::domain::tuning::projectile::ProjectileTuning;
use jetpack_core::interface_adapters::assets::AssetManifest;
use jetpack_core::interface_adapters::clock::SteppedClock;
use jetpack_core::interface_adapters::hostiles::TrainingDummy;
use jetpack_core::interface_adapters::terrain::ArenaTerrain;
use jetpack_core::use_cases::Session;
use std::time::Duration;

pub type ArenaSession = Session<TrainingDummy, ArenaTerrain, SteppedClock>;

pub const TICK: Duration = Duration::from_millis(16);
pub const FLOOR: f32 = 240.0;
// Avatar collision box is 20 px tall; this center rests on the floor.
pub const GROUND_Y: f32 = FLOOR - 10.0;

pub fn arena() -> ArenaTerrain {
    ArenaTerrain {
        left: 0.0,
        right: 320.0,
        ceiling: 0.0,
        floor: FLOOR,
    }
}

pub fn avatar_at(x: f32) -> Avatar {
    Avatar::new(
        Vec2::new(x, GROUND_Y),
        AvatarTuning::default(),
        ProjectileTuning::default(),
        &AssetManifest::builtin(),
        TICK,
    )
    .expect("builtin assets load")
}

pub fn session_at(x: f32, hostiles: Vec<TrainingDummy>) -> ArenaSession {
    Session::new(avatar_at(x), hostiles, arena(), SteppedClock::default(), TICK)
}

/// Dummy standing on the floor whose left edge is at `x`.
pub fn dummy_at(x: f32, contact_damage: i32) -> TrainingDummy {
    TrainingDummy::new(Rect::new(x, FLOOR - 30.0, 20.0, 30.0), contact_damage, 20)
}
