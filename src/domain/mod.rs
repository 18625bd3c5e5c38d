// Domain layer: core simulation types and rules.

pub mod animation;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use entities::{Avatar, Environment, Projectile};
pub use errors::AssetError;
pub use state::{
    Action, AvatarSnapshot, Facing, InputFlags, ProjectilePhase, ProjectileSnapshot, Rect, Size,
    Vec2,
};
