pub mod avatar;
pub mod body;
pub mod projectile;

pub use avatar::{Avatar, AvatarAssets, Environment};
pub use body::{Body, Entity};
pub use projectile::{Projectile, ProjectileSprites};
