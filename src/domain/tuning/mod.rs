pub mod avatar;
pub mod projectile;
