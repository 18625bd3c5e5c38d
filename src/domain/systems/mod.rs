pub mod combat;
pub mod movement;
