// Interface adapters: concrete collaborators and wire DTOs around the simulation.

pub mod assets;
pub mod clock;
pub mod hostiles;
pub mod protocol;
pub mod terrain;
