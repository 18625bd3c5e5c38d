// Use cases layer: application workflows around the simulation kernel.

pub mod game;
pub mod session;
pub mod types;

pub use game::{InputSource, session_task};
pub use session::Session;
pub use types::{DrawCommand, DrawList, FrameUpdate, StopReason, TickReport};
