// Use-case level outputs of the tick loop.

use crate::domain::animation::{Frame, Region};
use crate::domain::ports::{SoundId, Surface};
use crate::domain::state::{AvatarSnapshot, ProjectileSnapshot};
use crate::domain::systems::combat::CombatEvent;
use std::sync::Arc;

/// Side effects of a single `Session::step`.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub tick: u64,
    pub combat: Vec<CombatEvent>,
    pub sounds: Vec<SoundId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub sheet: Arc<str>,
    pub region: Region,
    pub x: f32,
    pub y: f32,
    pub flip_horizontal: bool,
}

/// Surface that records blits in draw order for a renderer to replay.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl Surface for DrawList {
    fn blit(&mut self, frame: &Frame, x: f32, y: f32, flip_horizontal: bool) {
        self.commands.push(DrawCommand {
            sheet: frame.sheet.clone(),
            region: frame.region,
            x,
            y,
            flip_horizontal,
        });
    }
}

/// Snapshot of the simulation published after every tick.
#[derive(Debug, Clone)]
pub struct FrameUpdate {
    pub tick: u64,
    pub avatar: AvatarSnapshot,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub draw: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Shutdown,
    TickLimit,
    AvatarDied,
}
