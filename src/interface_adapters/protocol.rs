// Wire DTOs for frames published to a renderer and input scripts read from disk.

use crate::domain::state::{Facing, InputFlags};
use crate::use_cases::{DrawCommand, FrameUpdate};
use serde::{Deserialize, Serialize};

/// Per-tick input payload; absent keys are released.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InputDto {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub jetpack: bool,
    #[serde(default)]
    pub fire: bool,
}

impl From<InputDto> for InputFlags {
    fn from(input: InputDto) -> Self {
        Self {
            left: input.left,
            right: input.right,
            jump: input.jump,
            jetpack: input.jetpack,
            fire: input.fire,
        }
    }
}

/// One step of a scripted input sequence: hold `input` for `ticks` ticks.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStepDto {
    pub ticks: u64,
    #[serde(flatten)]
    pub input: InputDto,
}

/// Snapshot of the simulation sent to the renderer on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub avatar: AvatarStateDto,
    pub projectiles: Vec<ProjectileStateDto>,
    pub draw: Vec<DrawCommandDto>,
}

impl From<&FrameUpdate> for FrameDto {
    fn from(frame: &FrameUpdate) -> Self {
        let avatar = &frame.avatar;
        Self {
            tick: frame.tick,
            avatar: AvatarStateDto {
                x: avatar.position.x,
                y: avatar.position.y,
                dx: avatar.velocity.x,
                dy: avatar.velocity.y,
                facing: match avatar.facing {
                    Facing::Left => "left",
                    Facing::Right => "right",
                },
                action: avatar.action.as_str(),
                health: avatar.health,
                max_health: avatar.max_health,
                fuel: avatar.fuel,
                max_fuel: avatar.max_fuel,
                flinching: avatar.flinching,
                dead: avatar.dead,
            },
            projectiles: frame
                .projectiles
                .iter()
                .map(|p| ProjectileStateDto {
                    id: p.id.to_string(),
                    x: p.position.x,
                    y: p.position.y,
                    phase: p.phase.as_str(),
                })
                .collect(),
            draw: frame.draw.iter().map(DrawCommandDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvatarStateDto {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub facing: &'static str,
    pub action: &'static str,
    pub health: i32,
    pub max_health: i32,
    pub fuel: i32,
    pub max_fuel: i32,
    pub flinching: bool,
    pub dead: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub phase: &'static str,
}

/// Flattened blit: source region on `sheet`, destination top-left `x`/`y`.
#[derive(Debug, Clone, Serialize)]
pub struct DrawCommandDto {
    pub sheet: String,
    pub sx: u32,
    pub sy: u32,
    pub sw: u32,
    pub sh: u32,
    pub x: f32,
    pub y: f32,
    pub flip: bool,
}

impl From<&DrawCommand> for DrawCommandDto {
    fn from(command: &DrawCommand) -> Self {
        Self {
            sheet: command.sheet.to_string(),
            sx: command.region.x,
            sy: command.region.y,
            sw: command.region.width,
            sh: command.region.height,
            x: command.x,
            y: command.y,
            flip: command.flip_horizontal,
        }
    }
}
