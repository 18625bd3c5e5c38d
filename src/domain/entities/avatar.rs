// Player-controlled avatar: locomotion, jetpack, attack, and resource bookkeeping.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::domain::animation::{Animation, FrameDelay, Region, Sequence};
use crate::domain::entities::body::{Body, Entity};
use crate::domain::entities::projectile::{Projectile, ProjectileSprites};
use crate::domain::errors::AssetError;
use crate::domain::ports::{AssetSource, Clock, CollisionResolver, Contact, SoundId, Surface};
use crate::domain::state::{Action, AvatarSnapshot, Facing, InputFlags, Size, Vec2};
use crate::domain::systems::movement::{integrate_airborne, integrate_horizontal};
use crate::domain::tuning::avatar::AvatarTuning;
use crate::domain::tuning::projectile::ProjectileTuning;

pub const PLAYER_SHEET: &str = "/Sprites/Player/space2.png";
pub const JUMP_SOUND: &str = "/SFX/jump.mp3";
pub const SCRATCH_SOUND: &str = "/SFX/scratch.mp3";

// Sprite sheet layout: rows are 34 px apart, cells 36 px wide.
const FIRING_REGIONS: [Region; 3] = [
    Region::new(0, 0, 36, 34),
    Region::new(36, 0, 36, 34),
    Region::new(80, 0, 45, 34),
];
const WALKING_REGIONS: [Region; 3] = [
    Region::new(0, 34, 36, 34),
    Region::new(36, 34, 36, 34),
    Region::new(72, 34, 36, 34),
];
const IDLE_REGION: Region = Region::new(36, 77, 36, 34);
const AIRBORNE_REGION: Region = Region::new(69, 113, 36, 40);
const AIR_FIRING_REGION: Region = Region::new(44, 159, 43, 41);
const JETPACK_REGION: Region = Region::new(7, 200, 35, 40);

/// Frame sequences for every avatar action. Jumping and falling share one pose.
#[derive(Debug, Clone)]
pub struct AvatarSprites {
    idle: Sequence,
    walking: Sequence,
    airborne: Sequence,
    jetpack: Sequence,
    firing: Sequence,
    air_firing: Sequence,
}

impl AvatarSprites {
    pub fn load(assets: &dyn AssetSource) -> Result<Self, AssetError> {
        let cut = |name: &'static str, regions: &[Region]| -> Result<Sequence, AssetError> {
            let frames = regions
                .iter()
                .map(|region| assets.sprite(PLAYER_SHEET, *region))
                .collect::<Result<Vec<_>, _>>()?;
            Sequence::new(name, frames)
        };

        Ok(Self {
            idle: cut("idle", &[IDLE_REGION])?,
            walking: cut("walking", &WALKING_REGIONS)?,
            airborne: cut("airborne", &[AIRBORNE_REGION])?,
            jetpack: cut("jetpack", &[JETPACK_REGION])?,
            firing: cut("firing", &FIRING_REGIONS)?,
            air_firing: cut("air_firing", &[AIR_FIRING_REGION])?,
        })
    }

    fn sequence(&self, action: Action) -> Sequence {
        match action {
            Action::Idle => self.idle.clone(),
            Action::Walking => self.walking.clone(),
            Action::Jumping | Action::Falling => self.airborne.clone(),
            Action::JetpackFalling => self.jetpack.clone(),
            Action::Firing => self.firing.clone(),
            Action::AirFiring => self.air_firing.clone(),
        }
    }
}

fn frame_delay(action: Action) -> FrameDelay {
    match action {
        Action::Idle => FrameDelay::Millis(400),
        Action::Walking => FrameDelay::Millis(40),
        Action::Jumping => FrameDelay::Hold,
        Action::Falling => FrameDelay::Millis(100),
        Action::JetpackFalling => FrameDelay::Millis(100),
        Action::Firing | Action::AirFiring => FrameDelay::Millis(50),
    }
}

/// Everything the avatar needs from the asset layer, resolved up front.
#[derive(Debug, Clone)]
pub struct AvatarAssets {
    pub sprites: AvatarSprites,
    pub projectile: ProjectileSprites,
    pub jump_sound: SoundId,
    pub scratch_sound: SoundId,
}

impl AvatarAssets {
    pub fn load(assets: &dyn AssetSource) -> Result<Self, AssetError> {
        Ok(Self {
            sprites: AvatarSprites::load(assets)?,
            projectile: ProjectileSprites::load(assets)?,
            jump_sound: assets.sound(JUMP_SOUND)?,
            scratch_sound: assets.sound(SCRATCH_SOUND)?,
        })
    }
}

/// Collaborators consulted during one avatar tick.
pub struct Environment<'a> {
    pub terrain: &'a dyn CollisionResolver,
    pub clock: &'a dyn Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttackState {
    Ready,
    Firing,
}

pub struct Avatar {
    body: Body,
    tuning: AvatarTuning,
    projectile_tuning: ProjectileTuning,
    tick: Duration,

    // Resources.
    health: i32,
    fuel: i32,
    dead: bool,
    flinch_started: Option<u64>,

    // Locomotion: jump and fall share the airborne phase.
    airborne: bool,
    jumping: bool,
    jump_was_down: bool,

    attack: AttackState,
    action: Action,
    input: InputFlags,
    now_ms: u64,

    projectiles: Vec<Projectile>,
    next_projectile_id: u64,

    assets: AvatarAssets,
    animation: Animation,
    pending_sounds: Vec<SoundId>,
}

impl Avatar {
    pub fn new(
        spawn: Vec2,
        tuning: AvatarTuning,
        projectile_tuning: ProjectileTuning,
        assets: &dyn AssetSource,
        tick: Duration,
    ) -> Result<Self, AssetError> {
        let assets = AvatarAssets::load(assets)?;
        Ok(Self::with_assets(
            spawn,
            tuning,
            projectile_tuning,
            assets,
            tick,
        ))
    }

    pub fn with_assets(
        spawn: Vec2,
        tuning: AvatarTuning,
        projectile_tuning: ProjectileTuning,
        assets: AvatarAssets,
        tick: Duration,
    ) -> Self {
        let animation = Animation::new(
            assets.sprites.sequence(Action::Idle),
            frame_delay(Action::Idle),
            tick,
        );

        Self {
            body: Body::new(
                spawn,
                Size::new(tuning.collision_width, tuning.collision_height),
                Facing::Right,
            ),
            tuning,
            projectile_tuning,
            tick,
            health: tuning.max_health,
            fuel: tuning.max_fuel,
            dead: false,
            flinch_started: None,
            airborne: false,
            jumping: false,
            jump_was_down: false,
            attack: AttackState::Ready,
            action: Action::Idle,
            input: InputFlags::default(),
            now_ms: 0,
            projectiles: Vec::new(),
            next_projectile_id: 1,
            assets,
            animation,
            pending_sounds: Vec::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.tuning.max_health
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    pub fn max_fuel(&self) -> i32 {
        self.tuning.max_fuel
    }

    /// Refuels (or drains) the jetpack, clamped to its capacity.
    pub fn set_fuel(&mut self, fuel: i32) {
        self.fuel = fuel.clamp(0, self.tuning.max_fuel);
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_flinching(&self) -> bool {
        self.flinch_started.is_some()
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn laser_damage(&self) -> i32 {
        self.tuning.laser_damage
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Mutable view for combat; the slice cannot grow or shrink the collection.
    pub(crate) fn projectiles_mut(&mut self) -> &mut [Projectile] {
        &mut self.projectiles
    }

    /// Sound cues raised since the last call.
    pub fn take_sounds(&mut self) -> Vec<SoundId> {
        std::mem::take(&mut self.pending_sounds)
    }

    /// Runs one simulation tick. The step order is significant.
    pub fn update(&mut self, input: InputFlags, env: &Environment<'_>) {
        self.input = input;
        self.now_ms = env.clock.now_millis();

        self.update_physics();
        let contact = self.resolve_collision(env.terrain);
        self.settle(contact);

        self.tick_fuel();
        self.expire_flinch();
        self.try_fire();
        self.advance_projectiles(env.terrain);

        if self.attack == AttackState::Firing
            && self.action.is_firing()
            && self.animation.has_played_once()
        {
            self.attack = AttackState::Ready;
        }

        self.select_action();
        self.animation.update();
        self.update_facing();

        trace!(
            x = self.body.position.x,
            y = self.body.position.y,
            dx = self.body.velocity.x,
            dy = self.body.velocity.y,
            action = self.action.as_str(),
            "avatar tick"
        );
    }

    /// Applies contact damage. Returns whether the hit was applied (false while flinching).
    pub fn hit(&mut self, damage: i32, now_ms: u64) -> bool {
        if self.flinch_started.is_some() {
            return false;
        }

        self.health = (self.health - damage).clamp(0, self.tuning.max_health);
        if self.health == 0 && !self.dead {
            self.dead = true;
            info!("avatar died");
        }
        self.flinch_started = Some(now_ms);
        self.pending_sounds.push(self.assets.scratch_sound.clone());
        info!(damage, health = self.health, "avatar hit");
        true
    }

    /// Draws projectiles first, then the avatar on top.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for projectile in &self.projectiles {
            projectile.render(surface);
        }
        self.render(surface);
    }

    pub fn snapshot(&self) -> AvatarSnapshot {
        AvatarSnapshot {
            position: self.body.position,
            velocity: self.body.velocity,
            facing: self.body.facing,
            action: self.action,
            health: self.health,
            max_health: self.tuning.max_health,
            fuel: self.fuel,
            max_fuel: self.tuning.max_fuel,
            flinching: self.is_flinching(),
            dead: self.dead,
        }
    }

    fn settle(&mut self, contact: Contact) {
        if self.airborne {
            if contact.supported && self.body.velocity.y >= 0.0 {
                self.airborne = false;
                self.jumping = false;
                self.body.velocity.y = 0.0;
            }
        } else if !contact.supported {
            // Walked off a ledge.
            self.airborne = true;
        }
    }

    fn tick_fuel(&mut self) {
        self.fuel = (self.fuel + self.tuning.fuel_regen).min(self.tuning.max_fuel);
        if self.input.jetpack {
            self.fuel -= self.tuning.jet_cost;
        }
        self.fuel = self.fuel.clamp(0, self.tuning.max_fuel);
    }

    fn expire_flinch(&mut self) {
        if let Some(started) = self.flinch_started {
            if self.now_ms.saturating_sub(started) > self.tuning.flinch_window_ms {
                self.flinch_started = None;
            }
        }
    }

    fn try_fire(&mut self) {
        let requested = self.input.fire && !self.input.jetpack;
        if !requested || self.attack == AttackState::Firing {
            return;
        }

        let facing = self.body.facing;
        let origin = Vec2::new(
            self.body.position.x + facing.sign() * self.tuning.muzzle_offset,
            self.body.position.y,
        );
        let id = self.next_projectile_id;
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);

        self.projectiles.push(Projectile::spawn(
            id,
            origin,
            facing,
            &self.projectile_tuning,
            &self.assets.projectile,
            self.tick,
        ));
        self.attack = AttackState::Firing;
        debug!(projectile_id = id, x = origin.x, y = origin.y, "projectile spawned");
    }

    fn advance_projectiles(&mut self, terrain: &dyn CollisionResolver) {
        self.projectiles.retain_mut(|projectile| {
            projectile.update(terrain);
            if projectile.should_remove() {
                debug!(projectile_id = projectile.id(), "projectile removed");
                return false;
            }
            true
        });
    }

    fn next_action(&self) -> Action {
        let dy = self.body.velocity.y;
        if self.attack == AttackState::Firing {
            if dy == 0.0 {
                Action::Firing
            } else {
                Action::AirFiring
            }
        } else if dy > 0.0 {
            if self.input.jetpack && self.fuel > 0 {
                Action::JetpackFalling
            } else {
                Action::Falling
            }
        } else if dy < 0.0 {
            Action::Jumping
        } else if self.input.left || self.input.right {
            Action::Walking
        } else {
            Action::Idle
        }
    }

    fn select_action(&mut self) {
        let next = self.next_action();
        if next != self.action {
            self.action = next;
            self.animation
                .reset(self.assets.sprites.sequence(next), frame_delay(next));
        }
    }

    fn update_facing(&mut self) {
        if self.action == Action::Firing {
            return;
        }
        match (self.input.left, self.input.right) {
            (true, false) => self.body.facing = Facing::Left,
            (false, true) => self.body.facing = Facing::Right,
            _ => {}
        }
    }
}

impl Entity for Avatar {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update_physics(&mut self) {
        let input = self.input;
        let cfg = self.tuning;

        self.body.velocity.x =
            integrate_horizontal(self.body.velocity.x, input.left, input.right, &cfg);

        // Grounded firing pins the avatar in place.
        if self.action == Action::Firing && !self.airborne {
            self.body.velocity.x = 0.0;
        }

        let jump_pressed = input.jump && !self.jump_was_down;
        self.jump_was_down = input.jump;
        if !input.jump {
            self.jumping = false;
        }
        if jump_pressed && !self.airborne {
            self.body.velocity.y = cfg.jump_start;
            self.airborne = true;
            self.jumping = true;
            self.pending_sounds.push(self.assets.jump_sound.clone());
            debug!(x = self.body.position.x, y = self.body.position.y, "jump");
        }

        if self.airborne {
            let step = integrate_airborne(
                self.body.velocity.y,
                self.jumping,
                input.jetpack && self.fuel > 0,
                &cfg,
            );
            self.body.velocity.y = step.dy;
            self.jumping = step.jumping;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if let Some(started) = self.flinch_started {
            let elapsed = self.now_ms.saturating_sub(started);
            if (elapsed / self.tuning.flinch_blink_ms.max(1)) % 2 == 0 {
                return;
            }
        }

        let frame = self.animation.current_frame();
        let x = self.body.position.x - frame.region.width as f32 / 2.0;
        let y = self.body.position.y - frame.region.height as f32 / 2.0;
        surface.blit(frame, x, y, self.body.facing == Facing::Left);
    }
}
