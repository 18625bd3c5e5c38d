// Short-lived avatar projectile: Traveling -> Hit -> Done, never backwards.

use std::time::Duration;

use tracing::debug;

use crate::domain::animation::{Animation, FrameDelay, Region, Sequence};
use crate::domain::entities::body::{Body, Entity};
use crate::domain::errors::AssetError;
use crate::domain::ports::{AssetSource, CollisionResolver, Surface};
use crate::domain::state::{Facing, ProjectilePhase, ProjectileSnapshot, Size, Vec2};
use crate::domain::tuning::projectile::ProjectileTuning;

pub const PROJECTILE_SHEET: &str = "/Sprites/Player/space2.png";
const TRAVEL_REGION: Region = Region::new(128, 0, 27, 34);
const IMPACT_REGION: Region = Region::new(128, 0, 27, 34);

/// Frame sequences shared by every projectile an avatar fires.
#[derive(Debug, Clone)]
pub struct ProjectileSprites {
    pub travel: Sequence,
    pub impact: Sequence,
}

impl ProjectileSprites {
    pub fn load(assets: &dyn AssetSource) -> Result<Self, AssetError> {
        let travel = Sequence::new(
            "projectile_travel",
            vec![assets.sprite(PROJECTILE_SHEET, TRAVEL_REGION)?],
        )?;
        let impact = Sequence::new(
            "projectile_impact",
            vec![assets.sprite(PROJECTILE_SHEET, IMPACT_REGION)?],
        )?;
        Ok(Self { travel, impact })
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    id: u64,
    body: Body,
    phase: ProjectilePhase,
    animation: Animation,
    impact: Sequence,
    impact_delay: FrameDelay,
}

impl Projectile {
    pub fn spawn(
        id: u64,
        position: Vec2,
        facing: Facing,
        tuning: &ProjectileTuning,
        sprites: &ProjectileSprites,
        tick: Duration,
    ) -> Self {
        let mut body = Body::new(
            position,
            Size::new(tuning.collision_width, tuning.collision_height),
            facing,
        );
        body.velocity = Vec2::new(facing.sign() * tuning.speed, 0.0);

        Self {
            id,
            body,
            phase: ProjectilePhase::Traveling,
            animation: Animation::new(
                sprites.travel.clone(),
                FrameDelay::Millis(tuning.travel_delay_ms),
                tick,
            ),
            impact: sprites.impact.clone(),
            impact_delay: FrameDelay::Millis(tuning.impact_delay_ms),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phase(&self) -> ProjectilePhase {
        self.phase
    }

    pub fn is_traveling(&self) -> bool {
        self.phase == ProjectilePhase::Traveling
    }

    pub fn has_hit(&self) -> bool {
        self.phase != ProjectilePhase::Traveling
    }

    pub fn should_remove(&self) -> bool {
        self.phase == ProjectilePhase::Done
    }

    /// Moves a traveling projectile to Hit. Any other phase is left untouched.
    pub fn set_hit(&mut self) -> bool {
        if self.phase != ProjectilePhase::Traveling {
            return false;
        }
        self.phase = ProjectilePhase::Hit;
        self.body.velocity = Vec2::ZERO;
        self.animation.reset(self.impact.clone(), self.impact_delay);
        debug!(projectile_id = self.id, x = self.body.position.x, "projectile hit");
        true
    }

    /// Advances one tick: terrain, the stalled-velocity safety transition, then the timer.
    pub fn update(&mut self, terrain: &dyn CollisionResolver) {
        if self.phase == ProjectilePhase::Done {
            return;
        }

        self.update_physics();
        if self.is_traveling() {
            self.resolve_collision(terrain);
            if self.body.velocity.x == 0.0 {
                self.set_hit();
            }
        }

        self.animation.update();
        if self.phase == ProjectilePhase::Hit && self.animation.has_played_once() {
            self.phase = ProjectilePhase::Done;
        }
    }

    pub fn snapshot(&self) -> ProjectileSnapshot {
        ProjectileSnapshot {
            id: self.id,
            position: self.body.position,
            velocity: self.body.velocity,
            phase: self.phase,
        }
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update_physics(&mut self) {
        // Constant velocity while traveling; pinned at rest afterwards.
        if !self.is_traveling() {
            self.body.velocity = Vec2::ZERO;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.should_remove() {
            return;
        }
        let frame = self.animation.current_frame();
        let x = self.body.position.x - frame.region.width as f32 / 2.0;
        let y = self.body.position.y - frame.region.height as f32 / 2.0;
        surface.blit(frame, x, y, self.body.facing == Facing::Left);
    }
}
