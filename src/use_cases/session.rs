// One play session: the avatar, the hostiles it fights, and the terrain they share.

use std::time::Duration;

use crate::domain::entities::{Avatar, Environment};
use crate::domain::ports::{Clock, CollisionResolver, Hostile, Surface};
use crate::domain::state::InputFlags;
use crate::domain::systems::combat::resolve_combat;
use crate::use_cases::types::{DrawList, FrameUpdate, TickReport};

pub struct Session<H, T, C> {
    avatar: Avatar,
    hostiles: Vec<H>,
    terrain: T,
    clock: C,
    tick_interval: Duration,
    tick: u64,
}

impl<H, T, C> Session<H, T, C>
where
    H: Hostile,
    T: CollisionResolver,
    C: Clock,
{
    pub fn new(
        avatar: Avatar,
        hostiles: Vec<H>,
        terrain: T,
        clock: C,
        tick_interval: Duration,
    ) -> Self {
        Self {
            avatar,
            hostiles,
            terrain,
            clock,
            tick_interval,
            tick: 0,
        }
    }

    /// Advances the session by one tick: avatar update, then combat resolution.
    pub fn step(&mut self, input: InputFlags) -> TickReport {
        self.clock.advance(self.tick_interval);

        self.avatar.update(
            input,
            &Environment {
                terrain: &self.terrain,
                clock: &self.clock,
            },
        );
        let combat = resolve_combat(
            &mut self.avatar,
            &mut self.hostiles,
            self.clock.now_millis(),
        );

        self.tick += 1;
        TickReport {
            tick: self.tick,
            combat,
            sounds: self.avatar.take_sounds(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.avatar.draw(surface);
    }

    pub fn frame(&self) -> FrameUpdate {
        let mut draw = DrawList::default();
        self.draw(&mut draw);

        FrameUpdate {
            tick: self.tick,
            avatar: self.avatar.snapshot(),
            projectiles: self
                .avatar
                .projectiles()
                .iter()
                .map(|p| p.snapshot())
                .collect(),
            draw: draw.commands,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    pub fn hostiles(&self) -> &[H] {
        &self.hostiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::{Action, Rect, Vec2};
    use crate::domain::systems::combat::CombatEvent;
    use crate::domain::tuning::avatar::AvatarTuning;
    use crate::domain::tuning::projectile::ProjectileTuning;
    use crate::test_support::{Dummy, Floor, ManualClock, StaticAssets};

    const TICK: Duration = Duration::from_millis(16);

    fn session(hostiles: Vec<Dummy>) -> Session<Dummy, Floor, ManualClock> {
        let avatar = Avatar::new(
            Vec2::new(100.0, 190.0),
            AvatarTuning::default(),
            ProjectileTuning::default(),
            &StaticAssets::complete(),
            TICK,
        )
        .expect("avatar assets");
        Session::new(avatar, hostiles, Floor { y: 200.0 }, ManualClock::default(), TICK)
    }

    #[test]
    fn when_stepped_then_clock_and_tick_advance() {
        let mut session = session(Vec::new());

        let report = session.step(InputFlags::default());

        assert_eq!(report.tick, 1);
        assert_eq!(session.clock.now_millis(), 16);
        assert_eq!(session.frame().avatar.action, Action::Idle);
    }

    #[test]
    fn when_fired_at_a_hostile_then_it_takes_laser_damage() {
        let target = Dummy::new(Rect::new(150.0, 180.0, 20.0, 20.0), 1);
        let mut session = session(vec![target]);
        let fire = InputFlags {
            fire: true,
            ..InputFlags::default()
        };

        // The first shot connects on tick 7; the follow-up shot is still in flight at tick 15.
        let mut hits = 0;
        for _ in 0..15 {
            let report = session.step(fire);
            hits += report
                .combat
                .iter()
                .filter(|e| matches!(e, CombatEvent::ProjectileHit { .. }))
                .count();
        }

        assert_eq!(hits, 1);
        assert_eq!(session.hostiles()[0].damage_taken, 5);
    }

    #[test]
    fn when_frame_is_taken_then_draw_list_covers_projectiles_and_avatar() {
        let mut session = session(Vec::new());
        session.step(InputFlags {
            fire: true,
            ..InputFlags::default()
        });

        let frame = session.frame();

        assert_eq!(frame.projectiles.len(), 1);
        assert_eq!(frame.draw.len(), 2);
    }
}
