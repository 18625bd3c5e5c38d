use crate::domain::entities::{Avatar, Entity};
use crate::domain::ports::Hostile;
use tracing::info;

/// Outcome of one pairwise check, consumed within the tick that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    ProjectileHit {
        projectile_id: u64,
        hostile: usize,
        damage: i32,
    },
    AvatarStruck {
        hostile: usize,
        damage: i32,
        /// False when the avatar was still flinching.
        applied: bool,
    },
}

/// Resolves projectile and body contact between the avatar and every hostile.
///
/// Naive O(P*H). Each hostile takes at most one projectile per tick: the first
/// traveling projectile in spawn order that overlaps it.
pub fn resolve_combat<H: Hostile>(
    avatar: &mut Avatar,
    hostiles: &mut [H],
    now_ms: u64,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let laser_damage = avatar.laser_damage();

    for (index, hostile) in hostiles.iter_mut().enumerate() {
        let target = hostile.bounding_box();

        for projectile in avatar.projectiles_mut() {
            if !projectile.is_traveling() || !projectile.body().intersects(&target) {
                continue;
            }

            hostile.apply_damage(laser_damage);
            projectile.set_hit();
            info!(
                hostile = index,
                projectile_id = projectile.id(),
                damage = laser_damage,
                "hostile hit"
            );
            events.push(CombatEvent::ProjectileHit {
                projectile_id: projectile.id(),
                hostile: index,
                damage: laser_damage,
            });
            break;
        }

        if avatar.body().intersects(&target) {
            let damage = hostile.damage_output();
            let applied = avatar.hit(damage, now_ms);
            events.push(CombatEvent::AvatarStruck {
                hostile: index,
                damage,
                applied,
            });
        }
    }

    events
}
