/// Gameplay tuning for the player-controlled avatar.
///
/// Keep this separate from runtime configuration (tick rates, asset paths, etc.).
/// Speeds are pixels per tick; accelerations are pixels per tick squared.

#[derive(Debug, Clone, Copy)]
pub struct AvatarTuning {
    /// Horizontal acceleration while a direction is held.
    pub move_speed: f32,

    /// Horizontal speed cap.
    pub max_speed: f32,

    /// Horizontal deceleration with no direction held.
    pub stop_speed: f32,

    /// Base fall acceleration, applied twice per airborne tick.
    pub fall_speed: f32,

    /// Descending speed cap.
    pub max_fall_speed: f32,

    /// Vertical velocity set on jump (negative is up).
    pub jump_start: f32,

    /// Added while rising with the jump input released.
    pub stop_jump_speed: f32,

    /// Collision box in pixels.
    pub collision_width: f32,
    pub collision_height: f32,

    pub max_health: i32,
    pub max_fuel: i32,

    /// Fuel regained every tick.
    pub fuel_regen: i32,

    /// Fuel burned every tick the jetpack is engaged.
    pub jet_cost: i32,

    /// Damage each projectile deals to a hostile.
    pub laser_damage: i32,

    /// Horizontal distance from the avatar center to a freshly spawned projectile.
    pub muzzle_offset: f32,

    /// Damage immunity after being hit, in milliseconds.
    pub flinch_window_ms: u64,

    /// Visibility toggle period while flinching, in milliseconds.
    pub flinch_blink_ms: u64,
}

impl Default for AvatarTuning {
    fn default() -> Self {
        Self {
            move_speed: 0.3,
            max_speed: 1.6,
            stop_speed: 0.4,
            fall_speed: 0.15,
            max_fall_speed: 4.0,
            jump_start: -4.8,
            stop_jump_speed: 0.3,
            collision_width: 20.0,
            collision_height: 20.0,
            max_health: 5,
            max_fuel: 25_000,
            fuel_regen: 5,
            jet_cost: 50,
            laser_damage: 5,
            muzzle_offset: 20.0,
            flinch_window_ms: 1000,
            flinch_blink_ms: 100,
        }
    }
}
