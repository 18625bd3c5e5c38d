/// Gameplay tuning for avatar projectiles.

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Horizontal speed in pixels per tick, signed by facing at spawn.
    pub speed: f32,

    /// Collision box in pixels.
    pub collision_width: f32,
    pub collision_height: f32,

    /// Frame delay while traveling, in milliseconds.
    pub travel_delay_ms: u64,

    /// Frame delay of the impact sequence, in milliseconds.
    pub impact_delay_ms: u64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 3.8,
            collision_width: 14.0,
            collision_height: 14.0,
            travel_delay_ms: 70,
            impact_delay_ms: 70,
        }
    }
}
