use crate::domain::tuning::avatar::AvatarTuning;

/// Fraction of the jump impulse the jetpack applies against a descent.
const JETPACK_THRUST_FACTOR: f32 = 0.7;

/// Accelerates toward the held direction, otherwise decelerates toward zero without
/// overshooting. Holding both directions counts as holding neither.
pub fn integrate_horizontal(dx: f32, left: bool, right: bool, cfg: &AvatarTuning) -> f32 {
    match (left, right) {
        (true, false) => (dx - cfg.move_speed).max(-cfg.max_speed),
        (false, true) => (dx + cfg.move_speed).min(cfg.max_speed),
        _ => {
            if dx > 0.0 {
                (dx - cfg.stop_speed).max(0.0)
            } else if dx < 0.0 {
                (dx + cfg.stop_speed).min(0.0)
            } else {
                0.0
            }
        }
    }
}

/// Result of one airborne vertical step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub dy: f32,
    /// Still rising from a jump whose input is held.
    pub jumping: bool,
}

/// Integrates vertical velocity while airborne (jump and fall share this phase).
///
/// The base fall term is always added a second time, including after the jetpack
/// term; the resulting tuning depends on it.
pub fn integrate_airborne(
    dy: f32,
    jumping: bool,
    jetpack_ready: bool,
    cfg: &AvatarTuning,
) -> VerticalStep {
    let mut dy = dy;
    let mut jumping = jumping;

    if dy > 0.0 && jetpack_ready {
        dy += cfg.jump_start * JETPACK_THRUST_FACTOR;
    } else {
        dy += cfg.fall_speed;
    }
    dy += cfg.fall_speed;

    if dy >= 0.0 {
        jumping = false;
    }
    if dy < 0.0 && !jumping {
        dy += cfg.stop_jump_speed;
    }

    VerticalStep {
        dy: dy.min(cfg.max_fall_speed),
        jumping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn when_right_is_held_then_speed_is_capped_at_max() {
        let cfg = AvatarTuning::default();
        let mut dx = 0.0;

        for _ in 0..20 {
            dx = integrate_horizontal(dx, false, true, &cfg);
        }

        assert!((dx - cfg.max_speed).abs() < EPS);
    }

    #[test]
    fn when_left_is_held_then_velocity_accelerates_negative() {
        let cfg = AvatarTuning::default();

        let dx = integrate_horizontal(0.0, true, false, &cfg);

        assert!((dx + cfg.move_speed).abs() < EPS);
    }

    #[test]
    fn when_released_then_deceleration_stops_exactly_at_zero() {
        let cfg = AvatarTuning::default();

        assert_eq!(integrate_horizontal(0.1, false, false, &cfg), 0.0);
        assert_eq!(integrate_horizontal(-0.1, false, false, &cfg), 0.0);
        assert!((integrate_horizontal(1.0, false, false, &cfg) - 0.6).abs() < EPS);
    }

    #[test]
    fn when_both_directions_are_held_then_it_decelerates() {
        let cfg = AvatarTuning::default();

        let dx = integrate_horizontal(1.6, true, true, &cfg);

        assert!((dx - 1.2).abs() < EPS);
    }

    #[test]
    fn when_rising_with_jump_held_then_only_fall_terms_apply() {
        let cfg = AvatarTuning::default();

        let step = integrate_airborne(cfg.jump_start, true, false, &cfg);

        assert!((step.dy - (cfg.jump_start + 2.0 * cfg.fall_speed)).abs() < EPS);
        assert!(step.jumping);
    }

    #[test]
    fn when_rising_with_jump_released_then_stop_jump_term_is_added() {
        let cfg = AvatarTuning::default();

        let step = integrate_airborne(-2.0, false, false, &cfg);

        assert!((step.dy - (-2.0 + 0.3 + 0.3)).abs() < EPS);
    }

    #[test]
    fn when_descending_then_jumping_flag_clears() {
        let cfg = AvatarTuning::default();

        let step = integrate_airborne(0.5, true, false, &cfg);

        assert!(!step.jumping);
        assert!((step.dy - 0.8).abs() < EPS);
    }

    #[test]
    fn when_descending_with_jetpack_then_thrust_replaces_first_fall_term_only() {
        let cfg = AvatarTuning::default();

        let step = integrate_airborne(1.0, false, true, &cfg);

        // 1.0 - 3.36 + 0.15 = -2.21, then the stop-jump term because it now rises.
        let expected = 1.0 + cfg.jump_start * 0.7 + cfg.fall_speed + cfg.stop_jump_speed;
        assert!((step.dy - expected).abs() < EPS);
    }

    #[test]
    fn when_falling_fast_then_descent_is_clamped() {
        let cfg = AvatarTuning::default();

        let step = integrate_airborne(3.9, false, false, &cfg);

        assert_eq!(step.dy, cfg.max_fall_speed);
    }
}
