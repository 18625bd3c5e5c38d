// Domain-level geometry, input, and snapshot types shared by entities and systems.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Raw per-tick input flags from the driver. Contradictory combinations are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub jetpack: bool,
    pub fire: bool,
}

/// Mutually exclusive locomotion/attack tag; also selects the animation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Walking,
    Jumping,
    Falling,
    JetpackFalling,
    Firing,
    AirFiring,
}

impl Action {
    pub fn is_firing(self) -> bool {
        matches!(self, Action::Firing | Action::AirFiring)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Walking => "walking",
            Action::Jumping => "jumping",
            Action::Falling => "falling",
            Action::JetpackFalling => "jetpack_falling",
            Action::Firing => "firing",
            Action::AirFiring => "air_firing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectilePhase {
    Traveling,
    Hit,
    Done,
}

impl ProjectilePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectilePhase::Traveling => "traveling",
            ProjectilePhase::Hit => "hit",
            ProjectilePhase::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AvatarSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    pub action: Action,
    pub health: i32,
    pub max_health: i32,
    pub fuel: i32,
    pub max_fuel: i32,
    pub flinching: bool,
    pub dead: bool,
}

#[derive(Debug, Clone)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub phase: ProjectilePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_rects_only_share_an_edge_then_they_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn when_rects_overlap_then_intersection_is_symmetric() {
        let a = Rect::centered(Vec2::new(5.0, 5.0), Size::new(10.0, 10.0));
        let b = Rect::centered(Vec2::new(12.0, 8.0), Size::new(10.0, 10.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn when_centered_then_origin_is_offset_by_half_size() {
        let r = Rect::centered(Vec2::new(100.0, 50.0), Size::new(20.0, 14.0));

        assert_eq!(r, Rect::new(90.0, 43.0, 20.0, 14.0));
    }
}
