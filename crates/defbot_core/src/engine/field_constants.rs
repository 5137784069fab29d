//! Field constants for the standard car-soccer arena
//!
//! Unreal units (uu). Blue defends negative Y, orange defends positive Y.

pub mod field {
    /// Back wall / goal line distance from center
    pub const BACK_WALL_Y: f32 = 5120.0;

    /// Lateral clearing point, just outside the side wall (x = ±4096)
    pub const CLEAR_WALL_X: f32 = 4100.0;

    /// Goal mouth center height
    pub const GOAL_CENTER_Z: f32 = 321.3875;

    /// Resting ball/pad height above the floor
    pub const PAD_Z: f32 = 73.0;
}

pub mod boost {
    /// Boost tank capacity
    pub const MAX: f32 = 100.0;
}

/// Standard 34-pad layout: (x, y, is_large).
///
/// Order is fixed by the arena; pad selection ties resolve by this order.
pub const STANDARD_PADS: [(f32, f32, bool); 34] = [
    (0.0, -4240.0, false),
    (-1792.0, -4184.0, false),
    (1792.0, -4184.0, false),
    (-3072.0, -4096.0, true),
    (3072.0, -4096.0, true),
    (-940.0, -3308.0, false),
    (940.0, -3308.0, false),
    (0.0, -2816.0, false),
    (-3584.0, -2484.0, false),
    (3584.0, -2484.0, false),
    (-1788.0, -2300.0, false),
    (1788.0, -2300.0, false),
    (-2048.0, -1036.0, false),
    (0.0, -1024.0, false),
    (2048.0, -1036.0, false),
    (-3584.0, 0.0, true),
    (-1024.0, 0.0, false),
    (1024.0, 0.0, false),
    (3584.0, 0.0, true),
    (-2048.0, 1036.0, false),
    (0.0, 1024.0, false),
    (2048.0, 1036.0, false),
    (-1788.0, 2300.0, false),
    (1788.0, 2300.0, false),
    (-3584.0, 2484.0, false),
    (3584.0, 2484.0, false),
    (0.0, 2816.0, false),
    (-940.0, 3310.0, false),
    (940.0, 3308.0, false),
    (-3072.0, 4096.0, true),
    (3072.0, 4096.0, true),
    (-1792.0, 4184.0, false),
    (1792.0, 4184.0, false),
    (0.0, 4240.0, false),
];
