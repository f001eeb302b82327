//! Ninja Run - A side-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `platform`: Surface-facing abstractions (tick timers)
//! - `settings`: Data-driven game tuning

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameEvent, GamePhase, GameSession};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Update timer period (60 Hz)
    pub const UPDATE_PERIOD: f32 = 1.0 / 60.0;
    /// Spawn timer period
    pub const SPAWN_PERIOD: f32 = 2.0;
    /// Maximum fires per timer per advance to prevent spiral of death
    pub const MAX_FIRES_PER_ADVANCE: u32 = 8;
    /// Largest frame delta the clock will accept in one advance
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Default surface dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ground line - nothing rests below this y
    pub const GROUND_Y: f32 = 100.0;
    /// Vertical acceleration (units/tick²)
    pub const GRAVITY: f32 = -1.0;
    /// Jump impulse (units/tick)
    pub const JUMP_STRENGTH: f32 = 15.0;

    /// Ninja defaults
    pub const NINJA_START: Vec2 = Vec2::new(50.0, 120.0);
    pub const NINJA_SIZE: f32 = 70.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 40.0;
    pub const OBSTACLE_START_SPEED: f32 = 5.0;
    /// Obstacles are dropped once their x falls below this
    pub const OFFSCREEN_X: f32 = -40.0;
    /// Obstacles spawn in pairs, and only when fewer than this many are live
    pub const MAX_LIVE_OBSTACLES: usize = 2;

    /// Difficulty ramp: speed added every `SPEED_STEP_INTERVAL` points
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_STEP_INTERVAL: u64 = 100;

    /// Horizontal gap between the two obstacles of a pair (inclusive)
    pub const GAP_MIN: u32 = 150;
    pub const GAP_MAX: u32 = 250;

    /// Restart button layout, relative to the screen centre
    pub const RESTART_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);
    pub const RESTART_BUTTON_OFFSET: Vec2 = Vec2::new(-50.0, -70.0);
}

/// Centre of an axis-aligned box given its bottom-left corner and size
#[inline]
pub fn box_center(pos: Vec2, size: Vec2) -> Vec2 {
    pos + size * 0.5
}
