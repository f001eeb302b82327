//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the session timers
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod ninja;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use collision::{Circle, Rect, circles_overlap};
pub use ninja::{JumpPhysics, Ninja};
pub use obstacle::Obstacle;
pub use state::{GameEvent, GameOverSummary, GamePhase, GameSession, RestartButton, TouchResponse};
