//! Idle/demo mode - a simple bot that plays the game
//!
//! Jumps when the nearest obstacle ahead is about to reach the ninja, leaving
//! a few ticks of lead so the ninja is already clear when the circles would
//! touch.

use super::state::GameSession;

/// Ticks between take-off and being high enough to clear an obstacle
pub const JUMP_LEAD_TICKS: f32 = 4.0;

/// Whether the bot would jump this tick
pub fn should_jump(session: &GameSession) -> bool {
    if session.is_game_over() || !session.ninja.is_grounded() {
        return false;
    }

    let ninja = session.ninja.bounding_circle();
    let lead = session.obstacle_speed * JUMP_LEAD_TICKS;

    // Nearest obstacle whose centre has not yet passed the ninja's centre
    session
        .obstacles
        .iter()
        .map(|o| o.bounding_circle())
        .filter(|c| c.center.x >= ninja.center.x)
        .map(|c| c.center.x - ninja.center.x - (c.radius + ninja.radius))
        .min_by(|a, b| a.total_cmp(b))
        .is_some_and(|gap| gap <= lead)
}
