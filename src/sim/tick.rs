//! Timer-driven simulation steps
//!
//! The update tick advances physics and scoring; the spawn tick tops up the
//! obstacle pair. `advance` turns a frame delta into both.

use glam::Vec2;
use rand::Rng;

use super::obstacle::Obstacle;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::MAX_LIVE_OBSTACLES;
use crate::platform::TimerKind;

impl GameSession {
    /// Advance the session clock by one frame and run whatever fired
    pub fn advance(&mut self, dt: f32) {
        for kind in self.timers.advance(dt) {
            // A game over earlier in this frame cancels the rest
            if !self.timers.is_armed(kind) {
                continue;
            }
            match kind {
                TimerKind::Spawn => self.spawn_tick(),
                TimerKind::Update => self.update_tick(),
            }
        }
    }

    /// Spawn an obstacle pair if there is room
    pub fn spawn_tick(&mut self) {
        if self.obstacles.len() >= MAX_LIVE_OBSTACLES {
            return;
        }

        let gap = self
            .rng
            .random_range(self.settings.gap_min..=self.settings.gap_max);
        let x = self.settings.screen_width;
        let y = self.settings.ground_y;
        let size = self.settings.obstacle_size;

        let first = Obstacle::new(self.next_entity_id(), Vec2::new(x, y), size, self.obstacle_speed);
        let second = Obstacle::new(
            self.next_entity_id(),
            Vec2::new(x + gap as f32, y),
            size,
            self.obstacle_speed,
        );

        log::debug!(
            "Spawned obstacles {} and {} (gap {}, speed {})",
            first.id,
            second.id,
            gap,
            self.obstacle_speed
        );
        self.events.push(GameEvent::ObstaclesSpawned {
            first: first.id,
            second: second.id,
            gap,
        });
        self.obstacles.push(first);
        self.obstacles.push(second);
    }

    /// One simulation step: physics, score, difficulty, obstacles
    pub fn update_tick(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.ninja.update();

        self.score += 1;
        self.events.push(GameEvent::ScoreChanged { score: self.score });

        let interval = self.settings.speed_step_interval;
        if interval > 0 && self.score.is_multiple_of(interval) {
            self.obstacle_speed += self.settings.speed_step;
            log::debug!("Score {}: obstacle speed now {}", self.score, self.obstacle_speed);
            self.events.push(GameEvent::SpeedIncreased {
                speed: self.obstacle_speed,
            });
        }

        // Single pass in spawn order: scroll, test, then keep or drop
        let speed = self.obstacle_speed;
        let offscreen_x = self.settings.offscreen_x;
        let ninja = &self.ninja;
        let events = &mut self.events;
        let mut hit = false;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.speed = speed;
            obstacle.update();

            if ninja.collides_with(obstacle) {
                hit = true;
                events.push(GameEvent::Collision {
                    obstacle_id: obstacle.id,
                });
            }

            if obstacle.is_offscreen(offscreen_x) {
                log::trace!("Obstacle {} left the screen", obstacle.id);
                events.push(GameEvent::ObstacleRemoved { id: obstacle.id });
                false
            } else {
                true
            }
        });

        if hit {
            self.game_over();
        }
    }
}
