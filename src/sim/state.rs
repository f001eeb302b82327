//! Session state and lifecycle
//!
//! One `GameSession` lives for the whole process run. Restarting reinitialises
//! it in place, so the high score and the RNG stream carry over between games.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::ninja::{JumpPhysics, Ninja};
use super::obstacle::Obstacle;
use crate::platform::Timers;
use crate::settings::Settings;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Timers armed, ticks advance the world
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Final numbers shown when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub score: u64,
    pub high_score: u64,
}

impl fmt::Display for GameOverSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game Over!\nScore: {}\nHigh Score: {}",
            self.score, self.high_score
        )
    }
}

/// Notifications for the rendering surface, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    ScoreChanged { score: u64 },
    SpeedIncreased { speed: f32 },
    ObstaclesSpawned { first: u32, second: u32, gap: u32 },
    ObstacleRemoved { id: u32 },
    Collision { obstacle_id: u32 },
    GameOver(GameOverSummary),
    RestartControl { enabled: bool },
    Jumped,
}

/// The restart control's hit region and state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestartButton {
    pub rect: Rect,
    /// Visible and clickable (only while game over)
    pub enabled: bool,
}

/// What a touch/click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResponse {
    Restarted,
    Jumped,
    /// Landed on a disabled restart button, or jump while airborne
    Ignored,
}

/// The whole game: ninja, obstacles, score and lifecycle
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub ninja: Ninja,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Best score this process run (never persisted)
    pub high_score: u64,
    pub obstacle_speed: f32,
    pub phase: GamePhase,
    pub restart_button: RestartButton,
    pub timers: Timers,
    pub(super) rng: Pcg32,
    pub(super) events: Vec<GameEvent>,
    /// Set at game over, cleared on start
    summary: Option<GameOverSummary>,
    next_id: u32,
}

impl GameSession {
    /// Create a session and start the first run
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let seed = settings.seed.unwrap_or_else(rand::random);
        let physics = JumpPhysics {
            gravity: settings.gravity,
            jump_strength: settings.jump_strength,
            ground_y: settings.ground_y,
        };
        let (button_pos, button_size) = settings.restart_button_rect();

        let mut session = Self {
            seed,
            ninja: Ninja::new(settings.ninja_start, settings.ninja_size, physics),
            obstacles: Vec::new(),
            score: 0,
            high_score: 0,
            obstacle_speed: settings.obstacle_start_speed,
            phase: GamePhase::Running,
            restart_button: RestartButton {
                rect: Rect::new(button_pos, button_size),
                enabled: false,
            },
            timers: Timers::new(settings.spawn_period, settings.update_period),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            summary: None,
            next_id: 1,
            settings,
        };

        session.start();
        session
    }

    /// Begin a run (also used for restart)
    pub fn start(&mut self) {
        self.ninja.reset(self.settings.ninja_start);
        self.score = 0;
        self.obstacle_speed = self.settings.obstacle_start_speed;
        self.obstacles.clear();
        self.summary = None;
        self.restart_button.enabled = false;
        self.timers.arm_all();
        self.phase = GamePhase::Running;

        log::info!("Run started (seed {}, high score {})", self.seed, self.high_score);
        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::RestartControl { enabled: false });
    }

    /// End the run; repeated calls are no-ops
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.high_score = self.high_score.max(self.score);
        self.timers.cancel_all();
        self.phase = GamePhase::GameOver;

        let summary = GameOverSummary {
            score: self.score,
            high_score: self.high_score,
        };
        self.summary = Some(summary);
        self.restart_button.enabled = true;

        log::info!("Game over: score {}, high score {}", summary.score, summary.high_score);
        self.events.push(GameEvent::GameOver(summary));
        self.events.push(GameEvent::RestartControl { enabled: true });
    }

    /// Jump input. Accepted in any phase; after game over the impulse is
    /// applied but nothing integrates it until the next start resets the ninja.
    pub fn jump(&mut self) -> bool {
        let jumped = self.ninja.jump();
        if jumped {
            self.events.push(GameEvent::Jumped);
        }
        jumped
    }

    /// Restart input
    pub fn restart(&mut self) {
        self.start();
    }

    /// Route a touch/click at `point` to the restart control or to a jump
    pub fn handle_touch(&mut self, point: Vec2) -> TouchResponse {
        if self.restart_button.rect.contains(point) {
            if self.restart_button.enabled {
                self.restart();
                return TouchResponse::Restarted;
            }
            return TouchResponse::Ignored;
        }

        if self.jump() {
            TouchResponse::Jumped
        } else {
            TouchResponse::Ignored
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score label text
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// The last run's summary, while game over
    pub fn game_over_summary(&self) -> Option<&GameOverSummary> {
        self.summary.as_ref()
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Allocate a new obstacle ID
    pub(super) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
