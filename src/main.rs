//! Ninja Run headless entry point
//!
//! Runs autopiloted games against the simulation core and reports the scores.
//! Usage: `ninja-run [settings.json]`

use std::path::Path;

use ninja_run::sim::{GameEvent, GameSession, autopilot};
use ninja_run::Settings;

/// Games to play before exiting
const DEMO_GAMES: u32 = 3;
/// Safety cap on frames per game (10 minutes at 60 Hz)
const MAX_FRAMES_PER_GAME: u32 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Ninja Run (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let frame_dt = settings.update_period;

    let mut session = GameSession::new(settings);
    log::info!("Session seed {}", session.seed);

    for game in 1..=DEMO_GAMES {
        let mut frames = 0;
        let mut finished = false;

        while !finished && frames < MAX_FRAMES_PER_GAME {
            if autopilot::should_jump(&session) {
                session.jump();
            }
            session.advance(frame_dt);
            frames += 1;

            for event in session.drain_events() {
                match event {
                    GameEvent::GameOver(summary) => {
                        println!("Game {game}: {summary}");
                        finished = true;
                    }
                    GameEvent::SpeedIncreased { speed } => {
                        log::debug!("Game {game}: speed {speed}");
                    }
                    _ => {}
                }
            }
        }

        if !finished {
            log::warn!("Game {game} hit the frame cap at score {}", session.score);
            session.game_over();
            if let Some(summary) = session.game_over_summary() {
                println!("Game {game}: {summary}");
            }
            session.drain_events();
        }
        session.restart();
    }

    println!("High score: {}", session.high_score);
}
