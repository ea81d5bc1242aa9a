//! Data-driven game balance
//!
//! Defaults match the classic values. A `kuzushi-tuning.json` file in the
//! working directory overrides any subset of them; a malformed file is
//! ignored with a warning rather than stopping the game.

use serde::{Deserialize, Serialize};

/// Balance values for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Paddle speed while a directional key is held (px/sec)
    pub paddle_speed: f32,
    /// Serve speed per axis (px/sec); the serve vector is (speed, -speed)
    pub ball_speed: f32,
    /// Points awarded per destroyed brick
    pub brick_points: u32,
    /// Per-level score that arms a level-up; 0 disables the threshold
    pub level_up_score: u32,
    /// Lives at the start of a run
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: 1200.0,
            ball_speed: 600.0,
            brick_points: 10,
            level_up_score: 200,
            starting_lives: 3,
        }
    }
}

impl Tuning {
    /// Override file, looked up in the working directory
    pub const FILE_NAME: &'static str = "kuzushi-tuning.json";

    /// Load tuning from the override file, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", Self::FILE_NAME);
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::FILE_NAME);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}
