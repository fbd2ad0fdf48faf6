use serde::Deserialize;
use web_time::Duration;

use crate::error::GameResult;
use crate::types::Player;

const DEFAULT_REVEAL_DELAY_MS: u32 = 500;

/// Session settings chosen by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub starting_player: Player,
    /// Time between the game ending and the winner banner becoming visible.
    pub reveal_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_player: Player::Black,
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS as u64),
        }
    }
}

/// Partial config as sent from JS. Missing fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfigInput {
    pub starting_player: Option<u8>,
    pub reveal_delay_ms: Option<u32>,
}

impl SessionConfigInput {
    pub fn resolve(self) -> GameResult<SessionConfig> {
        let defaults = SessionConfig::default();
        let starting_player = match self.starting_player {
            Some(code) => Player::from_u8(code)?,
            None => defaults.starting_player,
        };
        let reveal_delay = self
            .reveal_delay_ms
            .map_or(defaults.reveal_delay, |ms| Duration::from_millis(ms as u64));

        Ok(SessionConfig {
            starting_player,
            reveal_delay,
        })
    }
}
