use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_time::Instant;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

use crate::config::SessionConfigInput;
use crate::error::{GameError, GameResult};
use crate::game::GameInstance;
use crate::types::{Player, Square};

static SESSION: Lazy<Mutex<GameInstance>> = Lazy::new(|| Mutex::new(GameInstance::default()));

fn session() -> GameResult<MutexGuard<'static, GameInstance>> {
    SESSION.lock().map_err(|_| GameError::SessionUnavailable)
}

fn state_of(game: &GameInstance) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&game.to_game_state()).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Applies a partial `{ starting_player, reveal_delay_ms }` object and starts
/// a fresh game with it.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<JsValue, JsValue> {
    let input: SessionConfigInput = if config.is_undefined() || config.is_null() {
        SessionConfigInput::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|err| GameError::InvalidConfig {
            message: err.to_string(),
        })?
    };
    let config = input.resolve()?;

    let mut game = session()?;
    game.set_config(config);
    game.play_again();
    state_of(&game)
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsValue> {
    let game = session()?;
    state_of(&game)
}

/// Routes a board click. Off-board coordinates are dropped.
#[wasm_bindgen]
pub fn click(row: u8, col: u8) -> Result<JsValue, JsValue> {
    let mut game = session()?;
    match Square::new(row, col) {
        Ok(square) => {
            game.click(square);
        }
        Err(err) => warn!(%err, "click ignored"),
    }
    state_of(&game)
}

/// Polls the delayed winner reveal. The view calls this from a timer after
/// it sees `is_game_over`.
#[wasm_bindgen]
pub fn tick() -> Result<JsValue, JsValue> {
    let mut game = session()?;
    game.announce_if_due(Instant::now());
    state_of(&game)
}

#[wasm_bindgen]
pub fn reveal_delay_ms() -> Result<u32, JsValue> {
    let game = session()?;
    let millis = game.config().reveal_delay.as_millis();
    Ok(u32::try_from(millis).unwrap_or(u32::MAX))
}

#[wasm_bindgen]
pub fn start_as_black() -> Result<JsValue, JsValue> {
    let mut game = session()?;
    game.start_as(Player::Black);
    state_of(&game)
}

#[wasm_bindgen]
pub fn start_as_white() -> Result<JsValue, JsValue> {
    let mut game = session()?;
    game.start_as(Player::White);
    state_of(&game)
}

#[wasm_bindgen]
pub fn reset_keep_turn() -> Result<JsValue, JsValue> {
    let mut game = session()?;
    game.reset_keep_turn();
    state_of(&game)
}

#[wasm_bindgen]
pub fn play_again() -> Result<JsValue, JsValue> {
    let mut game = session()?;
    game.play_again();
    state_of(&game)
}
