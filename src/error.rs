//! Error types for the WASM boundary.
//!
//! The rules engine itself is total: illegal clicks are no-ops, not errors.
//! These variants only describe input that JS hands us and that cannot be
//! turned into engine values.

use wasm_bindgen::JsValue;

/// Errors that can occur while decoding calls from the view layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinates outside the 8x8 board
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    /// Player code other than 1 (black) or 2 (white)
    #[error("unknown player code: {0}")]
    UnknownPlayer(u8),

    /// The session lock was poisoned by an earlier panic
    #[error("game session is unavailable")]
    SessionUnavailable,

    /// Config object from JS could not be decoded
    #[error("invalid session config: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for boundary operations
pub type GameResult<T> = Result<T, GameError>;

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
