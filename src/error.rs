use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that can surface at the crate boundary.
///
/// Gameplay conditions (an empty point count, a wrong click) are not errors;
/// they end up as an [`crate::game::Outcome`] on the state instead.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("a game is already mounted")]
    AlreadyMounted,

    #[cfg(feature = "serde_json")]
    #[error("invalid config json: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn dom(what: impl Into<String>) -> Self {
        GameError::Dom(what.into())
    }
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
