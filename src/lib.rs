//! Haibazo core crate.
//!
//! Click the numbered points in ascending order as fast as possible; one
//! out-of-order click ends the round. The rules live in [`game`] as a pure
//! state + reducer, [`controller`] binds them to timers, and the private
//! `web` module renders everything into the page.

use wasm_bindgen::prelude::*;

pub mod controller;
pub mod error;
pub mod game;
mod logging;
mod web;

pub use controller::{GameController, Scheduler};
pub use error::GameError;
pub use game::{Event, GameConfig, GameState, Outcome, OutcomeKind, Phase, Target};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(level);
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount the game into the element with id `container_id` (created under
/// `<body>` when missing) using the default 400px board.
#[wasm_bindgen]
pub fn start_game(container_id: &str) -> Result<(), JsValue> {
    web::mount(container_id, GameConfig::default())?;
    Ok(())
}

/// Like [`start_game`], with a JSON [`GameConfig`]; missing fields take
/// their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(container_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(config_json)?;
    web::mount(container_id, config)?;
    Ok(())
}

/// Unmount the game, releasing its timers and markup. Returns false when
/// nothing was mounted.
#[wasm_bindgen]
pub fn stop_game() -> bool {
    web::unmount()
}

/// Current state as JSON, for debugging from the console.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_snapshot() -> Option<String> {
    web::snapshot().and_then(|state| serde_json::to_string(&state).ok())
}
