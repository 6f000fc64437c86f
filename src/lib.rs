//! Shifumi Sourates core crate.
//!
//! Two independent browser pages share this wasm module: a rock-paper-scissors
//! game against the computer (`start_game`) and a searchable, paginated surah
//! browser backed by the public Quran API (`start_catalog`). The game and
//! catalog logic is plain Rust behind renderer traits; the `web` submodules
//! bind it to the DOM.

use wasm_bindgen::prelude::*;

pub mod catalog;
mod dom;
pub mod game;
pub mod logging;
pub mod rng;

pub use catalog::{Catalog, CatalogConfig, CatalogError, Chapter};
pub use game::{Choice, GameEngine, GameSettings, SettingsError, Winner, determine_winner};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::web::start_game(GameSettings::default())
}

/// Start the game with settings given as JSON, e.g. `{"win_target": 3}`.
#[wasm_bindgen]
pub fn start_game_with_settings(json: &str) -> Result<(), JsValue> {
    let settings = GameSettings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    game::web::start_game(settings)
}

#[wasm_bindgen]
pub fn start_catalog() -> Result<(), JsValue> {
    catalog::web::start_catalog(CatalogConfig::default())
}

/// Start the surah browser against custom endpoints, e.g.
/// `{"api_base_url": "http://localhost:8080"}`.
#[wasm_bindgen]
pub fn start_catalog_with_config(json: &str) -> Result<(), JsValue> {
    let config = CatalogConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    catalog::web::start_catalog(config)
}
