use wasm_bindgen::prelude::*;

pub mod config;
pub mod enemy;
pub mod error;
pub mod events;
mod game;
pub mod normalize;
pub mod phase;
pub mod progression;
pub mod resolver;
pub mod snapshot;
pub mod spawn;
pub mod words;

pub use game::TyperShark;

typer_web::export_game!(TyperShark, "typer-shark");

/// Replace the session configuration (JSON). Only accepted between runs.
#[wasm_bindgen]
pub fn game_configure(json: &str) -> bool {
    with_runner(|r| match r.game_mut().configure(json) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("configuration rejected: {}", err);
            false
        }
    })
}

/// Replace the word bank (JSON with `easy`, `medium`, `hard` arrays). Only
/// accepted between runs.
#[wasm_bindgen]
pub fn game_load_words(json: &str) -> bool {
    with_runner(|r| match r.game_mut().load_words(json) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("word bank rejected: {}", err);
            false
        }
    })
}
