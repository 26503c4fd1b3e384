//! Browser bindings.
//!
//! Exposes the game to JavaScript with the session kept in
//! `localStorage`. Results cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::core::{GameConfig, Move};
use crate::game::{Game, Tick, UniformComputer};
use crate::session::LocalStorageSlot;

#[wasm_bindgen]
pub struct WasmGame(Game<LocalStorageSlot, UniformComputer>);

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame(Game::from_config(GameConfig::default(), LocalStorageSlot::new()))
    }

    /// Submit a move by name. Returns the countdown ticks as a JSON
    /// array of `{"label","delay_ms"}`; call `reveal` after the last one.
    #[wasm_bindgen]
    pub fn choose(&mut self, name: &str) -> Result<String, JsValue> {
        let player_move: Move = name.parse().map_err(to_js)?;
        let countdown = self.0.choose(player_move).map_err(to_js)?;
        let ticks: Vec<Tick> = countdown.collect();
        serde_json::to_string(&ticks).map_err(to_js)
    }

    /// Reveal the pending round. Returns the round as JSON.
    #[wasm_bindgen]
    pub fn reveal(&mut self) -> Result<String, JsValue> {
        let round = self.0.reveal().map_err(to_js)?;
        serde_json::to_string(&round).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn play_again(&mut self) -> Result<(), JsValue> {
        self.0.play_again().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn reset_score(&mut self) -> Result<(), JsValue> {
        self.0.reset_score().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn toggle_sound(&mut self) -> bool {
        self.0.toggle_sound()
    }

    /// Returns the new theme attribute (`"dark"` or `"light"`).
    #[wasm_bindgen]
    pub fn toggle_theme(&mut self) -> String {
        self.0.toggle_theme().attribute().to_string()
    }

    /// Current render snapshot as JSON. `highlight_ms` says how long to
    /// keep the winning side highlighted.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.0.view()).map_err(to_js)
    }

    /// Cue asset names emitted since the last call, as a JSON array.
    #[wasm_bindgen]
    pub fn drain_cues(&mut self) -> Result<String, JsValue> {
        let cues: Vec<&str> = self.0.drain_cues().into_iter().map(|c| c.asset()).collect();
        serde_json::to_string(&cues).map_err(to_js)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
