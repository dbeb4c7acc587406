//! Browser-facing binding. Squares cross this boundary as external numbers (1..=32).

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::{from_external, squares_of, to_external};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::types::GameSnapshot;

/// Reply to a player action. Rule violations set `accepted = false` and
/// carry a reason instead of throwing.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub accepted: bool,
    pub reason: Option<String>,
    pub result: Option<T>,
    pub state: GameSnapshot,
}

#[wasm_bindgen]
pub struct CheckersGame {
    inner: Game,
}

#[wasm_bindgen]
impl CheckersGame {
    /// `config` may be `undefined`/`null`, or `{ black_name, white_name }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CheckersGame, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            inner: Game::new(config),
        })
    }

    pub fn select(&mut self, square: u8) -> Result<JsValue, JsValue> {
        let square = from_external(square as usize).map_err(to_js_error)?;
        let outcome = self
            .inner
            .select(square)
            .map(|destinations| external_squares(squares_of(destinations)));
        self.respond(outcome)
    }

    pub fn move_to(&mut self, square: u8) -> Result<JsValue, JsValue> {
        let square = from_external(square as usize).map_err(to_js_error)?;
        let outcome = self.inner.move_to(square);
        self.respond(outcome)
    }

    pub fn resign(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.inner.resign();
        self.respond(outcome)
    }

    pub fn offer_draw(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.inner.offer_draw();
        self.respond(outcome)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.snapshot())?)
    }

    /// Destinations of the pinned piece as external numbers.
    pub fn legal_destinations(&self) -> Vec<u8> {
        external_squares(squares_of(self.inner.legal_destinations()))
    }

    /// Squares the active player may pick, as external numbers.
    pub fn movable_pieces(&self) -> Vec<u8> {
        let movable = self.inner.movable_pieces(self.inner.turn());
        external_squares(squares_of(movable.available()))
    }
}

impl CheckersGame {
    fn respond<T: Serialize>(&self, outcome: Result<T, GameError>) -> Result<JsValue, JsValue> {
        let (accepted, reason, result) = match outcome {
            Ok(result) => (true, None, Some(result)),
            Err(err) if err.is_recoverable() => (false, Some(err.to_string()), None),
            Err(err) => return Err(to_js_error(err)),
        };
        let response = ActionResponse {
            accepted,
            reason,
            result,
            state: self.inner.snapshot(),
        };
        Ok(serde_wasm_bindgen::to_value(&response)?)
    }
}

fn external_squares(squares: Vec<usize>) -> Vec<u8> {
    squares.into_iter().map(to_external).collect()
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsError::new(&err.to_string()).into()
}
