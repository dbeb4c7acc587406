#![cfg(target_arch = "wasm32")]

use draughts::wasm::CheckersGame;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn default_config_names_players() {
    let game = CheckersGame::new(JsValue::UNDEFINED).unwrap();
    let state = game.state().unwrap();

    assert_eq!(field(&state, "black_name").as_string().as_deref(), Some("Peter"));
    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("black"));
    assert_eq!(game.movable_pieces(), vec![9, 10, 11, 12]);
}

#[wasm_bindgen_test]
fn accepted_move_passes_turn() {
    let mut game = CheckersGame::new(JsValue::NULL).unwrap();

    let picked = game.select(9).unwrap();
    assert_eq!(field(&picked, "accepted").as_bool(), Some(true));
    assert_eq!(game.legal_destinations(), vec![13, 14]);

    let moved = game.move_to(14).unwrap();
    let state = field(&moved, "state");
    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("white"));
}

#[wasm_bindgen_test]
fn rule_violation_returns_reason() {
    let mut game = CheckersGame::new(JsValue::UNDEFINED).unwrap();

    let response = game.select(15).unwrap();

    assert_eq!(field(&response, "accepted").as_bool(), Some(false));
    assert_eq!(
        field(&response, "reason").as_string().as_deref(),
        Some("square 15 is empty")
    );
}

#[wasm_bindgen_test]
fn out_of_range_square_throws() {
    let mut game = CheckersGame::new(JsValue::UNDEFINED).unwrap();

    assert!(game.select(33).is_err());
    assert!(game.move_to(0).is_err());
}
