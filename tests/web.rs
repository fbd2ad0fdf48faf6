#![cfg(target_arch = "wasm32")]

use checkers::{click, configure, get_state, play_again, reset_keep_turn, start_as_white, tick};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(state: &JsValue, name: &str) -> JsValue {
    Reflect::get(state, &JsValue::from_str(name)).expect("field must exist")
}

fn number(state: &JsValue, name: &str) -> f64 {
    field(state, name).as_f64().expect("field must be numeric")
}

fn fast_config() -> JsValue {
    let config = Object::new();
    Reflect::set(&config, &"starting_player".into(), &JsValue::from(1)).unwrap();
    Reflect::set(&config, &"reveal_delay_ms".into(), &JsValue::from(0)).unwrap();
    config.into()
}

#[wasm_bindgen_test]
fn configure_starts_a_fresh_black_game() {
    let state = configure(fast_config()).unwrap();

    assert_eq!(number(&state, "current_player"), 1.0);
    assert_eq!(number(&state, "black_count"), 12.0);
    assert_eq!(number(&state, "white_count"), 12.0);
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn click_selects_and_moves() {
    configure(fast_config()).unwrap();

    let state = click(2, 1).unwrap();
    assert_eq!(Array::from(&field(&state, "targets")).length(), 2);

    let state = click(3, 2).unwrap();
    assert_eq!(number(&state, "current_player"), 2.0);
    assert!(field(&state, "selected").is_null() || field(&state, "selected").is_undefined());
}

#[wasm_bindgen_test]
fn off_board_click_leaves_state_unchanged() {
    configure(fast_config()).unwrap();
    let before = number(&get_state().unwrap(), "current_player");

    let state = click(9, 9).unwrap();

    assert_eq!(number(&state, "current_player"), before);
}

#[wasm_bindgen_test]
fn reset_controls_choose_who_moves() {
    configure(fast_config()).unwrap();

    let state = start_as_white().unwrap();
    assert_eq!(number(&state, "current_player"), 2.0);

    let state = reset_keep_turn().unwrap();
    assert_eq!(number(&state, "current_player"), 2.0);

    let state = play_again().unwrap();
    assert_eq!(number(&state, "current_player"), 1.0);

    let state = tick().unwrap();
    assert_eq!(field(&state, "winner_visible").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn configure_rejects_unknown_player() {
    let config = Object::new();
    Reflect::set(&config, &"starting_player".into(), &JsValue::from(7)).unwrap();

    assert!(configure(config.into()).is_err());
}

#[wasm_bindgen_test]
fn get_state_reports_current_session() {
    configure(fast_config()).unwrap();
    click(2, 1).unwrap();

    let state = get_state().unwrap();

    assert_eq!(number(&state, "current_player"), 1.0);
    assert_eq!(Array::from(&field(&state, "targets")).length(), 2);
    assert_eq!(number(&field(&state, "selected"), "row"), 2.0);
}
