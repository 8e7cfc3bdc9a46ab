#![cfg(target_arch = "wasm32")]

use relicquest_web::game::{
    PlayerProfile, ProgressRecord, ProgressStorage, WebProgressStorage, GAME_RECORD_KEY,
};
use relicquest_web::{dom, game};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn progress_round_trips_through_local_storage() {
    let storage = WebProgressStorage;
    let record = ProgressRecord {
        player_id: Some(String::from("wasm-1")),
        player_name: Some(String::from("Browser Tester")),
        history: vec![String::from("success"), String::from("failure")],
    };
    storage.save_progress(&record).unwrap();
    assert_eq!(storage.load_progress(), record);
}

#[wasm_bindgen_test]
fn corrupted_record_degrades_to_empty_history() {
    let storage = WebProgressStorage;
    let raw = dom::local_storage().unwrap();
    raw.set_item(GAME_RECORD_KEY, "{definitely not json").unwrap();

    let loaded = storage.load_progress();
    assert!(loaded.history.is_empty());
}

#[wasm_bindgen_test]
fn recording_an_outcome_appends_one_label() {
    let engine = game::create_web_game_engine();
    let raw = dom::local_storage().unwrap();
    raw.remove_item(GAME_RECORD_KEY).unwrap();

    let profile = PlayerProfile {
        id: String::from("wasm-2"),
        name: String::from("Second Tester"),
    };
    engine.record_outcome(&profile, game::SUCCESS_LABEL).unwrap();
    engine.record_outcome(&profile, game::FAILURE_LABEL).unwrap();

    let loaded = engine.load_progress();
    assert_eq!(loaded.history.len(), 2);
}
