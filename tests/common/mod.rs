#![allow(dead_code)]

use giftbox_assistant::domain::Catalog;
use giftbox_assistant::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Catalog::reference())
}

pub fn create_state_with(catalog: Catalog) -> AppState {
    AppState::new(catalog)
}
