//! Browser-side tests for the storage and toast bindings
//!
//! Run with `wasm-pack test --headless --chrome wasm`; compiles to nothing
//! on native targets.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use shared::store::{BestScoreStore, BEST_SCORE_KEY};
use v60_brew_trainer_wasm::{notify, LocalStorageStore, TOAST_EVENT};

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn clear_best() {
    local_storage().remove_item(BEST_SCORE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn load_is_none_when_unset() {
    clear_best();
    let store = LocalStorageStore::new();
    assert_eq!(store.load(), None);
}

#[wasm_bindgen_test]
fn commit_round_trips_through_local_storage() {
    clear_best();
    let mut store = LocalStorageStore::new();
    assert_eq!(store.commit(480).unwrap(), 480);
    assert_eq!(store.commit(300).unwrap(), 480);

    // a fresh handle sees the persisted value
    let fresh = LocalStorageStore::new();
    assert_eq!(fresh.load(), Some(480));
    clear_best();
}

#[wasm_bindgen_test]
fn garbage_in_storage_reads_as_absent() {
    local_storage().set_item(BEST_SCORE_KEY, "not a number").unwrap();
    let store = LocalStorageStore::new();
    assert_eq!(store.load(), None);
    clear_best();
}

#[wasm_bindgen_test]
fn notify_dispatches_toast_event() {
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    let listener = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(
        move |event: web_sys::CustomEvent| {
            *sink.borrow_mut() = event.detail().as_string();
        },
    );

    let window = web_sys::window().unwrap();
    window
        .add_event_listener_with_callback(TOAST_EVENT, listener.as_ref().unchecked_ref())
        .unwrap();
    notify("Saved!");
    window
        .remove_event_listener_with_callback(TOAST_EVENT, listener.as_ref().unchecked_ref())
        .unwrap();

    assert_eq!(seen.borrow().as_deref(), Some("Saved!"));
}
