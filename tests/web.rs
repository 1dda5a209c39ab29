#![cfg(target_arch = "wasm32")]

// Browser-side checks, run with `wasm-pack test --headless --chrome`

use std::cell::Cell;
use std::rc::Rc;

use job_stash::chrome::ChromePlatform;
use job_stash::config::SAVED_LABEL_RESET;
use job_stash::controller::SaveOutcome;
use job_stash::platform::Clock;
use job_stash::ui::save_button::{SaveButton, SaveButtonAction, SaveLabel, reset_after_delay};
use yew::platform::time::sleep;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_clock_produces_iso_timestamps() {
    let now = ChromePlatform.now();

    assert_eq!(now.len(), 24);
    assert!(now.ends_with('Z'));
    assert_eq!(&now[10..11], "T");
}

#[wasm_bindgen_test]
fn test_exported_canonical_url() {
    assert_eq!(job_stash::canonical_url("https://x.com/a?x=1"), "https://x.com/a");
}

fn dispatcher(button: &Rc<Cell<SaveButton>>) -> impl FnOnce(SaveButtonAction) {
    let button = button.clone();
    move |action| button.set(button.get().apply(action))
}

fn press(button: &Rc<Cell<SaveButton>>, ticket: u32) {
    button.set(button.get().apply(SaveButtonAction::Pressed {
        outcome: SaveOutcome::Saved,
        ticket,
    }));
}

#[wasm_bindgen_test]
async fn test_save_label_reverts_after_delay() {
    let button = Rc::new(Cell::new(SaveButton::default()));
    press(&button, 1);
    assert_eq!(button.get().label, SaveLabel::Saved);

    reset_after_delay(1, dispatcher(&button)).await;

    assert_eq!(button.get().label, SaveLabel::Idle);
}

#[wasm_bindgen_test]
async fn test_second_press_gets_its_full_delay() {
    let button = Rc::new(Cell::new(SaveButton::default()));
    press(&button, 1);

    let first = reset_after_delay(1, dispatcher(&button));
    let second = async {
        sleep(SAVED_LABEL_RESET / 2).await;
        press(&button, 2);
        reset_after_delay(2, dispatcher(&button)).await;
    };
    let check = async {
        // After the first timer fired but before the second one
        sleep(SAVED_LABEL_RESET + SAVED_LABEL_RESET / 4).await;
        assert_eq!(button.get().label, SaveLabel::Saved);
    };
    futures::join!(first, second, check);

    assert_eq!(button.get().label, SaveLabel::Idle);
}
