/// Job Stash - Chrome Extension for saving and tracking job posts
/// Built with Rust + WASM + Yew

pub mod canonical;
pub mod capture;
pub mod chrome;
pub mod config;
pub mod controller;
pub mod error;
pub mod operations;
pub mod platform;
pub mod record;
pub mod storage;
pub mod view;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::chrome::ChromePlatform;
use crate::record::ActiveTab;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL canonicalization for JavaScript access
#[wasm_bindgen]
pub fn canonical_url(url: &str) -> String {
    canonical::canonical_url(url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Toolbar button handler, called from the background service worker
#[wasm_bindgen]
pub async fn on_action_clicked(tab: JsValue) {
    let tab: ActiveTab = match serde_wasm_bindgen::from_value(tab) {
        Ok(tab) => tab,
        Err(e) => {
            log::warn!("Ignoring click with unreadable tab: {:?}", e);
            ActiveTab::default()
        }
    };
    capture::capture_tab(&ChromePlatform, &tab).await;
}
