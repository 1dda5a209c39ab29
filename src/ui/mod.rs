/// UI module exports
pub mod components;
pub mod editors;
pub mod popup;
pub mod save_button;
