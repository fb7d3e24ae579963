//! Async tasks for the panel firmware.
//!
//! - `buttons`: per-button edge detection and debouncing

pub mod buttons;

pub use buttons::{OUTPUT_TOGGLES, button_task};
