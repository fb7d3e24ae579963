//! Button edge-detection tasks.
//!
//! One task instance per panel button. Each instance owns its channel's
//! debounce state exclusively and publishes only the resulting toggle
//! state, so every shared slot has a single writer and the refresh loop
//! a read-only view.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use toggle_panel::button::{ButtonState, EdgeMask};
use toggle_panel::config::ChannelId;
use toggle_panel::output::OutputStates;

/// Logical on/off state per channel, written by the button tasks and read
/// by the refresh loop in `main`.
pub static OUTPUT_TOGGLES: OutputStates = OutputStates::new();

/// Edge-detection task for one button.
///
/// Wakes on every raw edge of the input pin, timestamps the event, and
/// runs it through the channel's debounce state machine. An accepted
/// clean press flips the channel's published toggle state.
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut input: Input<'static>, button_pin: u8) {
    // Pins without a channel behind them are ignored.
    let Some(channel) = ChannelId::from_button_pin(button_pin) else {
        return;
    };
    info!("Button task started: {} (GPIO {})", channel.name(), button_pin);

    let mut state = ButtonState::new();
    loop {
        input.wait_for_any_edge().await;
        let timestamp_us = Instant::now().as_micros();
        // The interrupt only tells us an edge fired; recover the
        // direction(s) from the level the pin settled at.
        let mask = EdgeMask::infer(input.is_low(), state.is_pressed());
        if state.on_edge(mask, timestamp_us) {
            OUTPUT_TOGGLES.set(channel, state.is_toggled());
            info!(
                "{} toggled {}",
                channel.name(),
                if state.is_toggled() { "on" } else { "off" }
            );
        }
    }
}
