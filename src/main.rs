//! Three-button toggle control panel for the Raspberry Pi Pico (RP2040).
//!
//! Each panel button toggles one driven device on a clean press: the
//! motor, the LED, or the laser. Edge detection and debouncing run in
//! per-button tasks; a fixed-cadence refresh loop mirrors the logical
//! on/off state onto the output pins.
//!
//! # Wiring
//!
//! - Motor: button GPIO 19 (pull-up, active low), output GPIO 12
//! - LED: button GPIO 20 (pull-up, active low), output GPIO 11
//! - Laser: button GPIO 21 (pull-up, active low), output GPIO 10

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

// Embedded-only modules (the library holds the host-testable logic)
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
mod app {
    use defmt::info;
    use embassy_executor::Spawner;
    use embassy_rp::gpio::{Input, Level, Output, Pull};
    use embassy_time::Timer;
    use {defmt_rtt as _, panic_probe as _};

    use toggle_panel::config::{
        BUTTON_LASER_PIN, BUTTON_LED_PIN, BUTTON_MOTOR_PIN, ChannelId, REFRESH_INTERVAL_MS,
    };

    use crate::tasks::{OUTPUT_TOGGLES, button_task};

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"toggle-panel"),
        embassy_rp::binary_info::rp_program_description!(
            c"Three-button toggle control panel for motor, LED and laser"
        ),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Toggle panel starting...");

        let p = embassy_rp::init(Default::default());

        // Buttons are active-low with the internal pull-up enabled;
        // pressing one pulls its pin to ground.
        let btn_motor = Input::new(p.PIN_19, Pull::Up);
        let btn_led = Input::new(p.PIN_20, Pull::Up);
        let btn_laser = Input::new(p.PIN_21, Pull::Up);

        // All driven devices start off.
        let motor = Output::new(p.PIN_12, Level::Low);
        let led = Output::new(p.PIN_11, Level::Low);
        let laser = Output::new(p.PIN_10, Level::Low);

        spawner.spawn(button_task(btn_motor, BUTTON_MOTOR_PIN)).unwrap();
        spawner.spawn(button_task(btn_led, BUTTON_LED_PIN)).unwrap();
        spawner.spawn(button_task(btn_laser, BUTTON_LASER_PIN)).unwrap();
        info!("Button tasks spawned");

        // Order matches ChannelId::ALL.
        let mut outputs = [motor, led, laser];

        // Refresh loop: keep the physical outputs matched to the published
        // toggle state. A toggle shows up on the pin within one cycle.
        loop {
            Timer::after_millis(REFRESH_INTERVAL_MS).await;
            for (channel, output) in ChannelId::ALL.iter().zip(outputs.iter_mut()) {
                if OUTPUT_TOGGLES.get(*channel) {
                    output.set_high();
                } else {
                    output.set_low();
                }
            }
        }
    }
}

// Host builds only compile the library; the firmware entry point is ARM-only.
#[cfg(not(target_arch = "arm"))]
fn main() {}
