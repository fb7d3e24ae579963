//! Channel configuration: fixed pin assignments and timing constants.
//!
//! The panel drives exactly three channels, each pairing one push button
//! with one output device. The wiring is fixed at build time; there is no
//! dynamic channel registration.

/// Number of channels on the panel.
pub const CHANNEL_COUNT: usize = 3;

/// Motor button input (active low, pulled high).
pub const BUTTON_MOTOR_PIN: u8 = 19;
/// LED button input (active low, pulled high).
pub const BUTTON_LED_PIN: u8 = 20;
/// Laser button input (active low, pulled high).
pub const BUTTON_LASER_PIN: u8 = 21;

/// Motor driver output.
pub const MOTOR_PIN: u8 = 12;
/// LED output.
pub const LED_PIN: u8 = 11;
/// Laser driver output.
pub const LASER_PIN: u8 = 10;

/// Edges closer than this to the last accepted edge are contact bounce.
pub const DEBOUNCE_INTERVAL_US: u64 = 20_000;

/// Sleep between output refresh passes.
pub const REFRESH_INTERVAL_MS: u64 = 100;

/// One button/output pair on the panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChannelId {
    Motor,
    Led,
    Laser,
}

impl ChannelId {
    /// All channels, in output refresh order.
    pub const ALL: [Self; CHANNEL_COUNT] = [Self::Motor, Self::Led, Self::Laser];

    /// Resolve a button GPIO number to its channel.
    ///
    /// Returns `None` for pins that have no channel behind them; edge
    /// events on such pins are ignored.
    pub const fn from_button_pin(pin: u8) -> Option<Self> {
        match pin {
            BUTTON_MOTOR_PIN => Some(Self::Motor),
            BUTTON_LED_PIN => Some(Self::Led),
            BUTTON_LASER_PIN => Some(Self::Laser),
            _ => None,
        }
    }

    /// Button input GPIO for this channel.
    pub const fn button_pin(self) -> u8 {
        match self {
            Self::Motor => BUTTON_MOTOR_PIN,
            Self::Led => BUTTON_LED_PIN,
            Self::Laser => BUTTON_LASER_PIN,
        }
    }

    /// Output GPIO for this channel.
    pub const fn output_pin(self) -> u8 {
        match self {
            Self::Motor => MOTOR_PIN,
            Self::Led => LED_PIN,
            Self::Laser => LASER_PIN,
        }
    }

    /// Slot index into per-channel arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Channel name for log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Motor => "motor",
            Self::Led => "led",
            Self::Laser => "laser",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
