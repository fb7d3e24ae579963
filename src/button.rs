//! Debounce and edge detection for the panel buttons.
//!
//! Converts noisy raw pin transitions into a single reliable toggle per
//! clean press. Edges of either polarity that land within the debounce
//! window of the last accepted edge are dropped entirely - they do not
//! re-arm the window, so a bounce burst is measured from its first edge.

use crate::config::DEBOUNCE_INTERVAL_US;

/// Set of edge directions reported by one pin event.
///
/// The hardware may coalesce closely spaced transitions, so a single event
/// can carry both a falling and a rising edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EdgeMask(u8);

impl EdgeMask {
    /// High-to-low transition (button press on active-low wiring).
    pub const FALLING: Self = Self(1 << 0);
    /// Low-to-high transition (button release).
    pub const RISING: Self = Self(1 << 1);

    /// True if any direction in `other` is present in this mask.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Reconstruct the event mask from the pin level sampled after the
    /// edge fired.
    ///
    /// A low level is the press edge. A high level while the press is
    /// latched is the release edge. A high level with no press latched
    /// means the press and release were coalesced into one event.
    pub const fn infer(is_low: bool, press_latched: bool) -> Self {
        if is_low {
            Self::FALLING
        } else if press_latched {
            Self::RISING
        } else {
            Self(Self::FALLING.0 | Self::RISING.0)
        }
    }
}

impl core::ops::BitOr for EdgeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Per-channel debounce state with edge-driven toggle detection.
///
/// The press latch guards against duplicate toggles: a press edge flips
/// the toggle and latches, and no further press counts until the matching
/// release edge has been accepted.
pub struct ButtonState {
    toggled: bool,
    pressed: bool,
    last_edge_us: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (output off, not pressed, no edge seen).
    pub const fn new() -> Self {
        Self {
            toggled: false,
            pressed: false,
            last_edge_us: None,
        }
    }

    /// Process one edge event stamped with the monotonic time in
    /// microseconds. Returns true when the toggle state flipped.
    ///
    /// A mask carrying both edges performs the press and the release in
    /// the same call.
    pub fn on_edge(&mut self, mask: EdgeMask, timestamp_us: u64) -> bool {
        // Bounce: drop the event without touching anything, the debounce
        // window included.
        if let Some(last) = self.last_edge_us
            && timestamp_us <= last + DEBOUNCE_INTERVAL_US
        {
            return false;
        }

        self.last_edge_us = Some(timestamp_us);

        let mut flipped = false;
        if !self.pressed && mask.contains(EdgeMask::FALLING) {
            self.toggled = !self.toggled;
            self.pressed = true;
            flipped = true;
        }
        if self.pressed && mask.contains(EdgeMask::RISING) {
            self.pressed = false;
        }
        flipped
    }

    /// Current logical on/off state of the channel output.
    pub const fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// True between an accepted press edge and its accepted release edge.
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Time of the last accepted edge, if any edge has been accepted yet.
    pub const fn last_edge_us(&self) -> Option<u64> {
        self.last_edge_us
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BUTTON_LED_PIN, ChannelId};

    #[test]
    fn test_first_press_toggles_on() {
        let mut state = ButtonState::new();
        assert!(state.on_edge(EdgeMask::FALLING, 0));
        assert!(state.is_toggled());
        assert!(state.is_pressed());
        assert_eq!(state.last_edge_us(), Some(0));
    }

    #[test]
    fn test_bounce_within_window_is_dropped() {
        let mut state = ButtonState::new();
        state.on_edge(EdgeMask::FALLING, 0);
        assert!(!state.on_edge(EdgeMask::FALLING, 5_000));
        assert!(state.is_toggled());
        assert!(state.is_pressed());
        // The dropped edge leaves the window anchored at the first edge.
        assert_eq!(state.last_edge_us(), Some(0));
    }

    #[test]
    fn test_release_clears_latch_without_toggling() {
        let mut state = ButtonState::new();
        state.on_edge(EdgeMask::FALLING, 0);
        assert!(!state.on_edge(EdgeMask::RISING, 25_000));
        assert!(state.is_toggled());
        assert!(!state.is_pressed());
        assert_eq!(state.last_edge_us(), Some(25_000));
    }

    #[test]
    fn test_toggle_parity_over_press_cycles() {
        let mut state = ButtonState::new();
        let mut t = 0u64;
        for n in 1..=6u32 {
            state.on_edge(EdgeMask::FALLING, t);
            t += DEBOUNCE_INTERVAL_US + 1;
            state.on_edge(EdgeMask::RISING, t);
            t += DEBOUNCE_INTERVAL_US + 1;
            assert_eq!(state.is_toggled(), n % 2 == 1);
        }
    }

    #[test]
    fn test_latched_press_does_not_retoggle() {
        let mut state = ButtonState::new();
        state.on_edge(EdgeMask::FALLING, 0);
        // A second press edge outside the window but before any release
        // only re-arms the window.
        assert!(!state.on_edge(EdgeMask::FALLING, 50_000));
        assert!(state.is_toggled());
        assert_eq!(state.last_edge_us(), Some(50_000));
        // After a release the next press toggles again.
        state.on_edge(EdgeMask::RISING, 100_000);
        assert!(state.on_edge(EdgeMask::FALLING, 150_000));
        assert!(!state.is_toggled());
    }

    #[test]
    fn test_coalesced_press_and_release() {
        let mut state = ButtonState::new();
        assert!(state.on_edge(EdgeMask::FALLING | EdgeMask::RISING, 0));
        assert!(state.is_toggled());
        assert!(!state.is_pressed());
        assert_eq!(state.last_edge_us(), Some(0));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut state = ButtonState::new();
        state.on_edge(EdgeMask::FALLING, 0);
        // An edge exactly one window after the last accepted edge is still
        // inside the window.
        state.on_edge(EdgeMask::RISING, DEBOUNCE_INTERVAL_US);
        assert!(state.is_pressed());
        state.on_edge(EdgeMask::RISING, DEBOUNCE_INTERVAL_US + 1);
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_window_not_extended_by_bounce() {
        let mut state = ButtonState::new();
        state.on_edge(EdgeMask::FALLING, 0);
        state.on_edge(EdgeMask::RISING, 10_000);
        state.on_edge(EdgeMask::RISING, 15_000);
        // The window still measures from the first edge, so this release
        // lands outside it even though bounces arrived later.
        state.on_edge(EdgeMask::RISING, 20_001);
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_rising_without_press_only_rearms_window() {
        let mut state = ButtonState::new();
        assert!(!state.on_edge(EdgeMask::RISING, 0));
        assert!(!state.is_toggled());
        assert!(!state.is_pressed());
        // The event was accepted, so it still stamps the window.
        assert_eq!(state.last_edge_us(), Some(0));
    }

    #[test]
    fn test_channels_do_not_interact() {
        let mut states = [ButtonState::new(), ButtonState::new(), ButtonState::new()];
        let channel = ChannelId::from_button_pin(BUTTON_LED_PIN).unwrap();
        states[channel.index()].on_edge(EdgeMask::FALLING, 0);
        assert!(states[channel.index()].is_toggled());
        for other in ChannelId::ALL {
            if other != channel {
                assert!(!states[other.index()].is_toggled());
                assert!(!states[other.index()].is_pressed());
                assert_eq!(states[other.index()].last_edge_us(), None);
            }
        }
    }

    #[test]
    fn test_mask_contains() {
        let both = EdgeMask::FALLING | EdgeMask::RISING;
        assert!(both.contains(EdgeMask::FALLING));
        assert!(both.contains(EdgeMask::RISING));
        assert!(!EdgeMask::FALLING.contains(EdgeMask::RISING));
        assert!(!EdgeMask::RISING.contains(EdgeMask::FALLING));
    }

    #[test]
    fn test_infer_low_level_is_press() {
        assert_eq!(EdgeMask::infer(true, false), EdgeMask::FALLING);
        assert_eq!(EdgeMask::infer(true, true), EdgeMask::FALLING);
    }

    #[test]
    fn test_infer_high_level_while_latched_is_release() {
        assert_eq!(EdgeMask::infer(false, true), EdgeMask::RISING);
    }

    #[test]
    fn test_infer_high_level_unlatched_is_coalesced() {
        let mask = EdgeMask::infer(false, false);
        assert!(mask.contains(EdgeMask::FALLING));
        assert!(mask.contains(EdgeMask::RISING));
    }
}
