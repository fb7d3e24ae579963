//! Shared channel output state.
//!
//! The edge-detector tasks publish each channel's logical on/off state
//! here; the refresh loop in `main` reads it back to drive the output
//! pins. One atomic slot per channel, one writer per slot, no locks.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::{CHANNEL_COUNT, ChannelId};

/// Fixed arena of per-channel on/off flags.
pub struct OutputStates([AtomicBool; CHANNEL_COUNT]);

impl OutputStates {
    /// All channels off.
    pub const fn new() -> Self {
        Self([
            AtomicBool::new(false),
            AtomicBool::new(false),
            AtomicBool::new(false),
        ])
    }

    /// Publish a channel's logical output state.
    pub fn set(&self, channel: ChannelId, on: bool) {
        self.0[channel.index()].store(on, Ordering::Relaxed);
    }

    /// Read back a channel's logical output state.
    pub fn get(&self, channel: ChannelId) -> bool {
        self.0[channel.index()].load(Ordering::Relaxed)
    }
}

impl Default for OutputStates {
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

    #[test]
    fn test_all_channels_start_off() {
        let states = OutputStates::new();
        for channel in ChannelId::ALL {
            assert!(!states.get(channel));
        }
    }

    #[test]
    fn test_set_is_per_channel() {
        let states = OutputStates::new();
        states.set(ChannelId::Laser, true);
        assert!(states.get(ChannelId::Laser));
        assert!(!states.get(ChannelId::Motor));
        assert!(!states.get(ChannelId::Led));
    }

    #[test]
    fn test_set_overwrites() {
        let states = OutputStates::new();
        states.set(ChannelId::Motor, true);
        states.set(ChannelId::Motor, true);
        assert!(states.get(ChannelId::Motor));
        states.set(ChannelId::Motor, false);
        assert!(!states.get(ChannelId::Motor));
    }
}
