//! Warning Blink Driver
//!
//! A preamp forced on keeps listening while the companion band
//! transmits; transmitting on the forced-on band too would destroy it.
//! The flashing transmit-indicator LED is the only guard against that,
//! so any band whose override contact holds the LNA in receive flashes
//! continuously. Every other band's LED steadily mirrors the transmit
//! state.

use crate::config::BLINK_PERIOD_MS;
use crate::sequencer::io::SequencerIo;
use crate::types::{Band, OverrideMode, TransmitState};

/// Periodic LED driver for the transmit indicators
///
/// Driven from the polling loop, not from its own timer interrupt.
/// Accumulates elapsed polling time and advances the blink phase each
/// time the half-period elapses.
pub struct WarningBlink {
    phase: bool,
    elapsed_ms: u32,
}

impl WarningBlink {
    /// Create a driver with the blink phase off
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: false,
            elapsed_ms: 0,
        }
    }

    /// Account for elapsed polling time and refresh the LEDs
    ///
    /// Called once per polling cycle with the cycle period. LED writes
    /// happen only on half-period boundaries; between them the levels
    /// set by the sequencing engine stand.
    pub fn update(&mut self, io: &mut impl SequencerIo, state: TransmitState, elapsed_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < BLINK_PERIOD_MS {
            return;
        }
        self.elapsed_ms -= BLINK_PERIOD_MS;
        self.phase = !self.phase;

        for band in Band::ALL {
            let mode = OverrideMode::from_contacts(io.forced_on(band), io.forced_off(band));
            if matches!(mode, OverrideMode::ForcedOn) {
                io.set_tx_led(band, self.phase);
            } else {
                io.set_tx_led(band, state.is_transmitting());
            }
        }
    }
}

impl Default for WarningBlink {
    fn default() -> Self {
        Self::new()
    }
}
