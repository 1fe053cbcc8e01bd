//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the sequencer hardware.
//! All pin mappings and timing parameters are centralized here; none of
//! them are tunable at runtime.

/// Polling cycle period in milliseconds
///
/// One cycle re-commands the LNA relays, recomputes the desired
/// transmit state from the trigger latches, and runs a transition
/// sequence if one is warranted.
pub const POLL_PERIOD_MS: u32 = 5;

/// LNA/SDR relay settle delay in milliseconds
///
/// Time allowed for the antenna relays to reach the bypass position
/// before the amplifier may be keyed.
pub const LNA_SETTLE_MS: u32 = 30;

/// Amplifier keying relay settle delay in milliseconds (keying)
pub const AMP_ON_SETTLE_MS: u32 = 20;

/// Amplifier keying relay settle delay in milliseconds (release)
pub const AMP_OFF_SETTLE_MS: u32 = 20;

/// Additional delay before the radio transmit-key line is asserted
/// on an RTS-triggered transition, in milliseconds
pub const RADIO_KEY_DELAY_MS: u32 = 30;

/// PTT-release confirmation window in milliseconds
///
/// On receive-entry the key-off command is re-asserted and the PTT
/// input re-read once per millisecond for up to this long. A PTT still
/// active at the end of the window means the operator is manually
/// keyed and the transition is abandoned.
pub const PTT_RELEASE_WINDOW_MS: u32 = 100;

/// Warning blink half-period in milliseconds (2 Hz flash)
pub const BLINK_PERIOD_MS: u32 = 250;

/// Heartbeat LED on time in milliseconds
pub const HEARTBEAT_ON_MS: u32 = 100;

/// Heartbeat LED off time in milliseconds
pub const HEARTBEAT_OFF_MS: u32 = 900;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// PTT input (active low)
    pub const PTT_IN: &str = "PA3";

    /// RTS/footswitch input (active low)
    pub const RTS_IN: &str = "PA4";

    /// Band 1 LNA forced-on contact (active low)
    pub const LNA1_FORCE_ON: &str = "PC0";

    /// Band 1 LNA forced-off contact (active low)
    pub const LNA1_FORCE_OFF: &str = "PC1";

    /// Band 2 LNA forced-on contact (active low)
    pub const LNA2_FORCE_ON: &str = "PC2";

    /// Band 2 LNA forced-off contact (active low)
    pub const LNA2_FORCE_OFF: &str = "PC3";

    /// Band 1 LNA/SDR relay (high = receive position)
    pub const LNA1_RELAY: &str = "PB0";

    /// Band 2 LNA/SDR relay (high = receive position)
    pub const LNA2_RELAY: &str = "PB1";

    /// Amplifier keying relay
    pub const AMP_RELAY: &str = "PB2";

    /// Radio transmit-key line
    pub const RADIO_KEY: &str = "PB10";

    /// Band 1 transmit-indicator LED
    pub const TX_LED1: &str = "PA8";

    /// Band 2 transmit-indicator LED
    pub const TX_LED2: &str = "PA9";
}
