//! Shared types used across the sequencer firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

/// Authoritative transmit/receive state
///
/// Owned and mutated only by the sequencing engine; everything else
/// reads it. Initialized at startup from the live PTT level, since the
/// transmitter may already be keyed when power is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransmitState {
    /// Receiving
    #[default]
    Receive,
    /// Transmitting
    Transmit,
}

impl TransmitState {
    /// Derive the initial state from the live PTT level at power-up
    #[must_use]
    pub const fn from_startup_ptt(ptt_active: bool) -> Self {
        if ptt_active {
            Self::Transmit
        } else {
            Self::Receive
        }
    }

    /// Check if transmitting
    #[must_use]
    pub const fn is_transmitting(self) -> bool {
        matches!(self, Self::Transmit)
    }

    /// The relay position matching this state in sequenced operation
    #[must_use]
    pub const fn relay_position(self) -> RelayPosition {
        match self {
            Self::Receive => RelayPosition::Receive,
            Self::Transmit => RelayPosition::Transmit,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TransmitState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Receive => defmt::write!(f, "RX"),
            Self::Transmit => defmt::write!(f, "TX"),
        }
    }
}

/// Commanded position of a band's LNA/SDR relay
///
/// `Receive` keeps the preamp in the signal path; `Transmit` switches
/// it out (bypass), the only position safe under transmit RF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RelayPosition {
    /// Preamp in line, antenna routed to the receiver
    #[default]
    Receive,
    /// Preamp bypassed, antenna routed to the transmit path
    Transmit,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RelayPosition {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Receive => defmt::write!(f, "RX"),
            Self::Transmit => defmt::write!(f, "BYPASS"),
        }
    }
}

/// Band identifier
///
/// The sequencer controls up to two independent bands, each with its
/// own LNA relay, override contacts, and transmit-indicator LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// First band
    One,
    /// Second band
    Two,
}

impl Band {
    /// Both bands, in command order
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Zero-based index, for per-band arrays
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Band {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::One => defmt::write!(f, "B1"),
            Self::Two => defmt::write!(f, "B2"),
        }
    }
}

/// Per-band LNA override mode
///
/// Derived live from the two mechanical contact inputs on every
/// resolver invocation; never cached, so a flipped switch takes effect
/// within one polling cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverrideMode {
    /// Relay follows the sequencing state machine
    #[default]
    Sequenced,
    /// Relay held in the receive position (cross-band full-duplex)
    ForcedOn,
    /// Relay held in bypass (preamp disconnected or unsafe to power)
    ForcedOff,
}

impl OverrideMode {
    /// Derive the mode from the two contact levels
    ///
    /// Forced-on wins if both contacts are asserted; a wiring fault
    /// resolves toward the preamp staying powered.
    #[must_use]
    pub const fn from_contacts(forced_on: bool, forced_off: bool) -> Self {
        if forced_on {
            Self::ForcedOn
        } else if forced_off {
            Self::ForcedOff
        } else {
            Self::Sequenced
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for OverrideMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Sequenced => defmt::write!(f, "SEQ"),
            Self::ForcedOn => defmt::write!(f, "ON"),
            Self::ForcedOff => defmt::write!(f, "OFF"),
        }
    }
}
