//! Sequencing State Machine
//!
//! Owns the authoritative transmit/receive state and drives the
//! ordered, time-gated relay and key transitions. The safety contract:
//! every LNA not forced on reaches bypass strictly before the
//! amplifier is keyed, and the amplifier is released strictly before
//! any LNA returns to receive.

use crate::config::{
    AMP_OFF_SETTLE_MS, AMP_ON_SETTLE_MS, LNA_SETTLE_MS, PTT_RELEASE_WINDOW_MS, RADIO_KEY_DELAY_MS,
};
use crate::sequencer::io::SequencerIo;
use crate::sequencer::lna;
use crate::types::{Band, OverrideMode, RelayPosition, TransmitState};

/// What one polling cycle did
///
/// Returned so the outer loop can put transitions and holds on the
/// diagnostic stream; the engine itself never logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// No transition was warranted
    Idle,
    /// Completed the receive-to-transmit sequence
    ///
    /// `radio_keyed` is true on the RTS-triggered path, where the
    /// sequencer itself asserted the radio transmit-key line after the
    /// amplifier settled.
    EnteredTransmit {
        /// Whether the radio key line was asserted by the sequencer
        radio_keyed: bool,
    },
    /// Completed the transmit-to-receive sequence
    EnteredReceive,
    /// Receive-entry aborted: the live RTS input was still active
    HeldByRts,
    /// Receive-entry aborted: PTT stayed active through the
    /// confirmation window, so the operator is manually keyed
    HeldByPtt,
}

#[cfg(feature = "embedded")]
impl defmt::Format for PollOutcome {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "idle"),
            Self::EnteredTransmit { radio_keyed } => {
                defmt::write!(f, "RX→TX(key={})", radio_keyed);
            }
            Self::EnteredReceive => defmt::write!(f, "TX→RX"),
            Self::HeldByRts => defmt::write!(f, "hold(RTS)"),
            Self::HeldByPtt => defmt::write!(f, "hold(PTT)"),
        }
    }
}

/// Transmit/receive sequencing engine
///
/// The only mutator of [`TransmitState`]. All relay, key and LED
/// writes flow through the [`SequencerIo`] it is polled with, so the
/// resolver can never race it with a contradictory command.
pub struct Sequencer {
    state: TransmitState,
}

impl Sequencer {
    /// Create an engine, deriving the initial state from the live PTT
    /// level (the transmitter may already be keyed at power-up)
    #[must_use]
    pub const fn new(ptt_active: bool) -> Self {
        Self {
            state: TransmitState::from_startup_ptt(ptt_active),
        }
    }

    /// Current authoritative state
    #[must_use]
    pub const fn state(&self) -> TransmitState {
        self.state
    }

    /// Run one polling cycle
    ///
    /// `ptt` and `rts` are the latched trigger levels. The cycle
    /// re-commands both LNA relays, recomputes the desired state, and
    /// runs a transition sequence when warranted. Idempotent while the
    /// desired state matches the authoritative one.
    pub fn poll(&mut self, io: &mut impl SequencerIo, ptt: bool, rts: bool) -> PollOutcome {
        self.command_lna(io, self.state.relay_position());

        let desired = if ptt || rts {
            TransmitState::Transmit
        } else {
            TransmitState::Receive
        };

        match (self.state, desired) {
            (TransmitState::Receive, TransmitState::Transmit) => {
                // With PTT active the radio is already transmitting by
                // definition; only the RTS-alone path keys it here.
                self.enter_transmit(io, rts && !ptt)
            }
            (TransmitState::Transmit, TransmitState::Receive) => self.enter_receive(io),
            _ => PollOutcome::Idle,
        }
    }

    /// Receive-to-transmit sequence
    ///
    /// LNAs to bypass, settle, key the amplifier, settle, then (RTS
    /// path only) a further delay before the radio key line goes on.
    /// The state becomes `Transmit` only once the amplifier settle has
    /// elapsed.
    fn enter_transmit(&mut self, io: &mut impl SequencerIo, via_rts: bool) -> PollOutcome {
        self.command_lna(io, RelayPosition::Transmit);
        io.delay_ms(LNA_SETTLE_MS);

        io.set_amplifier(true);
        io.delay_ms(AMP_ON_SETTLE_MS);

        if via_rts {
            io.delay_ms(RADIO_KEY_DELAY_MS);
            io.set_radio_key(true);
        }

        for band in Band::ALL {
            io.set_tx_led(band, true);
        }

        self.state = TransmitState::Transmit;
        PollOutcome::EnteredTransmit {
            radio_keyed: via_rts,
        }
    }

    /// Transmit-to-receive sequence
    ///
    /// Aborts without touching any output if the live RTS input still
    /// holds the transmitter, then drops the radio key and confirms
    /// the PTT input actually releases before de-energizing anything.
    /// An abort leaves the amplifier keyed; shutting it down under a
    /// transmitter the sequencer does not control is the one failure
    /// this device exists to prevent.
    fn enter_receive(&mut self, io: &mut impl SequencerIo) -> PollOutcome {
        if io.rts_active() {
            return PollOutcome::HeldByRts;
        }

        if !Self::confirm_ptt_released(io) {
            return PollOutcome::HeldByPtt;
        }

        for band in Band::ALL {
            io.set_tx_led(band, false);
        }

        io.set_amplifier(false);
        io.delay_ms(AMP_OFF_SETTLE_MS);

        self.state = TransmitState::Receive;
        self.command_lna(io, RelayPosition::Receive);

        PollOutcome::EnteredReceive
    }

    /// Drop the radio key line and wait for PTT to go inactive
    ///
    /// Dropping the key output is indistinguishable from the operator
    /// independently holding the microphone PTT, so the key-off
    /// command is re-asserted and the live PTT level re-read once per
    /// millisecond for up to [`PTT_RELEASE_WINDOW_MS`]. Returns false
    /// if PTT never released.
    fn confirm_ptt_released(io: &mut impl SequencerIo) -> bool {
        let mut remaining = PTT_RELEASE_WINDOW_MS;
        loop {
            io.set_radio_key(false);
            if !io.ptt_active() {
                return true;
            }
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            io.delay_ms(1);
        }
    }

    /// Apply the resolver to both bands through the single write path
    fn command_lna(&self, io: &mut impl SequencerIo, desired: RelayPosition) {
        for band in Band::ALL {
            let mode = OverrideMode::from_contacts(io.forced_on(band), io.forced_off(band));
            io.set_lna(band, lna::resolve(mode, desired, self.state));
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Sequencer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Sequencer({})", self.state);
    }
}
