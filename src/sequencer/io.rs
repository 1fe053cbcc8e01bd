//! Digital I/O boundary for the sequencer core
//!
//! The core never touches pins directly. Everything it reads or drives
//! goes through this trait: live input levels on one side, relay, key
//! and LED commands on the other. The board implements it over real
//! GPIO; host tests implement it with a recording mock.

use crate::types::{Band, RelayPosition};

/// Pin-level collaborator of the sequencing engine
///
/// Input reads return the logical level (`true` = asserted) regardless
/// of electrical polarity. Output writes are idempotent; re-issuing the
/// current command is safe and happens on every polling cycle.
pub trait SequencerIo {
    /// Live level of the microphone PTT input
    fn ptt_active(&self) -> bool;

    /// Live level of the RTS/footswitch input
    fn rts_active(&self) -> bool;

    /// Live level of a band's forced-on override contact
    fn forced_on(&self, band: Band) -> bool;

    /// Live level of a band's forced-off override contact
    fn forced_off(&self, band: Band) -> bool;

    /// Command a band's LNA/SDR relay position
    fn set_lna(&mut self, band: Band, position: RelayPosition);

    /// Key or release the amplifier relay
    fn set_amplifier(&mut self, keyed: bool);

    /// Assert or drop the radio transmit-key line
    fn set_radio_key(&mut self, keyed: bool);

    /// Drive a band's transmit-indicator LED
    fn set_tx_led(&mut self, band: Band, on: bool);

    /// Blocking settle delay
    ///
    /// A busy-wait barrier between sequencing steps. The trigger edge
    /// tasks still preempt it and keep the latches fresh; the polling
    /// cycle only observes them once the delay completes.
    fn delay_ms(&mut self, ms: u32);
}
