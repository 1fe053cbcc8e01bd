//! Sequencer Core
//!
//! Trigger latching, LNA override resolution, the transmit/receive
//! sequencing state machine, and the warning blink driver.
//! Implements the functional core of the sequencer; all I/O goes
//! through the [`io::SequencerIo`] boundary.

pub mod blink;
pub mod engine;
pub mod io;
pub mod lna;
pub mod trigger;
