//! LNA Mode Resolver
//!
//! Decides, per band, whether the LNA/SDR relay belongs in the receive
//! or bypass position right now, given the mechanical override contacts
//! and the authoritative transmit state. Pure function of its inputs;
//! recomputed on every polling cycle so a switch flipped mid-operation
//! takes effect within one polling interval.

use crate::types::{OverrideMode, RelayPosition, TransmitState};

/// Resolve a band's relay position
///
/// Evaluated in strict order:
/// 1. Forced-on holds the relay in receive, unconditionally. This is
///    what keeps a preamp listening during cross-band full-duplex
///    operation while the companion band transmits.
/// 2. Forced-off holds the relay in bypass, protecting a preamp that
///    is physically disconnected or unsafe to power.
/// 3. Sequenced mode admits receive only when both the commanded level
///    and the global transmit state are receive; any doubt resolves to
///    bypass.
#[must_use]
pub const fn resolve(
    mode: OverrideMode,
    desired: RelayPosition,
    state: TransmitState,
) -> RelayPosition {
    match mode {
        OverrideMode::ForcedOn => RelayPosition::Receive,
        OverrideMode::ForcedOff => RelayPosition::Transmit,
        OverrideMode::Sequenced => {
            if matches!(desired, RelayPosition::Receive) && matches!(state, TransmitState::Receive)
            {
                RelayPosition::Receive
            } else {
                RelayPosition::Transmit
            }
        }
    }
}
