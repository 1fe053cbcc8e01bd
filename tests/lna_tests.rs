//! Tests for the LNA mode resolver
//!
//! Exercises the override precedence chain and the sequenced-mode
//! receive condition.

use sequencer_firmware::sequencer::lna::resolve;
use sequencer_firmware::types::{OverrideMode, RelayPosition, TransmitState};

const POSITIONS: [RelayPosition; 2] = [RelayPosition::Receive, RelayPosition::Transmit];
const STATES: [TransmitState; 2] = [TransmitState::Receive, TransmitState::Transmit];

// ============================================================================
// Override Precedence Tests
// ============================================================================

#[test]
fn forced_on_always_resolves_receive() {
    for desired in POSITIONS {
        for state in STATES {
            assert_eq!(
                resolve(OverrideMode::ForcedOn, desired, state),
                RelayPosition::Receive,
                "forced-on must hold receive for desired={desired:?} state={state:?}"
            );
        }
    }
}

#[test]
fn forced_off_always_resolves_bypass() {
    for desired in POSITIONS {
        for state in STATES {
            assert_eq!(
                resolve(OverrideMode::ForcedOff, desired, state),
                RelayPosition::Transmit,
                "forced-off must hold bypass for desired={desired:?} state={state:?}"
            );
        }
    }
}

// ============================================================================
// Sequenced Mode Tests
// ============================================================================

#[test]
fn sequenced_receive_needs_both_receive() {
    assert_eq!(
        resolve(
            OverrideMode::Sequenced,
            RelayPosition::Receive,
            TransmitState::Receive
        ),
        RelayPosition::Receive
    );
}

#[test]
fn sequenced_bypasses_when_commanded_transmit() {
    for state in STATES {
        assert_eq!(
            resolve(OverrideMode::Sequenced, RelayPosition::Transmit, state),
            RelayPosition::Transmit
        );
    }
}

#[test]
fn sequenced_bypasses_while_transmitting() {
    // A receive command during transmit still resolves to bypass
    assert_eq!(
        resolve(
            OverrideMode::Sequenced,
            RelayPosition::Receive,
            TransmitState::Transmit
        ),
        RelayPosition::Transmit
    );
}

// ============================================================================
// Idempotence Tests
// ============================================================================

#[test]
fn resolver_is_idempotent() {
    for mode in [
        OverrideMode::Sequenced,
        OverrideMode::ForcedOn,
        OverrideMode::ForcedOff,
    ] {
        for desired in POSITIONS {
            for state in STATES {
                let first = resolve(mode, desired, state);
                for _ in 0..10 {
                    assert_eq!(resolve(mode, desired, state), first);
                }
            }
        }
    }
}
