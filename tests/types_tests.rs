//! Tests for shared sequencer types
//!
//! Covers the transmit-state, band, and override-mode domain types.

use sequencer_firmware::types::{Band, OverrideMode, RelayPosition, TransmitState};

// ============================================================================
// TransmitState Tests
// ============================================================================

#[test]
fn transmit_state_default_is_receive() {
    assert_eq!(TransmitState::default(), TransmitState::Receive);
    assert!(!TransmitState::default().is_transmitting());
}

#[test]
fn transmit_state_from_startup_ptt_released() {
    assert_eq!(
        TransmitState::from_startup_ptt(false),
        TransmitState::Receive
    );
}

#[test]
fn transmit_state_from_startup_ptt_keyed() {
    // The transmitter may already be keyed when power is applied
    assert_eq!(
        TransmitState::from_startup_ptt(true),
        TransmitState::Transmit
    );
}

#[test]
fn transmit_state_is_transmitting() {
    assert!(TransmitState::Transmit.is_transmitting());
    assert!(!TransmitState::Receive.is_transmitting());
}

#[test]
fn transmit_state_relay_position() {
    assert_eq!(
        TransmitState::Receive.relay_position(),
        RelayPosition::Receive
    );
    assert_eq!(
        TransmitState::Transmit.relay_position(),
        RelayPosition::Transmit
    );
}

// ============================================================================
// RelayPosition Tests
// ============================================================================

#[test]
fn relay_position_default_is_receive() {
    assert_eq!(RelayPosition::default(), RelayPosition::Receive);
}

// ============================================================================
// Band Tests
// ============================================================================

#[test]
fn band_all_covers_both_bands() {
    assert_eq!(Band::ALL, [Band::One, Band::Two]);
}

#[test]
fn band_indexes_are_distinct() {
    assert_eq!(Band::One.index(), 0);
    assert_eq!(Band::Two.index(), 1);
}

// ============================================================================
// OverrideMode Tests
// ============================================================================

#[test]
fn override_mode_no_contacts_is_sequenced() {
    assert_eq!(
        OverrideMode::from_contacts(false, false),
        OverrideMode::Sequenced
    );
}

#[test]
fn override_mode_forced_on_contact() {
    assert_eq!(
        OverrideMode::from_contacts(true, false),
        OverrideMode::ForcedOn
    );
}

#[test]
fn override_mode_forced_off_contact() {
    assert_eq!(
        OverrideMode::from_contacts(false, true),
        OverrideMode::ForcedOff
    );
}

#[test]
fn override_mode_forced_on_wins_wiring_fault() {
    // Both contacts asserted is a wiring fault; forced-on wins
    assert_eq!(
        OverrideMode::from_contacts(true, true),
        OverrideMode::ForcedOn
    );
}

#[test]
fn override_mode_default_is_sequenced() {
    assert_eq!(OverrideMode::default(), OverrideMode::Sequenced);
}
