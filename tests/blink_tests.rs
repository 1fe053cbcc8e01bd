//! Tests for the warning blink driver

use sequencer_firmware::config::{BLINK_PERIOD_MS, POLL_PERIOD_MS};
use sequencer_firmware::sequencer::blink::WarningBlink;
use sequencer_firmware::sequencer::io::SequencerIo;
use sequencer_firmware::types::{Band, RelayPosition, TransmitState};

/// Minimal LED-observing mock
#[derive(Default)]
struct LedIo {
    force_on: [bool; 2],
    force_off: [bool; 2],
    led: [bool; 2],
    writes: usize,
}

impl SequencerIo for LedIo {
    fn ptt_active(&self) -> bool {
        false
    }

    fn rts_active(&self) -> bool {
        false
    }

    fn forced_on(&self, band: Band) -> bool {
        self.force_on[band.index()]
    }

    fn forced_off(&self, band: Band) -> bool {
        self.force_off[band.index()]
    }

    fn set_lna(&mut self, _band: Band, _position: RelayPosition) {}

    fn set_amplifier(&mut self, _keyed: bool) {}

    fn set_radio_key(&mut self, _keyed: bool) {}

    fn set_tx_led(&mut self, band: Band, on: bool) {
        self.led[band.index()] = on;
        self.writes += 1;
    }

    fn delay_ms(&mut self, _ms: u32) {}
}

#[test]
fn no_led_writes_before_the_period_elapses() {
    let mut io = LedIo::default();
    let mut blink = WarningBlink::new();

    blink.update(&mut io, TransmitState::Receive, BLINK_PERIOD_MS - 1);

    assert_eq!(io.writes, 0);
}

#[test]
fn forced_on_band_flashes_while_receiving() {
    let mut io = LedIo::default();
    io.force_on[0] = true;
    let mut blink = WarningBlink::new();

    blink.update(&mut io, TransmitState::Receive, BLINK_PERIOD_MS);
    assert!(io.led[0]);

    blink.update(&mut io, TransmitState::Receive, BLINK_PERIOD_MS);
    assert!(!io.led[0]);

    blink.update(&mut io, TransmitState::Receive, BLINK_PERIOD_MS);
    assert!(io.led[0]);
}

#[test]
fn forced_on_band_keeps_flashing_while_companion_transmits() {
    // The exposed preamp is most at risk exactly now
    let mut io = LedIo::default();
    io.force_on[0] = true;
    let mut blink = WarningBlink::new();

    blink.update(&mut io, TransmitState::Transmit, BLINK_PERIOD_MS);
    assert!(io.led[0], "flash phase on");
    assert!(io.led[1], "sequenced band steady on during transmit");

    blink.update(&mut io, TransmitState::Transmit, BLINK_PERIOD_MS);
    assert!(!io.led[0], "flash phase off");
    assert!(io.led[1], "sequenced band still steady on");
}

#[test]
fn sequenced_bands_stay_dark_while_receiving() {
    let mut io = LedIo::default();
    let mut blink = WarningBlink::new();

    for _ in 0..4 {
        blink.update(&mut io, TransmitState::Receive, BLINK_PERIOD_MS);
        assert_eq!(io.led, [false, false]);
    }
}

#[test]
fn forced_off_band_follows_the_transmit_state() {
    // Forced-off bypasses the preamp but the LED still shows transmit
    let mut io = LedIo::default();
    io.force_off[1] = true;
    let mut blink = WarningBlink::new();

    blink.update(&mut io, TransmitState::Transmit, BLINK_PERIOD_MS);
    assert!(io.led[1]);

    blink.update(&mut io, TransmitState::Receive, BLINK_PERIOD_MS);
    assert!(!io.led[1]);
}

#[test]
fn polling_cycles_accumulate_toward_the_period() {
    let mut io = LedIo::default();
    io.force_on[0] = true;
    let mut blink = WarningBlink::new();

    let cycles_per_period = BLINK_PERIOD_MS / POLL_PERIOD_MS;
    for _ in 0..cycles_per_period - 1 {
        blink.update(&mut io, TransmitState::Receive, POLL_PERIOD_MS);
    }
    assert_eq!(io.writes, 0);

    blink.update(&mut io, TransmitState::Receive, POLL_PERIOD_MS);
    assert!(io.led[0]);
}
