//! GPIO Abstractions
//!
//! Type-safe GPIO pin wrappers for the sequencer.
//! Provides semantic meaning to pins through the type system, and the
//! board-level [`SequencerIo`] implementation binding the sequencer
//! core to real hardware.

use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Output};
use embassy_time::Duration;

use crate::sequencer::io::SequencerIo;
use crate::sequencer::trigger::TriggerLatch;
use crate::types::{Band, RelayPosition};

/// Transmit-request input (PTT or RTS)
///
/// Active low with internal pull-up. Owns the EXTI channel so its
/// edge-watch task can sleep on any-edge transitions.
pub struct TriggerInput<'d> {
    pin: ExtiInput<'d>,
}

impl<'d> TriggerInput<'d> {
    /// Create a trigger input from an EXTI-capable pin
    #[must_use]
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self { pin }
    }

    /// Check if the request is asserted (active low)
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pin.is_low()
    }

    /// Wait for any edge, rising or falling
    pub async fn wait_for_edge(&mut self) {
        self.pin.wait_for_any_edge().await;
    }
}

/// Mechanical override contact input
///
/// One per band and direction (forced-on, forced-off). Active low
/// with internal pull-up; read live on every resolver invocation.
pub struct OverrideContact<'d> {
    pin: Input<'d>,
}

impl<'d> OverrideContact<'d> {
    /// Create an override contact input
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Check if the contact is closed (active low)
    #[must_use]
    pub fn is_asserted(&self) -> bool {
        self.pin.is_low()
    }
}

/// LNA/SDR antenna relay control
///
/// Energized (high) holds the preamp in the receive path; de-energized
/// is bypass, so a coil or supply failure fails toward the
/// transmit-safe position. Starts in bypass.
pub struct LnaRelay<'d> {
    pin: Output<'d>,
    position: RelayPosition,
}

impl<'d> LnaRelay<'d> {
    /// Create an LNA relay control (pin initialized low = bypass)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            position: RelayPosition::Transmit,
        }
    }

    /// Command the relay position
    pub fn set(&mut self, position: RelayPosition) {
        match position {
            RelayPosition::Receive => self.pin.set_high(),
            RelayPosition::Transmit => self.pin.set_low(),
        }
        self.position = position;
    }

    /// Last commanded position
    #[must_use]
    pub const fn position(&self) -> RelayPosition {
        self.position
    }
}

/// Amplifier keying relay control
pub struct AmpKeyRelay<'d> {
    pin: Output<'d>,
    keyed: bool,
}

impl<'d> AmpKeyRelay<'d> {
    /// Create the amplifier keying relay control (starts released)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, keyed: false }
    }

    /// Key or release the amplifier
    pub fn set_keyed(&mut self, keyed: bool) {
        if keyed {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.keyed = keyed;
    }

    /// Check if the amplifier is keyed
    #[must_use]
    pub const fn is_keyed(&self) -> bool {
        self.keyed
    }
}

/// Radio transmit-key output
///
/// Asserting this line is what actually makes the radio produce RF on
/// the RTS-triggered path.
pub struct RadioKeyLine<'d> {
    pin: Output<'d>,
    keyed: bool,
}

impl<'d> RadioKeyLine<'d> {
    /// Create the radio key output (starts dropped)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, keyed: false }
    }

    /// Assert or drop the key line
    pub fn set_keyed(&mut self, keyed: bool) {
        if keyed {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.keyed = keyed;
    }

    /// Check if the key line is asserted
    #[must_use]
    pub const fn is_keyed(&self) -> bool {
        self.keyed
    }
}

/// Transmit-indicator LED
pub struct TxLed<'d> {
    pin: Output<'d>,
    on: bool,
}

impl<'d> TxLed<'d> {
    /// Create a transmit-indicator LED (initially off)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, on: false }
    }

    /// Drive the LED
    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.on = on;
    }

    /// Check if the LED is lit
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }
}

/// Board-level I/O bundle for the sequencer core
///
/// Trigger levels come from the latches the edge-watch tasks keep
/// fresh; those tasks run on a higher-priority executor, so the levels
/// stay current even inside a settle delay. Everything else maps
/// directly onto the pin wrappers. Settle delays busy-wait on the
/// embassy time driver.
pub struct BoardIo<'d> {
    ptt: &'static TriggerLatch,
    rts: &'static TriggerLatch,
    force_on: [OverrideContact<'d>; 2],
    force_off: [OverrideContact<'d>; 2],
    lna: [LnaRelay<'d>; 2],
    amp: AmpKeyRelay<'d>,
    radio_key: RadioKeyLine<'d>,
    tx_led: [TxLed<'d>; 2],
}

impl<'d> BoardIo<'d> {
    /// Bundle the board's sequencer-facing I/O
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ptt: &'static TriggerLatch,
        rts: &'static TriggerLatch,
        force_on: [OverrideContact<'d>; 2],
        force_off: [OverrideContact<'d>; 2],
        lna: [LnaRelay<'d>; 2],
        amp: AmpKeyRelay<'d>,
        radio_key: RadioKeyLine<'d>,
        tx_led: [TxLed<'d>; 2],
    ) -> Self {
        Self {
            ptt,
            rts,
            force_on,
            force_off,
            lna,
            amp,
            radio_key,
            tx_led,
        }
    }
}

impl SequencerIo for BoardIo<'_> {
    fn ptt_active(&self) -> bool {
        self.ptt.current()
    }

    fn rts_active(&self) -> bool {
        self.rts.current()
    }

    fn forced_on(&self, band: Band) -> bool {
        self.force_on[band.index()].is_asserted()
    }

    fn forced_off(&self, band: Band) -> bool {
        self.force_off[band.index()].is_asserted()
    }

    fn set_lna(&mut self, band: Band, position: RelayPosition) {
        self.lna[band.index()].set(position);
    }

    fn set_amplifier(&mut self, keyed: bool) {
        self.amp.set_keyed(keyed);
    }

    fn set_radio_key(&mut self, keyed: bool) {
        self.radio_key.set_keyed(keyed);
    }

    fn set_tx_led(&mut self, band: Band, on: bool) {
        self.tx_led[band.index()].set(on);
    }

    fn delay_ms(&mut self, ms: u32) {
        embassy_time::block_for(Duration::from_millis(u64::from(ms)));
    }
}
