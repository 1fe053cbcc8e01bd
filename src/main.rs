//! T/R Sequencer Main Application
//!
//! Entry point for the STM32G474-based transmit/receive sequencer.
//! Initializes hardware, spawns the trigger edge-watch tasks on a
//! high-priority executor, and runs the polling loop.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_time::Ticker;
use {defmt_rtt as _, panic_probe as _};

use sequencer_firmware::hal::gpio::{
    AmpKeyRelay, BoardIo, LnaRelay, OverrideContact, RadioKeyLine, TriggerInput, TxLed,
};
use sequencer_firmware::prelude::*;
use sequencer_firmware::sequencer::blink::WarningBlink;
use sequencer_firmware::sequencer::engine::{PollOutcome, Sequencer};
use sequencer_firmware::sequencer::trigger::TriggerLatch;

/// Latched PTT level, written only by its edge-watch task
static PTT_LATCH: TriggerLatch = TriggerLatch::new();

/// Latched RTS level, written only by its edge-watch task
static RTS_LATCH: TriggerLatch = TriggerLatch::new();

/// High-priority executor for the edge-watch tasks
///
/// Runs in interrupt context, so edges are captured even while the
/// polling loop sits in a settle delay.
static TRIGGER_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn UART4() {
    TRIGGER_EXECUTOR.on_interrupt();
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("T/R sequencer firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    let ptt = TriggerInput::new(ExtiInput::new(p.PA3, p.EXTI3, Pull::Up));
    let rts = TriggerInput::new(ExtiInput::new(p.PA4, p.EXTI4, Pull::Up));

    // Prime the latches from the live levels; the transmitter may
    // already be keyed when power is applied.
    PTT_LATCH.capture(ptt.is_active());
    RTS_LATCH.capture(rts.is_active());

    let mut io = BoardIo::new(
        &PTT_LATCH,
        &RTS_LATCH,
        [
            OverrideContact::new(Input::new(p.PC0, Pull::Up)),
            OverrideContact::new(Input::new(p.PC2, Pull::Up)),
        ],
        [
            OverrideContact::new(Input::new(p.PC1, Pull::Up)),
            OverrideContact::new(Input::new(p.PC3, Pull::Up)),
        ],
        [
            LnaRelay::new(Output::new(p.PB0, Level::Low, Speed::Low)),
            LnaRelay::new(Output::new(p.PB1, Level::Low, Speed::Low)),
        ],
        AmpKeyRelay::new(Output::new(p.PB2, Level::Low, Speed::Low)),
        RadioKeyLine::new(Output::new(p.PB10, Level::Low, Speed::Low)),
        [
            TxLed::new(Output::new(p.PA8, Level::Low, Speed::Low)),
            TxLed::new(Output::new(p.PA9, Level::Low, Speed::Low)),
        ],
    );

    let mut seq = Sequencer::new(PTT_LATCH.current());
    let mut blink = WarningBlink::new();

    interrupt::UART4.set_priority(Priority::P6);
    let high = TRIGGER_EXECUTOR.start(interrupt::UART4);
    high.spawn(trigger_watch(ptt, &PTT_LATCH)).unwrap();
    high.spawn(trigger_watch(rts, &RTS_LATCH)).unwrap();

    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    spawner.spawn(heartbeat_task(led)).unwrap();

    info!("Tasks spawned, entering polling loop, state={}", seq.state());

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(POLL_PERIOD_MS)));
    loop {
        let ptt = PTT_LATCH.current();
        let rts = RTS_LATCH.current();
        match seq.poll(&mut io, ptt, rts) {
            PollOutcome::Idle => {}
            outcome @ (PollOutcome::HeldByRts | PollOutcome::HeldByPtt) => {
                warn!("{} ptt={} rts={} state={}", outcome, ptt, rts, seq.state());
            }
            outcome => {
                info!("{} ptt={} rts={} state={}", outcome, ptt, rts, seq.state());
            }
        }
        blink.update(&mut io, seq.state(), POLL_PERIOD_MS);
        ticker.next().await;
    }
}

/// Edge-watch task: re-read the pin after every transition and store
/// the level in the latch, nothing else
#[embassy_executor::task(pool_size = 2)]
async fn trigger_watch(mut input: TriggerInput<'static>, latch: &'static TriggerLatch) {
    loop {
        input.wait_for_edge().await;
        latch.capture(input.is_active());
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(u64::from(HEARTBEAT_ON_MS))).await;
        led.set_low();
        Timer::after(Duration::from_millis(u64::from(HEARTBEAT_OFF_MS))).await;
    }
}
