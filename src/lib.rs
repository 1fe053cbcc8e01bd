//! Transmit/Receive Sequencer Firmware Library
//!
//! This library provides the core functionality for an STM32G474-based
//! transmit/receive sequencer: a controller that orders the power-up and
//! power-down of mast-mounted receive preamplifiers (LNAs), a linear
//! amplifier, and the radio's own transmit-key line so that no device is
//! ever exposed to transmit RF while in a receive-only electrical state.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Polling Loop  │  Edge Watch Tasks  │  Diagnostic Stream     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   SEQUENCER CORE                             │
//! │  Trigger Latches │ LNA Resolver │ Engine │ Warning Blink     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  Relay Outputs  │  Key Lines  │  Contacts  │  EXTI Inputs    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Functional core, imperative shell**: the sequencing logic is free
//!   of I/O and compiles for host tests; the board binds it to pins
//! - **Single-writer shared state**: each trigger latch has exactly one
//!   asynchronous writer and one synchronous reader
//! - **Explicit re-validation**: ordering-sensitive decisions re-read the
//!   live inputs at defined checkpoints instead of relying on locks
//! - **No unsafe in application code**: all unsafe isolated in HAL/FFI layers

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Provides safe abstractions over STM32G474 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Sequencer Core
///
/// Trigger latching, LNA override resolution, the transmit/receive
/// sequencing state machine, and the warning blink driver.
pub mod sequencer;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
