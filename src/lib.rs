//! SPI waveform driver for addressable ICLED strips.
//!
//! This crate provides [`IcledStrip`], a driver for chains of intelligent
//! color LEDs (WS2812-class chips with an embedded controller) hung off a
//! plain SPI bus. The bus is used as a precise pulse generator: every data
//! bit of every LED becomes one pre-computed SPI byte whose high-pulse width
//! the chip decodes as a 1 or a 0. The driver keeps the whole strip's
//! waveform in a frame buffer and transmits it in a single uninterruptible
//! bus write followed by the chips' latch/reset pause.
//!
//! Works with any blocking [`embedded-hal`] 1.0 SPI implementation. The bus
//! must be configured at [`RECOMMENDED_CLOCK_HZ`], most-significant-bit
//! first, [`SPI_MODE`]; other clock rates need their own [`WaveformConfig`]
//! tuning.
//!
//! # Quick Start
//!
//! ```ignore
//! use icled_driver::IcledStrip;
//!
//! // `spi` is a configured blocking SPI bus, `delay` any DelayNs impl.
//! let mut strip: IcledStrip<_, _, 8> = IcledStrip::new(spi, delay);
//!
//! strip.begin_transaction();
//! strip.fill(0, 0, 32, 255);            // dim blue, whole strip
//! strip.set_led(1, 255, 0, 0, 128)?;    // first LED green, half bright
//! strip.show()?;                        // transmit + latch
//! strip.end_transaction();
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** - structured logging support via [`defmt`] `Format` impls
//!   on the error and config types.
//!
//! [`embedded-hal`]: embedded_hal

#![no_std]

pub mod error;
pub mod protocol;
pub mod strip;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use error::Error;
pub use protocol::{WaveformConfig, LED_FRAME_BYTES, RECOMMENDED_CLOCK_HZ, SPI_MODE};
pub use strip::IcledStrip;
