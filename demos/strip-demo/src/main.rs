//! Strip demo
//!
//! Demonstrates basic usage of the icled-driver crate on the Raspberry Pi
//! Pico 2. Walks a bright white dot down an 8-LED strip over a dim blue
//! background and logs each frame via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                          |
//! |-----------|------------|--------------------------------|
//! | SPI0 SCK  | GP18       | Unconnected, clock only paces  |
//! | SPI0 TX   | GP19       | Strip data-in                  |
//!
//! The strip's data line reads the SPI TX pulses directly; only clock rate
//! and mode matter, the clock pin itself stays unused.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use icled_driver::{IcledStrip, RECOMMENDED_CLOCK_HZ};

const NUM_LEDS: usize = 8;

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- SPI0 at the waveform clock rate, mode 1, MSB first ---
    let mut config = spi::Config::default();
    config.frequency = RECOMMENDED_CLOCK_HZ;
    config.polarity = Polarity::IdleLow;
    config.phase = Phase::CaptureOnSecondTransition;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, config);

    // --- Strip driver ---
    let mut strip: IcledStrip<_, _, NUM_LEDS> = IcledStrip::new(spi, Delay);

    info!("Strip demo started on {} LEDs", strip.len());

    strip.begin_transaction();

    let mut dot = 1u16;
    loop {
        // Dim blue background, bright white dot.
        strip.fill(0, 0, 48, 64);
        if let Err(e) = strip.set_led(dot, 255, 255, 255, 255) {
            error!("Set failed: {}", e);
        }

        match strip.show() {
            Ok(()) => trace!("Frame latched, dot at {}", dot),
            Err(e) => error!("Transmit failed: {}", e),
        }

        dot = if usize::from(dot) == NUM_LEDS { 1 } else { dot + 1 };
        Timer::after(Duration::from_millis(50)).await;
    }
}
