//! Waveform timing parameters and bit-pattern encoding.
//!
//! ICLED chips decode their serial protocol from pulse widths on the data
//! line. This module defines [`WaveformConfig`], the pair of SPI byte codes
//! whose shift-out produces those pulses plus the frame reset delay, and the
//! expansion of one 8-bit channel value into eight waveform codes.

use embedded_hal::spi::{Mode, MODE_1};

// ── Frame geometry ───────────────────────────────────────────────────────

/// Color channels per LED, transmitted in green, red, blue order.
pub const CHANNELS: usize = 3;

/// Waveform bytes per color channel (one SPI byte per data bit).
pub const CODES_PER_CHANNEL: usize = 8;

/// Waveform bytes occupied by one LED in the frame buffer.
pub const LED_FRAME_BYTES: usize = CHANNELS * CODES_PER_CHANNEL;

// ── Bus configuration ────────────────────────────────────────────────────

/// SPI clock rate the default [`WaveformConfig`] codes are tuned for.
///
/// Half the system clock of the reference platform. A platform that cannot
/// reach exactly 16 MHz needs its own validated [`WaveformConfig`].
pub const RECOMMENDED_CLOCK_HZ: u32 = 16_000_000;

/// Required SPI mode: clock polarity 0, clock phase 1.
///
/// Output on the rising edge, capture on the falling edge. Data must be
/// shifted out most-significant-bit first.
pub const SPI_MODE: Mode = MODE_1;

// ── WaveformConfig ───────────────────────────────────────────────────────

/// Pulse codes and reset timing for one ICLED chip family.
///
/// The two byte codes are chosen so that shifting them out at the configured
/// SPI clock rate produces the high-pulse widths the chip's receiver reads
/// as a logical 1 and a logical 0. They are empirical per chip family and
/// per clock rate, so they live here as data rather than as hard-coded
/// constants.
///
/// [`WaveformConfig::default()`] reproduces the reference tuning: WS2812-class
/// ICLEDs on a 16 MHz SPI clock ([`RECOMMENDED_CLOCK_HZ`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaveformConfig {
    /// SPI byte transmitted for a logical 1 data bit. Default: `0b1111_1110`.
    pub one_code: u8,
    /// SPI byte transmitted for a logical 0 data bit. Default: `0b1110_0000`.
    pub zero_code: u8,
    /// Quiescent period after the last frame byte, in microseconds, that the
    /// chips read as end-of-update (latch). Default: 200.
    pub reset_delay_us: u32,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            one_code: 0b1111_1110,
            zero_code: 0b1110_0000,
            reset_delay_us: 200,
        }
    }
}

impl WaveformConfig {
    /// Expand one channel byte into its eight waveform codes, most
    /// significant bit first.
    pub fn encode_byte(&self, value: u8) -> [u8; CODES_PER_CHANNEL] {
        let mut codes = [self.zero_code; CODES_PER_CHANNEL];
        let mut value = value;
        for code in codes.iter_mut() {
            if value & 0x80 != 0 {
                *code = self.one_code;
            }
            value <<= 1;
        }
        codes
    }
}

/// Scale a channel value by an 8-bit brightness factor.
///
/// Linear: `value * brightness / 255`, truncating. Full brightness (255) is
/// the identity, zero brightness turns the channel off.
#[inline]
pub fn scale_channel(value: u8, brightness: u8) -> u8 {
    ((u16::from(value) * u16::from(brightness)) / 255) as u8
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_tuning() {
        let config = WaveformConfig::default();
        assert_eq!(config.one_code, 0b1111_1110);
        assert_eq!(config.zero_code, 0b1110_0000);
        assert_eq!(config.reset_delay_us, 200);
    }

    #[test]
    fn encode_byte_zero_is_all_zero_codes() {
        let config = WaveformConfig::default();
        assert_eq!(config.encode_byte(0x00), [config.zero_code; 8]);
    }

    #[test]
    fn encode_byte_max_is_all_one_codes() {
        let config = WaveformConfig::default();
        assert_eq!(config.encode_byte(0xFF), [config.one_code; 8]);
    }

    #[test]
    fn encode_byte_is_msb_first() {
        let config = WaveformConfig::default();
        let one = config.one_code;
        let zero = config.zero_code;
        assert_eq!(
            config.encode_byte(0b1000_0010),
            [one, zero, zero, zero, zero, zero, one, zero]
        );
        assert_eq!(
            config.encode_byte(0b0000_0001),
            [zero, zero, zero, zero, zero, zero, zero, one]
        );
    }

    #[test]
    fn encode_byte_uses_configured_codes() {
        let config = WaveformConfig {
            one_code: 0xC0,
            zero_code: 0x80,
            reset_delay_us: 80,
        };
        assert_eq!(
            config.encode_byte(0b1010_0000),
            [0xC0, 0x80, 0xC0, 0x80, 0x80, 0x80, 0x80, 0x80]
        );
    }

    #[test]
    fn scale_channel_full_brightness_is_identity() {
        for value in [0u8, 1, 37, 128, 254, 255] {
            assert_eq!(scale_channel(value, 255), value);
        }
    }

    #[test]
    fn scale_channel_zero_brightness_is_off() {
        for value in [0u8, 1, 128, 255] {
            assert_eq!(scale_channel(value, 0), 0);
        }
    }

    #[test]
    fn scale_channel_truncates() {
        // floor(128 * 64 / 255) = 32, floor(100 * 85 / 255) = 33
        assert_eq!(scale_channel(128, 64), 32);
        assert_eq!(scale_channel(100, 85), 33);
        assert_eq!(scale_channel(255, 128), 128);
    }

    #[test]
    fn frame_geometry() {
        assert_eq!(LED_FRAME_BYTES, 24);
        assert_eq!(CHANNELS * CODES_PER_CHANNEL, LED_FRAME_BYTES);
    }
}
