//! High-level interface for an ICLED strip on a SPI bus.
//!
//! [`IcledStrip`] owns the bus peripheral and a pre-encoded waveform frame
//! buffer. Color updates rewrite the buffer; [`show`](IcledStrip::show)
//! transmits it in a single uninterruptible bus write.

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiBus;

use crate::error::Error;
use crate::protocol::{scale_channel, WaveformConfig, CODES_PER_CHANNEL, LED_FRAME_BYTES};

/// Driver for a strip of `N` addressable ICLEDs over SPI.
///
/// The frame buffer holds one waveform byte per data bit: 24 bytes per LED
/// (8 bits x 3 channels, green/red/blue order, most significant bit first).
/// Setting a color only rewrites the buffer; nothing reaches the hardware
/// until [`show`](Self::show).
///
/// The SPI peripheral must be configured at
/// [`RECOMMENDED_CLOCK_HZ`](crate::RECOMMENDED_CLOCK_HZ) (or the tuned
/// equivalent for a custom [`WaveformConfig`]), most-significant-bit first,
/// [`SPI_MODE`](crate::SPI_MODE), before it is handed to the driver.
///
/// # Lifecycle
///
/// 1. [`IcledStrip::new()`] constructs the driver with every LED off. No bus
///    traffic.
/// 2. [`begin_transaction()`](Self::begin_transaction) claims the bus for
///    strip updates.
/// 3. Any sequence of [`set_led`](Self::set_led) / [`fill`](Self::fill) /
///    [`clear`](Self::clear) / [`show`](Self::show), in any order.
/// 4. [`end_transaction()`](Self::end_transaction) releases the claim.
///
/// # Example
///
/// ```no_run
/// use icled_driver::IcledStrip;
///
/// # fn example(spi: impl embedded_hal::spi::SpiBus, delay: impl embedded_hal::delay::DelayNs) {
/// // 8-LED strip; `spi` is any blocking `embedded-hal` SPI bus
/// let mut strip: IcledStrip<_, _, 8> = IcledStrip::new(spi, delay);
///
/// strip.begin_transaction();
/// strip.set_led(1, 0, 255, 0, 128).unwrap(); // first LED red, half bright
/// strip.show().unwrap();
/// strip.end_transaction();
/// # }
/// ```
pub struct IcledStrip<SPI, D, const N: usize> {
    spi: SPI,
    delay: D,
    config: WaveformConfig,
    /// One 24-byte waveform region per LED, contiguous so the whole frame
    /// goes out as a single bus write.
    buffer: [[u8; LED_FRAME_BYTES]; N],
    /// Set between `begin_transaction` and `end_transaction`.
    in_transaction: bool,
}

impl<SPI, D, const N: usize> IcledStrip<SPI, D, N>
where
    SPI: SpiBus,
    D: DelayNs,
{
    /// Construct a driver with the reference waveform tuning.
    ///
    /// Every LED starts off (the buffer is pre-filled with logical-0 codes,
    /// equivalent to [`clear`](Self::clear)). No bus traffic is generated.
    ///
    /// # Arguments
    /// * `spi` - SPI peripheral (takes ownership for exclusive access)
    /// * `delay` - delay provider for the frame reset period
    pub fn new(spi: SPI, delay: D) -> Self {
        Self::with_config(spi, delay, WaveformConfig::default())
    }

    /// Construct a driver with custom waveform tuning, for chip families or
    /// clock rates the default codes do not fit.
    pub fn with_config(spi: SPI, delay: D, config: WaveformConfig) -> Self {
        Self {
            spi,
            delay,
            buffer: [[config.zero_code; LED_FRAME_BYTES]; N],
            config,
            in_transaction: false,
        }
    }

    // -----------------------------------------------------------------------
    // Bus transaction bracket
    // -----------------------------------------------------------------------

    /// Open a bus transaction bracket.
    ///
    /// While the bracket is open the bus belongs to the strip: no other
    /// consumer may touch it until [`end_transaction`](Self::end_transaction).
    /// Must be called before the first [`show`](Self::show). Idempotent.
    pub fn begin_transaction(&mut self) {
        self.in_transaction = true;
    }

    /// Close the bus transaction bracket.
    ///
    /// A no-op if no bracket is open.
    pub fn end_transaction(&mut self) {
        self.in_transaction = false;
    }

    // -----------------------------------------------------------------------
    // Buffer updates
    // -----------------------------------------------------------------------

    /// Set the color and brightness of a single LED in the frame buffer.
    ///
    /// Each channel is scaled to `channel * brightness / 255` before
    /// encoding. Only the addressed LED's 24-byte region is rewritten.
    ///
    /// # Arguments
    /// * `index` - LED position, 1-based (1 is the LED closest to the data
    ///   input, as the chips number themselves)
    /// * `green`, `red`, `blue` - 8-bit PWM value per channel
    /// * `brightness` - global scaling factor for this LED
    ///
    /// # Errors
    /// [`Error::InvalidIndex`] if `index` is 0 or beyond the strip length;
    /// the buffer is untouched in that case.
    pub fn set_led(
        &mut self,
        index: u16,
        green: u8,
        red: u8,
        blue: u8,
        brightness: u8,
    ) -> Result<(), Error<SPI::Error>> {
        if index == 0 || usize::from(index) > N {
            return Err(Error::InvalidIndex);
        }
        self.encode_led(usize::from(index) - 1, green, red, blue, brightness);
        Ok(())
    }

    /// Set every LED to the same color and brightness.
    pub fn fill(&mut self, green: u8, red: u8, blue: u8, brightness: u8) {
        for led in 0..N {
            self.encode_led(led, green, red, blue, brightness);
        }
    }

    /// Turn every LED off.
    ///
    /// Equivalent to `fill(0, 0, 0, 0)`. The strip itself keeps displaying
    /// its last frame until the next [`show`](Self::show).
    pub fn clear(&mut self) {
        self.fill(0, 0, 0, 0);
    }

    // -----------------------------------------------------------------------
    // Transmission
    // -----------------------------------------------------------------------

    /// Transmit the frame buffer to the strip.
    ///
    /// The whole buffer goes out as one contiguous bus write inside a
    /// critical section: the chips derive their bit timing from the SPI
    /// clock, and an interrupt stalling the byte stream longer than the
    /// chip tolerance is read as a premature reset. The section covers the
    /// write and the FIFO drain only, never the reset delay.
    ///
    /// On success, blocks for the configured reset period (default 200 us)
    /// so the chips latch the frame, then returns.
    ///
    /// # Errors
    /// * [`Error::TransactionNotStarted`] if no
    ///   [`begin_transaction`](Self::begin_transaction) bracket is open.
    /// * [`Error::Spi`] on a bus failure. The critical section is released
    ///   before the error propagates; the reset delay is skipped since no
    ///   complete frame was latched.
    pub fn show(&mut self) -> Result<(), Error<SPI::Error>> {
        if !self.in_transaction {
            return Err(Error::TransactionNotStarted);
        }

        let frame: &[u8] = bytemuck::cast_slice(self.buffer.as_slice());
        let transferred = critical_section::with(|_| {
            self.spi.write(frame)?;
            self.spi.flush()
        });
        transferred.map_err(Error::Spi)?;

        self.delay.delay_us(self.config.reset_delay_us);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of LEDs on the strip.
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for a zero-length strip.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Read-only view of the encoded waveform frame, `N * 24` bytes.
    pub fn frame(&self) -> &[u8] {
        bytemuck::cast_slice(self.buffer.as_slice())
    }

    /// The waveform tuning in use.
    pub const fn config(&self) -> &WaveformConfig {
        &self.config
    }

    /// Consume the driver and hand back the bus and delay peripherals.
    pub fn release(self) -> (SPI, D) {
        (self.spi, self.delay)
    }

    /// Encode one LED's scaled channels into its buffer region.
    /// `led` is 0-based and must be below `N`.
    fn encode_led(&mut self, led: usize, green: u8, red: u8, blue: u8, brightness: u8) {
        let channels = [
            scale_channel(green, brightness),
            scale_channel(red, brightness),
            scale_channel(blue, brightness),
        ];
        let region = &mut self.buffer[led];
        for (channel, value) in channels.into_iter().enumerate() {
            let codes = self.config.encode_byte(value);
            let at = channel * CODES_PER_CHANNEL;
            region[at..at + CODES_PER_CHANNEL].copy_from_slice(&codes);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
