//! Module: config
//!
//! Purpose: Fixed capture parameters for the microphone probe.
//! Everything here is decided at build time; there is no config file,
//! command-line surface, or persisted state.
//!
//! Safety: Safe. Constants only.

/// Audio sample rate in Hz. 44.1 kHz also works for a wiring check.
pub const SAMPLE_RATE_HZ: u32 = 48_000;

/// Bits per I2S slot on the bus.
///
/// The INMP441 delivers 24 significant bits left-justified in 32-bit
/// slots; the slot width stays 32 and [`crate::sample::rescale`] moves
/// the value down to its true numeric range.
pub const BITS_PER_SLOT: u32 = 32;

/// Stereo frames fetched by one blocking read.
pub const FRAMES_PER_READ: usize = 256;

/// Channels per frame. The bus interleaves two mono microphones.
pub const CHANNELS: usize = 2;

/// Keep one of every `DECIMATE` sample pairs on the serial output.
///
/// Acquisition still runs at the full sample rate; decimation only
/// thins the printed stream so the serial link is not flooded.
pub const DECIMATE: u32 = 8;

/// 32-bit words per batch. Always even: one word per channel per frame.
pub const WORDS_PER_READ: usize = FRAMES_PER_READ * CHANNELS;

/// DMA buffers staged by the I2S driver.
pub const DMA_BUF_COUNT: i32 = 6;

/// Frames per DMA buffer.
pub const DMA_BUF_FRAMES: i32 = FRAMES_PER_READ as i32;

/// Serial console baud rate.
pub const SERIAL_BAUD: u32 = 921_600;

/// I2S pin assignment. Change if you wired differently.
pub struct PinConfig {
    /// Bit clock (SCK).
    pub bclk: i32,
    /// Frame sync / word select (WS).
    pub ws: i32,
    /// Serial data from both mics, tied together (SD).
    pub data_in: i32,
}

/// Default wiring for a classic ESP32 devkit.
pub const PINS: PinConfig = PinConfig {
    bclk: 26,
    ws: 25,
    data_in: 34,
};

const _: () = assert!(DECIMATE >= 1, "decimation factor must be at least 1");
const _: () = assert!(WORDS_PER_READ % 2 == 0, "batches must hold whole pairs");
