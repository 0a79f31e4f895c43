//! I2S master-receive driver for the microphone pair.
//!
//! Wraps the ESP-IDF legacy I2S driver: install, bind pins, confirm the
//! clock, then blocking batched reads. Everything here is one-time setup
//! plus `i2s_read`; the interesting behavior lives in the sampler.

#[cfg(target_os = "espidf")]
use core::ffi::c_void;
#[cfg(target_os = "espidf")]
use core::ptr;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::delay::BLOCK;
#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{
    esp, i2s_bits_per_sample_t_I2S_BITS_PER_SAMPLE_32BIT, i2s_channel_fmt_t_I2S_CHANNEL_FMT_RIGHT_LEFT,
    i2s_channel_t_I2S_CHANNEL_STEREO, i2s_comm_format_t_I2S_COMM_FORMAT_STAND_I2S, i2s_config_t,
    i2s_driver_install, i2s_mode_t_I2S_MODE_MASTER, i2s_mode_t_I2S_MODE_RX, i2s_pin_config_t,
    i2s_port_t, i2s_port_t_I2S_NUM_0, i2s_read, i2s_set_clk, i2s_set_pin, i2s_zero_dma_buffer,
    EspError, ESP_INTR_FLAG_LEVEL1, I2S_PIN_NO_CHANGE,
};

#[cfg(target_os = "espidf")]
use crate::config::{self, PinConfig};
#[cfg(target_os = "espidf")]
use crate::fault::ConfigFault;
#[cfg(target_os = "espidf")]
use crate::sampler::BatchSource;

/// Handle to the installed RX channel on I2S port 0.
#[cfg(target_os = "espidf")]
pub struct I2sMic {
    port: i2s_port_t,
}

#[cfg(target_os = "espidf")]
impl I2sMic {
    /// Configure the receive channel exactly once, before sampling.
    ///
    /// Install the driver (master/RX, Philips I2S, 32-bit slots,
    /// stereo), bind BCLK/WS/DATA-IN, then lock sample rate and format
    /// with an explicit `i2s_set_clk`: the legacy driver wants the
    /// clock confirmed as a separate step after pin routing.
    pub fn install(pins: &PinConfig) -> Result<Self, ConfigFault> {
        let port = i2s_port_t_I2S_NUM_0;

        let i2s_config = i2s_config_t {
            mode: i2s_mode_t_I2S_MODE_MASTER | i2s_mode_t_I2S_MODE_RX,
            sample_rate: config::SAMPLE_RATE_HZ,
            bits_per_sample: i2s_bits_per_sample_t_I2S_BITS_PER_SAMPLE_32BIT,
            channel_format: i2s_channel_fmt_t_I2S_CHANNEL_FMT_RIGHT_LEFT,
            communication_format: i2s_comm_format_t_I2S_COMM_FORMAT_STAND_I2S,
            intr_alloc_flags: ESP_INTR_FLAG_LEVEL1 as i32,
            dma_buf_count: config::DMA_BUF_COUNT,
            dma_buf_len: config::DMA_BUF_FRAMES,
            use_apll: false,
            tx_desc_auto_clear: false,
            fixed_mclk: 0,
            ..Default::default()
        };

        esp!(unsafe { i2s_driver_install(port, &i2s_config, 0, ptr::null_mut()) })
            .map_err(|_| ConfigFault::DriverInstall)?;

        let pin_config = i2s_pin_config_t {
            mck_io_num: I2S_PIN_NO_CHANGE,
            bck_io_num: pins.bclk,
            ws_io_num: pins.ws,
            data_out_num: I2S_PIN_NO_CHANGE,
            data_in_num: pins.data_in,
        };
        esp!(unsafe { i2s_set_pin(port, &pin_config) }).map_err(|_| ConfigFault::PinBind)?;

        // Lock sample rate/format explicitly
        esp!(unsafe {
            i2s_set_clk(
                port,
                config::SAMPLE_RATE_HZ,
                config::BITS_PER_SLOT,
                i2s_channel_t_I2S_CHANNEL_STEREO,
            )
        })
        .map_err(|_| ConfigFault::ClockSetup)?;

        // Start from clean DMA buffers
        unsafe { i2s_zero_dma_buffer(port) };

        Ok(Self { port })
    }
}

#[cfg(target_os = "espidf")]
impl BatchSource for I2sMic {
    type Error = EspError;

    /// Blocking read of one batch; waits indefinitely for data.
    fn read_batch(&mut self, words: &mut [i32]) -> Result<usize, EspError> {
        let mut bytes_read: usize = 0;
        esp!(unsafe {
            i2s_read(
                self.port,
                words.as_mut_ptr() as *mut c_void,
                core::mem::size_of_val(words),
                &mut bytes_read,
                BLOCK,
            )
        })?;
        Ok(bytes_read / core::mem::size_of::<i32>())
    }
}
