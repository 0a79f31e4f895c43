//! Serial text output on UART0.
//!
//! The probe's only external interface: a line-oriented plain-text
//! stream. One readiness line at startup, then one `ch0,ch1` line per
//! retained sample pair. No framing and no acknowledgment; output is
//! fire-and-forget and backpressure is the transport's problem.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32 GPIO1 (UART0 TX) ──────▶ USB-UART RX
//!                                 └─▶ PC serial monitor / plotter
//! ```

use crate::fault::ConfigFault;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// Worst case is `"-8388608,-8388608"`: 17 bytes. Rounded up.
pub const MAX_LINE_LEN: usize = 24;

/// Readiness line emitted once before sampling starts.
pub const READY_LINE: &[u8] = b"# ready: sending CSV lines as ch0,ch1";

/// One-line-at-a-time text output.
///
/// The sink terminates each line itself; callers pass bare content.
pub trait LineSink {
    fn write_line(&mut self, line: &[u8]);
}

/// Format one rescaled pair as `<ch0>,<ch1>` into `buf`.
///
/// Returns the number of bytes written.
pub fn format_pair(buf: &mut [u8], ch0: i32, ch1: i32) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = write!(writer, "{},{}", ch0, ch1);
    writer.pos
}

/// Emit one rescaled pair as a CSV line.
pub fn emit_pair<W: LineSink + ?Sized>(out: &mut W, ch0: i32, ch1: i32) {
    let mut buf = [0u8; MAX_LINE_LEN];
    let len = format_pair(&mut buf, ch0, ch1);
    out.write_line(&buf[..len]);
}

/// Announce that configuration succeeded and sampling is about to start.
pub fn announce_ready<W: LineSink + ?Sized>(out: &mut W) {
    out.write_line(READY_LINE);
}

/// Report a fatal configuration fault. Emitted exactly once; the caller
/// halts afterwards, so this is the last line the device ever prints.
pub fn report_fault<W: LineSink + ?Sized>(out: &mut W, fault: ConfigFault) {
    out.write_line(fault.report_line());
}

/// Initialize UART0 TX-only for the probe's text stream.
#[cfg(target_os = "espidf")]
pub fn init_console_uart<'d>(
    uart: impl Peripheral<P = uart::UART0> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    baud_rate: u32,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config =
        uart::config::Config::default().baudrate(esp_idf_svc::hal::units::Hertz(baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// The console UART as a [`LineSink`].
#[cfg(target_os = "espidf")]
pub struct Console<'d> {
    uart: UartTxDriver<'d>,
}

#[cfg(target_os = "espidf")]
impl<'d> Console<'d> {
    pub fn new(uart: UartTxDriver<'d>) -> Self {
        Self { uart }
    }
}

#[cfg(target_os = "espidf")]
impl LineSink for Console<'_> {
    fn write_line(&mut self, line: &[u8]) {
        let _ = self.uart.write(line);
        let _ = self.uart.write(b"\n");
    }
}
