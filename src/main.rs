//! RustI2sMicProbe - Main entry point
//!
//! Bring-up order mirrors the wiring-check workflow:
//! 1. Serial console first, so faults are reportable
//! 2. I2S receive channel (install, pins, clock confirm)
//! 3. Readiness line, then the sampler loop forever
//!
//! Any configuration failure is reported once and the device halts;
//! there is no safe degraded mode for a misconfigured audio peripheral.

#[cfg(target_os = "espidf")]
fn main() {
    use esp_idf_svc::hal::delay::FreeRtos;
    use esp_idf_svc::hal::peripherals::Peripherals;

    use rust_i2s_mic_probe::hal::I2sMic;
    use rust_i2s_mic_probe::{config, fault, serial, Sampler};

    esp_idf_svc::sys::link_patches();

    // No console yet, so bring-up failures here can only halt.
    let peripherals = match Peripherals::take() {
        Ok(p) => p,
        Err(_) => fault::halt(),
    };

    let uart = match serial::init_console_uart(
        peripherals.uart0,
        peripherals.pins.gpio1,
        config::SERIAL_BAUD,
    ) {
        Ok(uart) => uart,
        Err(_) => fault::halt(),
    };
    let mut console = serial::Console::new(uart);

    // Give the host's serial monitor a moment to attach.
    FreeRtos::delay_ms(200);

    let mut mic = match I2sMic::install(&config::PINS) {
        Ok(mic) => mic,
        Err(cause) => {
            serial::report_fault(&mut console, cause);
            fault::halt();
        }
    };

    serial::announce_ready(&mut console);

    let mut sampler = Sampler::new(config::DECIMATE);
    sampler.run(&mut mic, &mut console)
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    // The probe only runs on the ESP32 target; host builds exist so the
    // core library's tests can run without the Xtensa toolchain.
    eprintln!("mic_probe is firmware; build for the espidf target");
}
