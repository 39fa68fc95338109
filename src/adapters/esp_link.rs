//! ESP32 link adapter — bridges real pins and the SPI peripheral to
//! [`LinkPort`]. This is the only module in the system that touches
//! actual hardware.
//!
//! Dual-target design: on espidf, GPIO goes through raw ESP-IDF sys calls
//! and SPI bytes through an owned `SpiBusDriver`. On other targets the
//! same surface logs trace breadcrumbs instead, so the full wiring is
//! type-checked and smoke-tested off target.

#[cfg(target_os = "espidf")]
use embedded_hal::spi::SpiBus;
#[cfg(target_os = "espidf")]
use esp_idf_hal::spi::{SpiBusDriver, SpiDriver};
#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(not(target_os = "espidf"))]
use log::trace;
#[cfg(target_os = "espidf")]
use log::warn;

use crate::error::Result;
#[cfg(target_os = "espidf")]
use crate::error::Error;
use crate::ports::{LinkPort, PinState};

/// The SPI bus type the link owns when the hardware transport is wired up.
/// Constructed in `main()` from the SPI2 peripheral and moved in whole.
#[cfg(target_os = "espidf")]
pub type BankSpiBus = SpiBusDriver<'static, SpiDriver<'static>>;

/// Production [`LinkPort`] backed by ESP-IDF.
pub struct EspLink {
    #[cfg(target_os = "espidf")]
    spi: Option<BankSpiBus>,
    #[cfg(not(target_os = "espidf"))]
    spi: bool,
}

impl EspLink {
    /// Link with no SPI bus attached. Suits bit-banged banks; a
    /// hardware-clocked bank over this link refuses to initialise.
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "espidf")]
            spi: None,
            #[cfg(not(target_os = "espidf"))]
            spi: false,
        }
    }

    /// Link owning the SPI bus wired to the chain.
    #[cfg(target_os = "espidf")]
    pub fn with_spi(spi: BankSpiBus) -> Self {
        Self { spi: Some(spi) }
    }

    /// (sim) Link pretending a bus is attached.
    #[cfg(not(target_os = "espidf"))]
    pub fn with_spi() -> Self {
        Self { spi: true }
    }
}

impl Default for EspLink {
    fn default() -> Self {
        Self::new()
    }
}

// ── LinkPort implementation (espidf) ──────────────────────────

#[cfg(target_os = "espidf")]
impl LinkPort for EspLink {
    fn gpio_init_output(&mut self, pin: i32) -> Result<()> {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: gpio_config programs the pin from a fully-initialised
        // struct; called from the single-threaded init path.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(Error::GpioConfig(ret));
        }
        Ok(())
    }

    fn gpio_write(&mut self, pin: i32, state: PinState) {
        // SAFETY: gpio_set_level writes to an already-configured output
        // pin; pin was validated during gpio_init_output().
        unsafe {
            gpio_set_level(pin, if state == PinState::High { 1 } else { 0 });
        }
    }

    fn spi_ready(&self) -> bool {
        self.spi.is_some()
    }

    fn spi_acquire(&mut self) {
        // SpiBusDriver holds the bus exclusively for its whole lifetime,
        // so the frame bracket needs no extra locking on this platform.
    }

    fn spi_transfer(&mut self, byte: u8) {
        if let Some(bus) = self.spi.as_mut() {
            // The chain clocks garbage back; nothing to read.
            if bus.write(&[byte]).is_err() {
                warn!("esp_link: SPI write failed");
            }
        }
    }

    fn spi_release(&mut self) {}
}

// ── LinkPort implementation (sim) ─────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl LinkPort for EspLink {
    fn gpio_init_output(&mut self, pin: i32) -> Result<()> {
        trace!("esp_link(sim): gpio{} configured as output", pin);
        Ok(())
    }

    fn gpio_write(&mut self, pin: i32, state: PinState) {
        trace!("esp_link(sim): gpio{} <- {:?}", pin, state);
    }

    fn spi_ready(&self) -> bool {
        self.spi
    }

    fn spi_acquire(&mut self) {}

    fn spi_transfer(&mut self, byte: u8) {
        trace!("esp_link(sim): spi <- {:02X}", byte);
    }

    fn spi_release(&mut self) {}
}
