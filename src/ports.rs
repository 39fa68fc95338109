//! Port trait for hardware access, the boundary between the bank's domain
//! logic and the platform.
//!
//! ```text
//!   EspLink (adapter) ──▶ LinkPort ──▶ ActuatorBank (domain)
//! ```
//!
//! [`ActuatorBank`](crate::bank::ActuatorBank) consumes the port via a
//! generic, so the packing and transfer logic never touches ESP-IDF
//! directly. Production code injects [`EspLink`](crate::adapters::esp_link::EspLink);
//! tests inject a call-recording mock and assert on the exact pin and byte
//! sequence a transfer produced.
//!
//! The surface is deliberately small: configure a pin, drive a pin, shift a
//! byte through the serial peripheral, and bracket a run of shifts as one
//! exclusive bus window. Everything else (bit packing, latch discipline,
//! MSB-first ordering) lives above the trait and is therefore testable off
//! target.

pub use embedded_hal::digital::PinState;

use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Link port (driven adapter: domain → pins / SPI peripheral)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the bank calls this to reach the board.
pub trait LinkPort {
    /// Configure a pin as a push-pull output. Called once per pin during
    /// bank initialisation.
    fn gpio_init_output(&mut self, pin: i32) -> Result<()>;

    /// Drive an already-configured output pin. Fire-and-forget.
    fn gpio_write(&mut self, pin: i32, state: PinState);

    /// Whether a hardware SPI bus is attached to this link. Banks built
    /// with the hardware-clocked transport refuse to initialise when this
    /// is false.
    fn spi_ready(&self) -> bool;

    /// Begin an exclusive bus window. No other consumer may interleave
    /// bytes until [`spi_release`](Self::spi_release).
    fn spi_acquire(&mut self);

    /// Shift one byte out MSB-first on the hardware peripheral. The byte
    /// clocked in simultaneously is discarded; the chain has nothing to
    /// say back.
    fn spi_transfer(&mut self, byte: u8);

    /// End the exclusive bus window.
    fn spi_release(&mut self);
}
