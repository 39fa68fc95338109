//! Unified error types for the relay bank firmware.
//!
//! A single `Error` enum that every fallible subsystem converts into, keeping
//! the top-level error handling uniform. All variants are `Copy` so they can
//! be passed around and logged without allocation.
//!
//! Only initialisation is fallible. Runtime bit writes and transfers are
//! fire-and-forget and return nothing, matching the behaviour of the output
//! hardware itself (a shift register cannot report failure).

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// GPIO pin configuration was rejected by the platform (raw return code).
    GpioConfig(i32),
    /// Hardware-clocked transport was selected but no SPI bus is attached
    /// to the link.
    SpiUnavailable,
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioConfig(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::SpiUnavailable => write!(f, "no SPI bus attached to link"),
            Self::Config(msg) => write!(f, "config: {}", msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
