//! System configuration parameters.
//!
//! All tunable parameters for the bank controller. Configuration is
//! compiled-in (defaults below match the reference board wiring); there is
//! no persistence layer on this product.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// How the bank clocks bits out to the shift-register chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportConfig {
    /// Drive data and clock GPIOs in software, one edge at a time.
    BitBang { data_gpio: i32, clock_gpio: i32 },
    /// Delegate byte timing to the SPI peripheral (SCLK/MOSI routed to the
    /// chain, see `pins`).
    HardwareSpi,
}

/// Core bank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    // --- Chain ---
    /// Number of output lines in the chain (1-255).
    pub size: u8,
    /// Storage-register latch GPIO, shared by both transports.
    pub latch_gpio: i32,
    /// Transport used to clock bits out.
    pub transport: TransportConfig,

    // --- Behaviour ---
    /// Transfer after every mutation (true) or only on explicit `update()`.
    pub auto_update: bool,

    // --- Timing ---
    /// Demo loop step interval (milliseconds).
    pub step_ms: u32,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            // Chain: two 74HC595 driving a 16-channel relay board
            size: 16,
            latch_gpio: pins::BANK_LATCH_GPIO,
            transport: TransportConfig::HardwareSpi,

            // Behaviour
            auto_update: true,

            // Timing
            step_ms: 250, // 4 Hz walking bit
        }
    }
}

impl BankConfig {
    /// Validate field ranges. The bank driver itself tolerates degenerate
    /// values (it fails silent by design); this catches them before a
    /// board ships with one.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::Config("bank size must be at least 1"));
        }
        if let TransportConfig::BitBang { data_gpio, clock_gpio } = self.transport {
            if data_gpio == clock_gpio {
                return Err(Error::Config("data and clock must be distinct GPIOs"));
            }
            if data_gpio == self.latch_gpio || clock_gpio == self.latch_gpio {
                return Err(Error::Config("latch GPIO collides with data/clock"));
            }
        }
        if self.step_ms == 0 {
            return Err(Error::Config("step interval must be non-zero"));
        }
        Ok(())
    }
}
