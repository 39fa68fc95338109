//! Relay bank firmware — main entry point.
//!
//! Hexagonal layout: the bank's packing and latch discipline are pure
//! logic behind a port trait; this binary wires them to the real board.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                EspLink (adapter)                 │
//! │        raw GPIO  ·  SPI2 bus driver              │
//! │                                                  │
//! │  ───────────── LinkPort boundary ─────────────   │
//! │                                                  │
//! │  ┌────────────────────────────────────────────┐  │
//! │  │  ActuatorBank (packing, latch discipline)  │  │
//! │  │  PatternEngine (demo frames)               │  │
//! │  └────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
pub mod pins;

pub mod bank;
pub mod patterns;
mod adapters;
mod ports;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::spi::config::{Config as SpiConfig, DriverConfig, MODE_0};
use esp_idf_hal::spi::{SpiBusDriver, SpiDriver};
use esp_idf_hal::units::Hertz;

use adapters::esp_link::EspLink;
use bank::ActuatorBank;
use config::{BankConfig, TransportConfig};
use patterns::{PatternEngine, PatternId};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  RelayBank v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let cfg = BankConfig::default();
    if let Err(e) = cfg.validate() {
        log::error!("invalid config: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Ok(json) = serde_json::to_string(&cfg) {
        info!("config: {}", json);
    }

    // ── 3. Link bring-up ──────────────────────────────────────
    let link = match cfg.transport {
        TransportConfig::HardwareSpi => {
            let peripherals = Peripherals::take()?;
            // Typed pins must match the routing in `pins` (SCLK=12, MOSI=11).
            let spi = SpiDriver::new(
                peripherals.spi2,
                peripherals.pins.gpio12,
                peripherals.pins.gpio11,
                None::<AnyIOPin>,
                &DriverConfig::new(),
            )?;
            let bus = SpiBusDriver::new(
                spi,
                &SpiConfig::new()
                    .baudrate(Hertz(pins::SPI_CLOCK_HZ))
                    .data_mode(MODE_0),
            )?;
            EspLink::with_spi(bus)
        }
        TransportConfig::BitBang { .. } => EspLink::new(),
    };

    // ── 4. Bank init ──────────────────────────────────────────
    let mut bank = ActuatorBank::from_config(link, &cfg);
    if let Err(e) = bank.init() {
        // A bank that cannot reach its chain is a brick; log and halt.
        // In production the watchdog resets us after timeout.
        log::error!("bank init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 5. Lamp test ──────────────────────────────────────────
    let mut engine = PatternEngine::new(PatternId::AllOn);
    engine.advance(&mut bank);
    FreeRtos::delay_ms(1000);
    engine.set_pattern(PatternId::AllOff);
    engine.advance(&mut bank);
    FreeRtos::delay_ms(250);

    // ── 6. Demo loop ──────────────────────────────────────────
    engine.set_pattern(PatternId::Walk);
    info!("entering walking-bit loop ({} ms/step)", cfg.step_ms);

    loop {
        engine.advance(&mut bank);
        FreeRtos::delay_ms(cfg.step_ms);
    }
}
