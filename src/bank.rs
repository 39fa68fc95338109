//! Serially-loaded actuator bank driver.
//!
//! Owns the packed output state for a chain of shift registers and pushes
//! it to the board over one of two transports, selected at construction:
//!
//! - **Bit-banged**: data and clock GPIOs driven in software.
//! - **Hardware SPI**: byte timing delegated to the SPI peripheral.
//!
//! ## Packing
//!
//! Bit `n` lives in byte `n / 8` at bit position `n % 8` (LSB first within
//! a byte). A 16-output bank with outputs 0 and 8 on therefore holds
//! `[0x01, 0x01]`.
//!
//! ## Wire order
//!
//! Bytes go out in ascending index order, MSB-first within each byte. That
//! is the shift direction of a 74HC595 chain: the first bit clocked in
//! ends up furthest down the chain.
//!
//! ## Transfer protocol
//!
//! 1. (hardware transport) acquire the bus
//! 2. latch LOW
//! 3. shift every packed byte
//! 4. latch HIGH, the commit instant
//! 5. (hardware transport) release the bus
//!
//! Outputs hold their previous state for the whole transfer window; the
//! chain only ever exposes complete frames.

use log::{info, trace};

use crate::config::{BankConfig, TransportConfig};
use crate::error::{Error, Result};
use crate::ports::{LinkPort, PinState};

/// Largest packed buffer a bank can need: 255 outputs round up to 32 bytes.
pub const MAX_PACKED_BYTES: usize = 32;

/// Bytes needed to hold `size` bits.
const fn packed_len(size: u8) -> usize {
    (size as usize).div_ceil(8)
}

// ───────────────────────────────────────────────────────────────
// Transport selection
// ───────────────────────────────────────────────────────────────

/// How bits reach the chain. Fixed for the lifetime of the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Software-driven data/clock edges on plain GPIOs.
    BitBang { data_pin: i32, clock_pin: i32 },
    /// Byte transfer via the SPI peripheral attached to the link.
    HardwareSpi,
}

// ───────────────────────────────────────────────────────────────
// Bank driver
// ───────────────────────────────────────────────────────────────

/// Driver for one contiguous chain of serially-loaded outputs.
///
/// All hardware access goes through the injected [`LinkPort`], so every
/// byte and pin edge the bank produces is observable in host tests.
pub struct ActuatorBank<L: LinkPort> {
    link: L,
    transport: Transport,
    latch_pin: i32,
    size: u8,
    bits: heapless::Vec<u8, MAX_PACKED_BYTES>,
    auto_update: bool,
    initialized: bool,
}

impl<L: LinkPort> ActuatorBank<L> {
    /// Bank clocked in software over `data_pin`/`clock_pin`.
    ///
    /// Auto-update starts enabled.
    pub fn bit_banged(link: L, data_pin: i32, clock_pin: i32, latch_pin: i32, size: u8) -> Self {
        Self::with_transport(link, Transport::BitBang { data_pin, clock_pin }, latch_pin, size)
    }

    /// Bank clocked by the SPI peripheral attached to the link.
    ///
    /// Auto-update starts enabled.
    pub fn hardware_spi(link: L, latch_pin: i32, size: u8) -> Self {
        Self::with_transport(link, Transport::HardwareSpi, latch_pin, size)
    }

    /// Bank built from a validated [`BankConfig`].
    pub fn from_config(link: L, cfg: &BankConfig) -> Self {
        let transport = match cfg.transport {
            TransportConfig::BitBang { data_gpio, clock_gpio } => Transport::BitBang {
                data_pin: data_gpio,
                clock_pin: clock_gpio,
            },
            TransportConfig::HardwareSpi => Transport::HardwareSpi,
        };
        let mut bank = Self::with_transport(link, transport, cfg.latch_gpio, cfg.size);
        bank.auto_update = cfg.auto_update;
        bank
    }

    fn with_transport(link: L, transport: Transport, latch_pin: i32, size: u8) -> Self {
        Self {
            link,
            transport,
            latch_pin,
            size,
            bits: heapless::Vec::new(),
            auto_update: true,
            initialized: false,
        }
    }

    /// Configure the pins, size the packed buffer and drive the chain to
    /// all-off. Must be called before any mutation; mutations on an
    /// uninitialised bank are silent no-ops.
    pub fn init(&mut self) -> Result<()> {
        if let Transport::BitBang { data_pin, clock_pin } = self.transport {
            self.link.gpio_init_output(data_pin)?;
            self.link.gpio_init_output(clock_pin)?;
        }
        self.link.gpio_init_output(self.latch_pin)?;
        // Latch idles high; outputs commit on its rising edge.
        self.link.gpio_write(self.latch_pin, PinState::High);

        if self.transport == Transport::HardwareSpi && !self.link.spi_ready() {
            return Err(Error::SpiUnavailable);
        }

        let len = packed_len(self.size);
        self.bits.clear();
        self.bits
            .resize(len, 0)
            .map_err(|()| Error::Config("packed buffer overflow"))?;
        self.initialized = true;

        info!(
            "bank: {} outputs in {} byte(s), transport {:?}",
            self.size, len, self.transport
        );

        // Known state on the wire. Under auto-update this is also the
        // first transfer.
        self.clear_all();
        Ok(())
    }

    /// Set or clear one output. Out-of-range indices are silently ignored,
    /// and ignored writes never trigger a transfer.
    pub fn set(&mut self, index: u8, on: bool) {
        if !self.initialized {
            return;
        }
        let i = index as usize;
        if i >= self.size as usize {
            return;
        }
        let mask = 1u8 << (i % 8);
        if on {
            self.bits[i / 8] |= mask;
        } else {
            self.bits[i / 8] &= !mask;
        }
        if self.auto_update {
            self.transfer();
        }
    }

    /// Clear one output. Equivalent to `set(index, false)`.
    pub fn clear(&mut self, index: u8) {
        self.set(index, false);
    }

    /// Clear every output.
    pub fn clear_all(&mut self) {
        if !self.initialized {
            return;
        }
        self.bits.fill(0);
        if self.auto_update {
            self.transfer();
        }
    }

    /// Push the current packed state to the chain unconditionally. The
    /// escape hatch for batched mutations with auto-update off.
    pub fn update(&mut self) {
        if !self.initialized {
            return;
        }
        self.transfer();
    }

    /// Enable or disable transfer-on-mutation. Takes effect from the next
    /// mutation; re-enabling does not itself flush staged state, call
    /// [`update`](Self::update) for that.
    pub fn set_auto_update(&mut self, enabled: bool) {
        self.auto_update = enabled;
    }

    /// Read back one output from the packed state. Out-of-range indices
    /// (and reads before `init`) return `false`.
    pub fn get(&self, index: u8) -> bool {
        let i = index as usize;
        if !self.initialized || i >= self.size as usize {
            return false;
        }
        self.bits[i / 8] & (1 << (i % 8)) != 0
    }

    /// Number of logical outputs.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Packed buffer length in bytes (zero before `init`).
    pub fn byte_len(&self) -> usize {
        self.bits.len()
    }

    /// Snapshot of the packed state as it would go on the wire.
    pub fn packed_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Current transfer-on-mutation policy.
    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Transport this bank was constructed with.
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// The underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    // ── Transfer path ─────────────────────────────────────────

    /// One complete frame: latch low, every byte in ascending order,
    /// latch high. The hardware transport brackets the frame in an
    /// exclusive bus window.
    fn transfer(&mut self) {
        match self.transport {
            Transport::BitBang { data_pin, clock_pin } => {
                self.link.gpio_write(self.latch_pin, PinState::Low);
                for i in 0..self.bits.len() {
                    let byte = self.bits[i];
                    self.shift_byte(data_pin, clock_pin, byte);
                }
                self.link.gpio_write(self.latch_pin, PinState::High);
            }
            Transport::HardwareSpi => {
                self.link.spi_acquire();
                self.link.gpio_write(self.latch_pin, PinState::Low);
                for &byte in &self.bits {
                    self.link.spi_transfer(byte);
                }
                self.link.gpio_write(self.latch_pin, PinState::High);
                self.link.spi_release();
            }
        }
        trace!("bank transfer {} byte(s): {:02X?}", self.bits.len(), &self.bits[..]);
    }

    /// Bit-bang one byte MSB-first: present the data level, pulse the
    /// clock high then low. Registers sample data on the rising edge.
    fn shift_byte(&mut self, data_pin: i32, clock_pin: i32, byte: u8) {
        for bit in (0..8).rev() {
            let level = byte & (1 << bit) != 0;
            self.link.gpio_write(data_pin, PinState::from(level));
            self.link.gpio_write(clock_pin, PinState::High);
            self.link.gpio_write(clock_pin, PinState::Low);
        }
    }
}
