//! Mock link for integration tests.
//!
//! Records every pin edge and SPI byte so tests can assert on the exact
//! wire sequence a transfer produced, without touching real registers.

use relaybank::error::{Error, Result};
use relaybank::ports::{LinkPort, PinState};

// ── Link call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCall {
    InitOutput { pin: i32 },
    Write { pin: i32, high: bool },
    SpiAcquire,
    SpiTransfer { byte: u8 },
    SpiRelease,
}

// ── MockLink ──────────────────────────────────────────────────

pub struct MockLink {
    pub calls: Vec<LinkCall>,
    pub spi_present: bool,
    pub fail_gpio_init: bool,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            spi_present: false,
            fail_gpio_init: false,
        }
    }

    pub fn with_spi() -> Self {
        Self {
            spi_present: true,
            ..Self::new()
        }
    }

    /// Calls recorded from the given index on.
    pub fn calls_since(&self, mark: usize) -> &[LinkCall] {
        &self.calls[mark..]
    }

    /// Bytes pushed through the SPI peripheral, in order.
    pub fn spi_bytes(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                LinkCall::SpiTransfer { byte } => Some(*byte),
                _ => None,
            })
            .collect()
    }

    /// Levels written to `pin`, in order.
    pub fn levels(&self, pin: i32) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                LinkCall::Write { pin: p, high } if p == pin => Some(high),
                _ => None,
            })
            .collect()
    }

    /// Completed transfers so far. Every frame holds the latch low exactly
    /// once, so counting falling edges counts frames.
    pub fn transfer_count(&self, latch_pin: i32) -> usize {
        self.calls
            .iter()
            .filter(|&&c| matches!(c, LinkCall::Write { pin, high: false } if pin == latch_pin))
            .count()
    }

    /// Reconstruct the bytes a bit-banged transfer shifted out: sample the
    /// data level at each clock rising edge and fold MSB-first.
    pub fn bit_banged_bytes(&self, data_pin: i32, clock_pin: i32) -> Vec<u8> {
        let mut sampled = Vec::new();
        let mut data_level = false;
        for &call in &self.calls {
            match call {
                LinkCall::Write { pin, high } if pin == data_pin => data_level = high,
                LinkCall::Write { pin, high: true } if pin == clock_pin => {
                    sampled.push(data_level);
                }
                _ => {}
            }
        }
        sampled
            .chunks(8)
            .map(|bits| bits.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
            .collect()
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPort for MockLink {
    fn gpio_init_output(&mut self, pin: i32) -> Result<()> {
        if self.fail_gpio_init {
            return Err(Error::GpioConfig(-1));
        }
        self.calls.push(LinkCall::InitOutput { pin });
        Ok(())
    }

    fn gpio_write(&mut self, pin: i32, state: PinState) {
        self.calls.push(LinkCall::Write {
            pin,
            high: state == PinState::High,
        });
    }

    fn spi_ready(&self) -> bool {
        self.spi_present
    }

    fn spi_acquire(&mut self) {
        self.calls.push(LinkCall::SpiAcquire);
    }

    fn spi_transfer(&mut self, byte: u8) {
        self.calls.push(LinkCall::SpiTransfer { byte });
    }

    fn spi_release(&mut self) {
        self.calls.push(LinkCall::SpiRelease);
    }
}
