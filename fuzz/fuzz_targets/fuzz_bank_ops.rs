//! Fuzz target: `ActuatorBank` operation stream
//!
//! Interprets arbitrary bytes as a sequence of bank operations and asserts
//! the core invariants hold under any interleaving: the packed buffer never
//! changes length after init, out-of-range indices never read back set, and
//! the latch level strictly alternates (no torn commit windows).
//!
//! cargo fuzz run fuzz_bank_ops

#![no_main]

use libfuzzer_sys::fuzz_target;
use relaybank::bank::ActuatorBank;
use relaybank::error::Result;
use relaybank::ports::{LinkPort, PinState};

const LATCH: i32 = 10;

/// Link that enforces latch alternation on every write.
struct CheckedLink {
    latch_high: bool,
    transfers: u64,
}

impl LinkPort for CheckedLink {
    fn gpio_init_output(&mut self, _pin: i32) -> Result<()> {
        Ok(())
    }

    fn gpio_write(&mut self, pin: i32, state: PinState) {
        if pin == LATCH {
            let high = state == PinState::High;
            assert_ne!(self.latch_high, high, "latch level must alternate");
            self.latch_high = high;
            if !high {
                self.transfers += 1;
            }
        }
    }

    fn spi_ready(&self) -> bool {
        false
    }
    fn spi_acquire(&mut self) {}
    fn spi_transfer(&mut self, _byte: u8) {}
    fn spi_release(&mut self) {}
}

fuzz_target!(|data: &[u8]| {
    let mut bytes = data.iter().copied();
    let Some(size) = bytes.next() else { return };

    let link = CheckedLink {
        latch_high: false,
        transfers: 0,
    };
    let mut bank = ActuatorBank::bit_banged(link, 4, 5, LATCH, size);
    bank.init().expect("init cannot fail on this link");
    let byte_len = bank.byte_len();

    while let (Some(op), Some(arg)) = (bytes.next(), bytes.next()) {
        match op % 5 {
            0 => bank.set(arg, true),
            1 => bank.set(arg, false),
            2 => bank.clear_all(),
            3 => bank.update(),
            _ => bank.set_auto_update(arg % 2 == 0),
        }
        assert_eq!(bank.byte_len(), byte_len, "buffer length is fixed at init");
    }

    // Index `size` is always out of range and must read back clear.
    assert!(!bank.get(size));

    // One more explicit commit: the latch must settle back high.
    bank.update();
    assert!(bank.link().latch_high, "latch idles high between frames");
    assert!(bank.link().transfers >= 1, "init commits the all-off frame");
});
