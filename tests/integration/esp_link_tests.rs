//! Host smoke tests for the ESP link adapter's simulation surface.
//!
//! The sim accepts every call and logs trace breadcrumbs; these tests pin
//! down the one behavioral contract it shares with the real adapter: SPI
//! readiness gates hardware-clocked banks.

#![cfg(not(target_os = "espidf"))]

use relaybank::adapters::esp_link::EspLink;
use relaybank::bank::ActuatorBank;
use relaybank::error::Error;

#[test]
fn bitbang_bank_runs_over_sim_link() {
    let mut bank = ActuatorBank::bit_banged(EspLink::new(), 4, 5, 10, 16);
    bank.init().unwrap();
    bank.set(3, true);
    bank.update();
    assert!(bank.get(3));
    assert_eq!(bank.byte_len(), 2);
}

#[test]
fn hardware_bank_without_bus_refuses_init() {
    let mut bank = ActuatorBank::hardware_spi(EspLink::new(), 10, 16);
    assert_eq!(bank.init(), Err(Error::SpiUnavailable));
}

#[test]
fn hardware_bank_with_bus_initialises() {
    let mut bank = ActuatorBank::hardware_spi(EspLink::with_spi(), 10, 16);
    assert_eq!(bank.init(), Ok(()));
    bank.set(0, true);
    bank.clear_all();
    assert!(!bank.get(0));
}
