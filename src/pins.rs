//! GPIO / peripheral pin assignments for the relay bank controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.
//!
//! The board carries a chain of 74HC595 shift registers feeding relay
//! drivers. The chain can be clocked two ways, selected at build time by
//! which transport the bank is constructed with:
//!
//! | Signal | Bit-banged  | Hardware SPI        |
//! |--------|-------------|---------------------|
//! | data   | `BANK_DATA` | MOSI (SPI2 routing) |
//! | clock  | `BANK_CLOCK`| SCLK (SPI2 routing) |
//! | latch  | `BANK_LATCH`| `BANK_LATCH`        |

// ---------------------------------------------------------------------------
// Shift-register chain, bit-banged signals
// ---------------------------------------------------------------------------

/// Serial data into the first register of the chain (74HC595 DS).
pub const BANK_DATA_GPIO: i32 = 4;
/// Shift clock (74HC595 SHCP). One rising edge per bit.
pub const BANK_CLOCK_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Shift-register chain, shared signals
// ---------------------------------------------------------------------------

/// Storage-register clock (74HC595 STCP). Rising edge commits the shifted
/// bits to the output pins. Idles HIGH; held LOW for the whole transfer.
pub const BANK_LATCH_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Hardware SPI routing (SPI2 / FSPI on ESP32-S3)
// ---------------------------------------------------------------------------

/// SPI2 SCLK, wired to the chain's shift clock when using the hardware
/// transport.
pub const SPI_SCLK_GPIO: i32 = 12;
/// SPI2 MOSI, wired to the chain's serial data input.
pub const SPI_MOSI_GPIO: i32 = 11;

/// SPI clock rate for the chain. 74HC595 registers are comfortable well
/// above this; 8 MHz keeps ringing manageable on the relay-board ribbon.
pub const SPI_CLOCK_HZ: u32 = 8_000_000;
