//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to                 |
//! |------------|------------|-----------------------------|
//! | `esp_link` | LinkPort   | ESP32 GPIO, SPI2 peripheral |

pub mod esp_link;
