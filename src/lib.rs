//! Chip-select control for SPI devices.
//!
//! A [`ChipSelect`] opens the bus transaction and asserts the device's CS line
//! on `select`, and releases both on `deselect`. [`TransferType`] lets a driver
//! keep CS asserted across several transactions, e.g. a command phase followed
//! by a data phase.
//!
//! Implementations:
//! - [`DummyChipSelect`]: no CS line at all.
//! - [`DebugChipSelect`]: reports each call to a [`DiagnosticSink`].
//! - [`ActiveLowChipSelect`]: drives a GPIO low while selected, on the bus
//!   given as its [`SpiTransactionBus`] type parameter. With the `rp235x`
//!   feature, `rp235x::ActiveLowChipSelect0` and `rp235x::ActiveLowChipSelect1`
//!   name the variants for the two controllers of the RP2350.
//!
//! [`ChipSelectDevice`] turns a raw `embedded_hal` bus plus a chip select into
//! an `embedded_hal::spi::SpiDevice`.
#![no_std]

#[cfg(any(test, feature = "mock"))]
extern crate std;

#[macro_use]
mod fmt;

mod bus;
mod chip_select;
#[cfg_attr(not(feature = "rp235x"), allow(dead_code))]
mod divider;
mod pin;
mod settings;
mod sink;
mod spi_device;
mod transfer;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(feature = "rp235x")]
pub mod rp235x;

pub use bus::SpiTransactionBus;
pub use chip_select::{ActiveLowChipSelect, ChipSelect, DebugChipSelect, DummyChipSelect};
pub use pin::{Configured, IntoOutputPin};
pub use settings::{BitOrder, SpiSettings};
#[cfg(feature = "defmt")]
pub use sink::DefmtSink;
pub use sink::{DiagnosticSink, IoSink};
pub use spi_device::{ChipSelectDevice, NoDelay};
pub use transfer::TransferType;
