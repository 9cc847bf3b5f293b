// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Arduino Zero Board Support
//!
//! Board support package for the Arduino Zero (ATSAMD21G18A, Cortex-M0+):
//! the board's static pin-mux and peripheral configuration, a single
//! [`init`] entry point that registers everything enabled for this image
//! with the OS/HAL, and lookups queried by the flash and coredump
//! subsystems.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`pins`] | SAMD21 pin-mux model and the board's named pin routings |
//! | [`uart`], [`spi`], [`i2c`] | Per-peripheral configuration tables |
//! | [`hal`] | Call contract to the device registry and controller drivers |
//! | [`init`](init()) | Feature-gated bring-up sequence |
//! | [`flash`], [`coredump`] | Static lookups for flash management and crash dumps |
//!
//! Which peripherals exist in the image is fixed at build time by Cargo
//! features (`uart-console`, `spi-icsp`, `spi-alt`, `i2c`); there is no
//! runtime configuration.
//!
//! ## License
//!
//! Licensed under the **MIT License**.

#![no_std]

#[cfg(feature = "rt")]
pub use cortex_m_rt::entry;

pub mod coredump;
pub mod flash;
pub mod hal;
pub mod i2c;
mod init;
pub mod pins;
pub mod spi;
pub mod uart;

pub use coredump::{core_dump_regions, DumpRegion};
pub use flash::{flash_descriptor, FlashDescriptor};
pub use hal::{Hal, HalError, InitStage};
pub use init::init;

/// On-chip SRAM as the linker sees it.
pub const RAM_BASE: u32 = 0x2000_0000;
pub const RAM_SIZE: u32 = 32 * 1024;

/// Internal NVM, mapped from address zero.
pub const FLASH_BASE: u32 = 0x0000_0000;
pub const FLASH_SIZE: u32 = 256 * 1024;
