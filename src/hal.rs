// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The call contract between this board layer and the OS/HAL it runs under.
//!
//! The board owns no driver logic. It hands its static configuration tables
//! to whatever implements [`Hal`]: the real device registry and controller
//! drivers in firmware, or a recording stub in host tests.

use core::fmt;

use crate::i2c::I2cConfig;
use crate::spi::{SpiBus, SpiConfig, XferMode};
use crate::uart::UartConfig;

/// Nonzero status code from a failed HAL call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct HalError(pub i32);

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.0)
    }
}

/// When during system bring-up the registry initializes a registered device.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum InitStage {
    Kernel,
    Primary,
    Secondary,
}

/// Operations the board layer needs from the OS/HAL.
///
/// Configuration references are `'static`: every table lives for the life of
/// the image and implementations may keep the pointer.
pub trait Hal {
    /// Register a UART device under `name` with the device registry. The
    /// name outlives the call; the registry indexes by it.
    fn register_uart(
        &mut self,
        name: &'static str,
        stage: InitStage,
        priority: u8,
        cfg: &'static UartConfig,
    ) -> Result<(), HalError>;

    /// Configure a SERCOM instance as an SPI controller.
    fn spi_init(
        &mut self,
        bus: SpiBus,
        cfg: &'static SpiConfig,
        mode: XferMode,
    ) -> Result<(), HalError>;

    /// Configure a SERCOM instance as an I2C controller.
    fn i2c_init(&mut self, bus: u8, cfg: &'static I2cConfig) -> Result<(), HalError>;
}
