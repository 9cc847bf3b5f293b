// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SPI bus configuration for the Arduino Zero.
//!
//! Two buses exist, each compiled in by a feature:
//!
//! - `spi-icsp`: SERCOM4 on the ICSP header, the board's external SPI.
//! - `spi-alt`: SERCOM0 on PA04–PA07. These pins double as the SWD debug
//!   interface, so enabling this bus disables debugging.

use crate::pins::Pinmux;
#[cfg(feature = "spi-alt")]
use crate::pins::{PA04D_SERCOM0_PAD0, PA05D_SERCOM0_PAD1, PA06D_SERCOM0_PAD2, PA07D_SERCOM0_PAD3};
#[cfg(feature = "spi-icsp")]
use crate::pins::{PA12D_SERCOM4_PAD0, PB10D_SERCOM4_PAD2, PB11D_SERCOM4_PAD3};

/// A SERCOM instance used as an SPI controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SpiBus(pub u8);

/// The ICSP-header bus, SERCOM4.
pub const SPI_ICSP: SpiBus = SpiBus(4);

/// The alternate bus, SERCOM0.
pub const SPI_ALT: SpiBus = SpiBus(0);

/// How the controller driver moves data. Selected at build time and passed
/// through to the HAL untouched; the board layer attaches no meaning to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum XferMode {
    Polling,
    Interrupt,
    Dma,
}

/// Transfer mode both buses are initialized with, per the `spi-irq` /
/// `spi-dma` features. DMA wins if both are set.
#[cfg(feature = "spi-dma")]
pub const SPI_XFER_MODE: XferMode = XferMode::Dma;
#[cfg(all(feature = "spi-irq", not(feature = "spi-dma")))]
pub const SPI_XFER_MODE: XferMode = XferMode::Interrupt;
#[cfg(not(any(feature = "spi-irq", feature = "spi-dma")))]
pub const SPI_XFER_MODE: XferMode = XferMode::Polling;

/// Static SERCOM-as-SPI configuration: pad-group selection plus the pin
/// routing for each pad in use.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SpiConfig {
    /// Data-in pad selection (DIPO): which pad carries MISO.
    pub dipo: u8,
    /// Data-out pad-group selection (DOPO): which pads carry MOSI and SCK.
    pub dopo: u8,
    pub pad0: Option<Pinmux>,
    pub pad1: Option<Pinmux>,
    pub pad2: Option<Pinmux>,
    pub pad3: Option<Pinmux>,
}

/// ICSP bus: MISO on PAD0, SCK on PAD3, MOSI on PAD2.
#[cfg(feature = "spi-icsp")]
pub static ICSP_SPI_CONFIG: SpiConfig = SpiConfig {
    dipo: 0,
    dopo: 1,
    pad0: Some(PA12D_SERCOM4_PAD0), // MISO
    pad1: None,
    pad2: Some(PB10D_SERCOM4_PAD2), // MOSI
    pad3: Some(PB11D_SERCOM4_PAD3), // SCK
};

/// Alternate bus: MISO on PAD3, SCK on PAD1, MOSI on PAD0.
/// NOTE: using this overwrites the debug interface.
#[cfg(feature = "spi-alt")]
pub static ALT_SPI_CONFIG: SpiConfig = SpiConfig {
    dipo: 3,
    dopo: 0,
    pad0: Some(PA04D_SERCOM0_PAD0), // MOSI
    pad1: Some(PA05D_SERCOM0_PAD1), // SCK
    pad2: Some(PA06D_SERCOM0_PAD2),
    pad3: Some(PA07D_SERCOM0_PAD3), // MISO
};

#[cfg(test)]
mod test {
    use super::*;

    #[cfg(feature = "spi-icsp")]
    #[test]
    fn icsp_routes_miso_pad0_sck_pad3_mosi_pad2() {
        use crate::pins::Pin;

        assert_eq!(ICSP_SPI_CONFIG.dipo, 0);
        assert_eq!(ICSP_SPI_CONFIG.dopo, 1);
        assert_eq!(ICSP_SPI_CONFIG.pad0.unwrap().pin, Pin::pa(12));
        assert_eq!(ICSP_SPI_CONFIG.pad3.unwrap().pin, Pin::pb(11));
        assert_eq!(ICSP_SPI_CONFIG.pad2.unwrap().pin, Pin::pb(10));
        assert!(ICSP_SPI_CONFIG.pad1.is_none());
    }

    #[cfg(feature = "spi-alt")]
    #[test]
    fn alt_bus_uses_the_swd_pins() {
        use crate::pins::Pin;

        assert_eq!(ALT_SPI_CONFIG.dipo, 3);
        assert_eq!(ALT_SPI_CONFIG.dopo, 0);
        for (pad, pin) in [
            (ALT_SPI_CONFIG.pad0, Pin::pa(4)),
            (ALT_SPI_CONFIG.pad1, Pin::pa(5)),
            (ALT_SPI_CONFIG.pad2, Pin::pa(6)),
            (ALT_SPI_CONFIG.pad3, Pin::pa(7)),
        ] {
            assert_eq!(pad.unwrap().pin, pin);
        }
    }

    #[test]
    fn xfer_mode_tracks_features() {
        let expected = if cfg!(feature = "spi-dma") {
            XferMode::Dma
        } else if cfg!(feature = "spi-irq") {
            XferMode::Interrupt
        } else {
            XferMode::Polling
        };
        assert_eq!(SPI_XFER_MODE, expected);
    }
}
