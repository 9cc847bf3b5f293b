// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console UART configuration.
//!
//! The Arduino Zero routes SERCOM2 to the EDBG USB bridge, which is the
//! console a host sees over the programming port. `init` registers it with
//! the device registry under [`CONSOLE_UART`].

use crate::pins::Pinmux;
#[cfg(feature = "uart-console")]
use crate::pins::{PA10D_SERCOM2_PAD2, PA11D_SERCOM2_PAD3};

/// Name the console UART registers under.
pub const CONSOLE_UART: &str = "uart0";

/// Receiver oversampling mode (rate and baud arithmetic).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum SampleRate {
    Arith16x,
    Fract16x,
    Arith8x,
    Fract8x,
    Arith3x,
}

/// Which three of the oversampled bits vote on the received bit value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum SampleAdjustment {
    Samples7_8_9,
    Samples9_10_11,
    Samples11_12_13,
    Samples13_14_15,
}

/// Static SERCOM-as-USART configuration.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct UartConfig {
    /// SERCOM instance backing the UART.
    pub sercom: u8,
    /// RXPO: pad carrying RX.
    pub rx_pad: u8,
    /// TXPO: pad group carrying TX.
    pub tx_pad: u8,
    /// GCLK generator clocking the SERCOM.
    pub gclk_gen: u8,
    pub sample_rate: SampleRate,
    pub sample_adjustment: SampleAdjustment,
    pub pad0: Option<Pinmux>,
    pub pad1: Option<Pinmux>,
    pub pad2: Option<Pinmux>,
    pub pad3: Option<Pinmux>,
}

/// UART instances on this board; index 0 is the console.
#[cfg(feature = "uart-console")]
pub static UART_CONFIGS: [UartConfig; 1] = [UartConfig {
    sercom: 2,
    rx_pad: 3,
    tx_pad: 2,
    gclk_gen: 0,
    sample_rate: SampleRate::Arith16x,
    sample_adjustment: SampleAdjustment::Samples7_8_9,
    pad0: None,
    pad1: None,
    pad2: Some(PA10D_SERCOM2_PAD2), // TX
    pad3: Some(PA11D_SERCOM2_PAD3), // RX
}];

#[cfg(all(test, feature = "uart-console"))]
mod test {
    use super::*;
    use crate::pins::Pin;

    #[test]
    fn console_is_sercom2_rx_pad3_tx_pad2() {
        let cfg = &UART_CONFIGS[0];
        assert_eq!(cfg.sercom, 2);
        assert_eq!(cfg.rx_pad, 3);
        assert_eq!(cfg.tx_pad, 2);
        assert_eq!(cfg.gclk_gen, 0);
        assert_eq!(cfg.pad2.unwrap().pin, Pin::pa(10));
        assert_eq!(cfg.pad3.unwrap().pin, Pin::pa(11));
        assert!(cfg.pad0.is_none() && cfg.pad1.is_none());
    }
}
