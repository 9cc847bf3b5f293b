// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board bring-up.
//!
//! [`init`] walks the peripherals enabled for this image in a fixed order
//! and hands each one's static configuration to the HAL. The order (UART,
//! then SPI, then I2C) is stable but nothing depends on it; no peripheral
//! here needs another one up first.

use crate::hal::Hal;

/// Bring up every peripheral compiled into this board image.
///
/// Call once during system startup, before the scheduler runs anything
/// else; calling it a second time is unsupported. A peripheral that fails
/// to come up halts the system: after `init` returns, everything enabled
/// is usable, with no partial bring-up state to observe.
pub fn init<H: Hal>(hal: &mut H) {
    #[cfg(feature = "uart-console")]
    {
        use crate::hal::InitStage;
        use crate::uart::{CONSOLE_UART, UART_CONFIGS};

        if let Err(err) = hal.register_uart(CONSOLE_UART, InitStage::Primary, 0, &UART_CONFIGS[0]) {
            fatal("console uart", err);
        }
        log::debug!("registered {} on SERCOM2", CONSOLE_UART);
    }

    #[cfg(feature = "spi-icsp")]
    {
        use crate::spi::{ICSP_SPI_CONFIG, SPI_ICSP, SPI_XFER_MODE};

        if let Err(err) = hal.spi_init(SPI_ICSP, &ICSP_SPI_CONFIG, SPI_XFER_MODE) {
            fatal("icsp spi", err);
        }
        log::debug!("icsp spi up ({:?})", SPI_XFER_MODE);
    }

    #[cfg(feature = "spi-alt")]
    {
        use crate::spi::{ALT_SPI_CONFIG, SPI_ALT, SPI_XFER_MODE};

        if let Err(err) = hal.spi_init(SPI_ALT, &ALT_SPI_CONFIG, SPI_XFER_MODE) {
            fatal("alt spi", err);
        }
        log::debug!("alt spi up, debug interface pins repurposed");
    }

    #[cfg(feature = "i2c")]
    {
        use crate::i2c::{I2C_BUS, I2C_CONFIG};

        if let Err(err) = hal.i2c_init(I2C_BUS, &I2C_CONFIG) {
            fatal("i2c", err);
        }
        log::debug!("i2c up on SERCOM{}", I2C_BUS);
    }

    #[cfg(not(any(
        feature = "uart-console",
        feature = "spi-icsp",
        feature = "spi-alt",
        feature = "i2c"
    )))]
    let _ = hal;
}

/// An enabled peripheral that cannot come up leaves the system unusable;
/// halt instead of continuing half-configured.
#[cfg(any(
    feature = "uart-console",
    feature = "spi-icsp",
    feature = "spi-alt",
    feature = "i2c"
))]
fn fatal(what: &str, err: crate::hal::HalError) -> ! {
    panic!("{} init failed: {}", what, err)
}
