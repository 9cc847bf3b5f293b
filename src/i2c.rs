// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! I2C bus configuration: SERCOM5 on the board's SDA/SCL header pins.

use crate::pins::Pinmux;
#[cfg(feature = "i2c")]
use crate::pins::{PA22D_SERCOM5_PAD0, PA23D_SERCOM5_PAD1};

/// SERCOM instance backing the I2C bus.
pub const I2C_BUS: u8 = 5;

/// Static SERCOM-as-I2C configuration. SDA sits on PAD0, SCL on PAD1; the
/// controller accepts no other routing.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct I2cConfig {
    pub sda: Pinmux,
    pub scl: Pinmux,
}

#[cfg(feature = "i2c")]
pub static I2C_CONFIG: I2cConfig = I2cConfig {
    sda: PA22D_SERCOM5_PAD0,
    scl: PA23D_SERCOM5_PAD1,
};

#[cfg(all(test, feature = "i2c"))]
mod test {
    use super::*;
    use crate::pins::Pin;

    #[test]
    fn i2c_header_pins() {
        assert_eq!(I2C_CONFIG.sda.pin, Pin::pa(22));
        assert_eq!(I2C_CONFIG.scl.pin, Pin::pa(23));
    }
}
