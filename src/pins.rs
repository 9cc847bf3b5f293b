// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin and pin-mux definitions for the SAMD21G18A on the Arduino Zero.
//!
//! Every pin a peripheral table references is named here as a [`Pinmux`]
//! constant, following the vendor naming scheme `<pin><mux>_<signal>`
//! (e.g. [`PA12D_SERCOM4_PAD0`] routes PA12 through mux function D to
//! SERCOM4's PAD0). The tables themselves live in the peripheral modules.

/// GPIO port banks present on the SAMD21G18A.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

/// A physical pin: port bank plus pin number within the bank.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Pin {
    pub port: Port,
    pub num: u8,
}

impl Pin {
    pub const fn pa(num: u8) -> Self {
        Self { port: Port::A, num }
    }

    pub const fn pb(num: u8) -> Self {
        Self { port: Port::B, num }
    }

    /// Flat pin identifier as the silicon counts them (32 pins per bank).
    pub const fn id(self) -> u8 {
        let bank = match self.port {
            Port::A => 0,
            Port::B => 1,
        };
        bank * 32 + self.num
    }
}

/// Peripheral multiplexer function, datasheet table 7-1.
///
/// SERCOM signals sit on functions C and D; which one applies is a property
/// of the pin, so the constants below carry it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MuxFunction {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// One pin routed to one peripheral signal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Pinmux {
    pub pin: Pin,
    pub function: MuxFunction,
}

impl Pinmux {
    pub const fn new(pin: Pin, function: MuxFunction) -> Self {
        Self { pin, function }
    }

    /// Vendor-header encoding, `(pin_id << 16) | mux`, for handing the
    /// routing to the HAL unchanged.
    pub const fn raw(self) -> u32 {
        ((self.id() as u32) << 16) | self.function as u32
    }

    pub const fn id(self) -> u8 {
        self.pin.id()
    }
}

// SERCOM4 on the ICSP header.
pub const PA12D_SERCOM4_PAD0: Pinmux = Pinmux::new(Pin::pa(12), MuxFunction::D);
pub const PB10D_SERCOM4_PAD2: Pinmux = Pinmux::new(Pin::pb(10), MuxFunction::D);
pub const PB11D_SERCOM4_PAD3: Pinmux = Pinmux::new(Pin::pb(11), MuxFunction::D);

// SERCOM0, shared with the SWD debug interface.
pub const PA04D_SERCOM0_PAD0: Pinmux = Pinmux::new(Pin::pa(4), MuxFunction::D);
pub const PA05D_SERCOM0_PAD1: Pinmux = Pinmux::new(Pin::pa(5), MuxFunction::D);
pub const PA06D_SERCOM0_PAD2: Pinmux = Pinmux::new(Pin::pa(6), MuxFunction::D);
pub const PA07D_SERCOM0_PAD3: Pinmux = Pinmux::new(Pin::pa(7), MuxFunction::D);

// SERCOM5, the board's I2C header.
pub const PA22D_SERCOM5_PAD0: Pinmux = Pinmux::new(Pin::pa(22), MuxFunction::D);
pub const PA23D_SERCOM5_PAD1: Pinmux = Pinmux::new(Pin::pa(23), MuxFunction::D);

// SERCOM2, console UART to the EDBG bridge.
pub const PA10D_SERCOM2_PAD2: Pinmux = Pinmux::new(Pin::pa(10), MuxFunction::D);
pub const PA11D_SERCOM2_PAD3: Pinmux = Pinmux::new(Pin::pa(11), MuxFunction::D);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pin_ids_count_32_per_bank() {
        assert_eq!(Pin::pa(12).id(), 12);
        assert_eq!(Pin::pb(10).id(), 42);
        assert_eq!(Pin::pb(11).id(), 43);
    }

    #[test]
    fn raw_matches_vendor_encoding() {
        // PINMUX_PA12D_SERCOM4_PAD0 in the vendor headers is
        // (PIN_PA12 << 16) | MUX_PA12D, with mux function D = 3.
        assert_eq!(PA12D_SERCOM4_PAD0.raw(), (12 << 16) | 3);
        assert_eq!(PB11D_SERCOM4_PAD3.raw(), (43 << 16) | 3);
    }
}
