// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Flash device lookup for the flash-management subsystem.

use crate::{FLASH_BASE, FLASH_SIZE};

/// Geometry and identity of one flash device attached to the board.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct FlashDescriptor {
    pub base: u32,
    pub size: u32,
    /// Erase granularity. The SAMD21 NVM erases by row (4 pages).
    pub sector_size: u32,
    /// Write alignment in bytes.
    pub align: u8,
}

/// The SAMD21G18 internal NVM.
static INTERNAL_FLASH: FlashDescriptor = FlashDescriptor {
    base: FLASH_BASE,
    size: FLASH_SIZE,
    sector_size: 256,
    align: 4,
};

/// Look up the flash device behind a logical id.
///
/// Internal flash is mapped to id 0; the board has no other flash devices,
/// so every other id yields `None`.
pub fn flash_descriptor(id: u8) -> Option<&'static FlashDescriptor> {
    if id != 0 {
        return None;
    }

    Some(&INTERNAL_FLASH)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_zero_is_internal_flash() {
        let dev = flash_descriptor(0).unwrap();
        assert_eq!(dev.base, 0x0000_0000);
        assert_eq!(dev.size, 256 * 1024);
    }

    #[test]
    fn all_other_ids_are_absent() {
        for id in [1, 2, 7, u8::MAX] {
            assert!(flash_descriptor(id).is_none());
        }
    }
}
