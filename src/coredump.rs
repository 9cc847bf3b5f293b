// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Memory regions the coredump subsystem captures after a crash.

use crate::{RAM_BASE, RAM_SIZE};

/// One contiguous memory range to include in a crash dump.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct DumpRegion {
    pub start: u32,
    pub size: u32,
}

// Everything worth capturing on this board: all of RAM.
static DUMP_REGIONS: [DumpRegion; 1] = [DumpRegion {
    start: RAM_BASE,
    size: RAM_SIZE,
}];

/// Regions to capture in a crash dump. Pure read of static data; callable
/// at any point, including from fault context.
pub fn core_dump_regions() -> &'static [DumpRegion] {
    &DUMP_REGIONS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dumps_exactly_the_ram() {
        let regions = core_dump_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, RAM_BASE);
        assert_eq!(regions[0].size, RAM_SIZE);
    }
}
