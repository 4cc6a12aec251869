// SPDX-License-Identifier: MIT

use crate::fs::minix::{constant::*, types::Inode};

/// What a logical zone index of a file maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSlot {
    /// Physical zone number on the filesystem.
    Mapped(u32),
    /// Slot holds zone 0: nothing allocated.
    Hole,
}

/// Maps logical zone indices of one inode to physical zones.
///
/// Returning `None` means the index is beyond what this map can address.
pub trait ZoneMap {
    /// Number of logical zones addressable through this map.
    fn capacity(&self) -> usize;

    fn zone(&self, index: usize) -> Option<ZoneSlot>;
}

/// The seven direct zone pointers stored in the inode itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectZones {
    zones: [u32; MINIX_DIRECT_ZONES],
}

impl DirectZones {
    pub fn new(zones: [u32; MINIX_DIRECT_ZONES]) -> Self {
        Self { zones }
    }

    pub fn of(inode: &Inode) -> Self {
        Self::new(inode.zones)
    }
}

impl ZoneMap for DirectZones {
    #[inline]
    fn capacity(&self) -> usize {
        MINIX_DIRECT_ZONES
    }

    #[inline]
    fn zone(&self, index: usize) -> Option<ZoneSlot> {
        self.zones.get(index).map(|&z| match z {
            MINIX_NO_ZONE => ZoneSlot::Hole,
            z => ZoneSlot::Mapped(z),
        })
    }
}
