// SPDX-License-Identifier: MIT

use core::fmt;

use crate::DEFAULT_SECTOR_SIZE;
use crate::errors::*;
use crate::io_ext::{MinIOLbaExt, lba_offset};
use mxio::prelude::*;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub const MBR_SIGNATURE: [u8; 2] = [0x55, 0xAA];
/// Byte offset of the partition table inside its sector.
pub const MBR_TABLE_OFFSET: usize = 0x1BE;
pub const NR_PARTITIONS: usize = 4;
/// Partition type byte used by MINIX.
pub const MINIX_PART_TYPE: u8 = 0x81;
pub const NO_PART_TYPE: u8 = 0x00;

/// Decoded partition table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct MbrEntry {
    pub boot_flag: u8,
    pub start_head: u8,
    pub start_sector: u8,
    pub start_cylinder: u8,
    pub part_type: u8,
    pub end_head: u8,
    pub end_sector: u8,
    pub end_cylinder: u8,
    /// First sector (absolute LBA).
    pub start_lba: u32,
    pub sectors: u32,
}

impl MbrEntry {
    #[inline]
    pub fn new_minix(start_lba: u32, sectors: u32) -> Self {
        Self {
            part_type: MINIX_PART_TYPE,
            start_lba,
            sectors,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.part_type == NO_PART_TYPE
    }

    #[inline]
    pub fn is_minix(&self) -> bool {
        self.part_type == MINIX_PART_TYPE
    }

    /// Absolute byte offset of the first sector.
    #[inline]
    pub fn byte_offset(&self) -> u64 {
        self.start_lba as u64 * DEFAULT_SECTOR_SIZE
    }
}

/// On-disk (16 bytes, little-endian) layout of [`MbrEntry`].
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Copy, Clone, Debug)]
#[repr(C, packed)]
pub struct MbrEntryPacked {
    pub boot_flag: u8,
    pub start_head: u8,
    pub start_sector: u8,
    pub start_cylinder: u8,
    pub part_type: u8,
    pub end_head: u8,
    pub end_sector: u8,
    pub end_cylinder: u8,
    pub start_lba: u32,
    pub sectors: u32,
}

impl MbrEntryPacked {
    #[inline]
    pub fn to_aligned(self) -> MbrEntry {
        MbrEntry {
            boot_flag: self.boot_flag,
            start_head: self.start_head,
            start_sector: self.start_sector,
            start_cylinder: self.start_cylinder,
            part_type: self.part_type,
            end_head: self.end_head,
            end_sector: self.end_sector,
            end_cylinder: self.end_cylinder,
            start_lba: u32::from_le(self.start_lba),
            sectors: u32::from_le(self.sectors),
        }
    }

    #[inline]
    pub fn from_aligned(e: &MbrEntry) -> Self {
        Self {
            boot_flag: e.boot_flag,
            start_head: e.start_head,
            start_sector: e.start_sector,
            start_cylinder: e.start_cylinder,
            part_type: e.part_type,
            end_head: e.end_head,
            end_sector: e.end_sector,
            end_cylinder: e.end_cylinder,
            start_lba: e.start_lba.to_le(),
            sectors: e.sectors.to_le(),
        }
    }
}

/// One 512-byte boot sector: boot code, four entries, signature.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Copy, Clone, Debug)]
#[repr(C, packed)]
pub struct Mbr {
    pub boot_code: [u8; MBR_TABLE_OFFSET],
    pub entries: [MbrEntryPacked; NR_PARTITIONS],
    pub signature: [u8; 2],
}

const _: () = assert!(core::mem::size_of::<Mbr>() == DEFAULT_SECTOR_SIZE as usize);
const _: () = assert!(core::mem::size_of::<MbrEntryPacked>() == 16);

impl Mbr {
    #[inline]
    pub fn new_from_entries(entries: [MbrEntry; NR_PARTITIONS]) -> Self {
        let packed = entries.map(|e| MbrEntryPacked::from_aligned(&e));
        Self {
            boot_code: [0u8; MBR_TABLE_OFFSET],
            entries: packed,
            signature: MBR_SIGNATURE,
        }
    }

    #[inline]
    pub fn has_valid_signature(&self) -> bool {
        self.signature == MBR_SIGNATURE
    }

    #[inline]
    pub fn aligned_entries(&self) -> [MbrEntry; NR_PARTITIONS] {
        let entries = self.entries;
        entries.map(MbrEntryPacked::to_aligned)
    }

    /// Entry at `index`, rejecting indices outside `0..=3`.
    #[inline]
    pub fn entry(&self, which: TableLevel, index: usize) -> PartResult<MbrEntry> {
        self.aligned_entries()
            .get(index)
            .copied()
            .ok_or(PartError::InvalidIndex { which, index })
    }

    /// Checks the boot signature of the sector this table was read from.
    #[inline]
    pub fn validate_header(&self, sector_offset: u64) -> PartResult<()> {
        if !self.has_valid_signature() {
            return Err(PartError::InvalidSignature {
                sector_offset,
                found: self.signature,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Mbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.aligned_entries().iter().enumerate() {
            if e.is_empty() {
                continue;
            }
            writeln!(f, "Entry {i}:")?;
            writeln!(f, "  bootind:    0x{:02X}", e.boot_flag)?;
            writeln!(f, "  start_head: {}", e.start_head)?;
            writeln!(f, "  start_sec:  {}", e.start_sector)?;
            writeln!(f, "  start_cyl:  {}", e.start_cylinder)?;
            writeln!(f, "  type:       0x{:02X}", e.part_type)?;
            writeln!(f, "  end_head:   {}", e.end_head)?;
            writeln!(f, "  end_sec:    {}", e.end_sector)?;
            writeln!(f, "  end_cyl:    {}", e.end_cylinder)?;
            writeln!(f, "  lFirst:     {}", e.start_lba)?;
            writeln!(f, "  size:       {}", e.sectors)?;
        }
        Ok(())
    }
}

/// Reads and validates the partition table stored in the sector at `lba`.
pub fn read_mbr_at_lba<IO: MinIO + ?Sized>(io: &mut IO, lba: u64) -> PartResult<Mbr> {
    let mbr: Mbr = io.read_struct_lba(lba, DEFAULT_SECTOR_SIZE)?;
    mbr.validate_header(lba_offset(lba, DEFAULT_SECTOR_SIZE)?)?;
    Ok(mbr)
}

pub fn read_mbr<IO: MinIO + ?Sized>(io: &mut IO) -> PartResult<Mbr> {
    read_mbr_at_lba(io, 0)
}
