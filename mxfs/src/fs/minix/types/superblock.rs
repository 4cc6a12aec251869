// SPDX-License-Identifier: MIT
//! MINIX V3 superblock

use core::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fs::minix::constant::MINIX_MAX_LOG_ZONE_SIZE;

/// On-disk MINIX V3 superblock (the leading 31 bytes that matter for reading).
#[derive(Debug, Clone, Copy, Default, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C, packed)]
pub struct RawSuperblock {
    // 0x00
    /// Number of inodes
    pub s_ninodes: u32,
    pub s_pad1: u16,
    /// Blocks used by the inode bitmap
    pub s_imap_blocks: i16,
    /// Blocks used by the zone bitmap
    pub s_zmap_blocks: i16,
    /// First data zone
    pub s_firstdatazone: u16,
    // 0x0C
    /// log2 of blocks per zone
    pub s_log_zone_size: i16,
    pub s_pad2: i16,
    /// Maximum file size
    pub s_max_size: u32,
    // 0x14
    /// Number of zones
    pub s_zones: u32,
    /// Magic signature (0x4D5A)
    pub s_magic: i16,
    pub s_pad3: i16,
    // 0x1C
    pub s_blocksize: u16,
    pub s_disk_version: u8,
}

const _: () = assert!(core::mem::size_of::<RawSuperblock>() == 31);

impl RawSuperblock {
    pub fn to_decoded(&self) -> Superblock {
        Superblock {
            inode_count: u32::from_le(self.s_ninodes),
            inode_bitmap_blocks: i16::from_le(self.s_imap_blocks),
            zone_bitmap_blocks: i16::from_le(self.s_zmap_blocks),
            first_data_zone: u16::from_le(self.s_firstdatazone),
            log_zone_size: i16::from_le(self.s_log_zone_size),
            max_file_size: u32::from_le(self.s_max_size),
            zone_count: u32::from_le(self.s_zones),
            magic: i16::from_le(self.s_magic) as u16,
            block_size: u16::from_le(self.s_blocksize),
            subversion: self.s_disk_version,
        }
    }

    pub fn from_decoded(sb: &Superblock) -> Self {
        Self {
            s_ninodes: sb.inode_count.to_le(),
            s_imap_blocks: sb.inode_bitmap_blocks.to_le(),
            s_zmap_blocks: sb.zone_bitmap_blocks.to_le(),
            s_firstdatazone: sb.first_data_zone.to_le(),
            s_log_zone_size: sb.log_zone_size.to_le(),
            s_max_size: sb.max_file_size.to_le(),
            s_zones: sb.zone_count.to_le(),
            s_magic: (sb.magic as i16).to_le(),
            s_blocksize: sb.block_size.to_le(),
            s_disk_version: sb.subversion,
            ..Default::default()
        }
    }
}

/// Decoded superblock, host byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Superblock {
    pub inode_count: u32,
    pub inode_bitmap_blocks: i16,
    pub zone_bitmap_blocks: i16,
    pub first_data_zone: u16,
    pub log_zone_size: i16,
    pub max_file_size: u32,
    pub zone_count: u32,
    pub magic: u16,
    pub block_size: u16,
    pub subversion: u8,
}

impl fmt::Display for Superblock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Superblock Contents:")?;
        writeln!(f, "Stored Fields:")?;
        writeln!(f, "  ninodes {:>12}", self.inode_count)?;
        writeln!(f, "  i_blocks {:>11}", self.inode_bitmap_blocks)?;
        writeln!(f, "  z_blocks {:>11}", self.zone_bitmap_blocks)?;
        writeln!(f, "  firstdata {:>10}", self.first_data_zone)?;
        writeln!(
            f,
            "  log_zone_size {:>6} (zone size: {})",
            self.log_zone_size,
            self.zone_size()
                .map_or_else(|| "invalid".to_string(), |z| z.to_string())
        )?;
        writeln!(f, "  max_file {:>11}", self.max_file_size)?;
        writeln!(f, "  magic {:>14}", format!("{:#06x}", self.magic))?;
        writeln!(f, "  zones {:>14}", self.zone_count)?;
        writeln!(f, "  blocksize {:>10}", self.block_size)?;
        write!(f, "  subversion {:>9}", self.subversion)
    }
}

impl Superblock {
    /// `block_size << log_zone_size`, or `None` if the shift is out of range.
    pub fn zone_size(&self) -> Option<u32> {
        if !(0..=MINIX_MAX_LOG_ZONE_SIZE).contains(&self.log_zone_size) {
            return None;
        }
        (self.block_size as u32).checked_shl(self.log_zone_size as u32)
    }
}
