// SPDX-License-Identifier: MIT

use core::fmt;

use mxio::{MinIO, MinIOStructExt};

use crate::{
    core::{FsError, FsResult, ReadContext},
    ensure,
    fs::minix::{constant::*, types::{RawSuperblock, Superblock}},
};

/// Reads and decodes the superblock of the filesystem starting at `partition_offset`.
///
/// Fails with [`FsError::BadMagic`] unless the magic is `0x4D5A`.
pub fn read_superblock<IO: MinIO + ?Sized>(
    io: &mut IO,
    partition_offset: u64,
) -> FsResult<Superblock> {
    let offset = partition_offset + MINIX_SUPERBLOCK_OFFSET;
    let raw: RawSuperblock = io.read_struct(offset).at(offset)?;
    let sb = raw.to_decoded();
    ensure!(
        sb.magic == MINIX_MAGIC,
        FsError::BadMagic {
            offset,
            found: sb.magic
        }
    );
    Ok(sb)
}

/// Absolute offset of the inode table: boot block, superblock, then both bitmaps.
pub fn inode_table_offset(sb: &Superblock, partition_offset: u64) -> u64 {
    let blocks = MINIX_BOOT_AND_SUPER_BLOCKS
        + sb.inode_bitmap_blocks as u64
        + sb.zone_bitmap_blocks as u64;
    partition_offset + sb.block_size as u64 * blocks
}

/// Superblock plus the geometry derived from it, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinixMeta {
    pub partition_offset: u64,
    pub superblock: Superblock,
    pub block_size: u32,
    pub zone_size: u32,
    pub inode_table_offset: u64,
}

impl MinixMeta {
    pub fn from_io<IO: MinIO + ?Sized>(io: &mut IO, partition_offset: u64) -> FsResult<Self> {
        let sb = read_superblock(io, partition_offset)?;
        Self::from_superblock(sb, partition_offset)
    }

    pub fn from_superblock(sb: Superblock, partition_offset: u64) -> FsResult<Self> {
        ensure!(sb.block_size != 0, FsError::InvalidGeometry("Block size is zero"));
        ensure!(
            sb.block_size as u64 % MINIX_DIRENT_SIZE == 0,
            FsError::InvalidGeometry("Block size is not a multiple of 64")
        );
        ensure!(
            sb.inode_bitmap_blocks >= 0 && sb.zone_bitmap_blocks >= 0,
            FsError::InvalidGeometry("Negative bitmap block count")
        );
        let zone_size = sb
            .zone_size()
            .ok_or(FsError::InvalidGeometry("Zone size shift out of range"))?;

        Ok(Self {
            partition_offset,
            superblock: sb,
            block_size: sb.block_size as u32,
            zone_size,
            inode_table_offset: inode_table_offset(&sb, partition_offset),
        })
    }

    #[inline]
    pub fn inode_count(&self) -> u32 {
        self.superblock.inode_count
    }

    /// Absolute offset of inode `number` (1-based).
    #[inline]
    pub fn inode_offset(&self, number: u32) -> u64 {
        self.inode_table_offset + (number as u64 - 1) * MINIX_INODE_SIZE
    }

    /// Absolute offset of zone `zone`; zones count from the partition start.
    #[inline]
    pub fn zone_offset(&self, zone: u32) -> u64 {
        self.partition_offset + zone as u64 * self.zone_size as u64
    }

    #[inline]
    pub fn dirents_per_zone(&self) -> u64 {
        self.zone_size as u64 / MINIX_DIRENT_SIZE
    }
}

impl fmt::Display for MinixMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sb = &self.superblock;
        let first_imap = MINIX_BOOT_AND_SUPER_BLOCKS;
        let first_zmap = first_imap + sb.inode_bitmap_blocks as u64;
        let first_iblock = first_zmap + sb.zone_bitmap_blocks as u64;

        writeln!(f, "{sb}")?;
        writeln!(f, "Computed Fields:")?;
        writeln!(f, "  version {:>12}", 3)?;
        writeln!(f, "  firstImap {:>10}", first_imap)?;
        writeln!(f, "  firstZmap {:>10}", first_zmap)?;
        writeln!(f, "  firstIblock {:>8}", first_iblock)?;
        writeln!(f, "  zonesize {:>11}", self.zone_size)?;
        writeln!(f, "  ptrs_per_zone {:>6}", self.zone_size / 4)?;
        writeln!(f, "  ino_per_block {:>6}", self.block_size as u64 / MINIX_INODE_SIZE)?;
        writeln!(f, "  wrongended {:>9}", 0)?;
        writeln!(f, "  fileent_size {:>7}", MINIX_DIRENT_SIZE)?;
        write!(f, "  max_filename {:>7}", MINIX_NAME_LEN)
    }
}
