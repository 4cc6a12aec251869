// SPDX-License-Identifier: MIT
//! MINIX V3 inode

use core::fmt;

use time::OffsetDateTime;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fs::minix::{attr::MinixMode, constant::*};

/// On-disk MINIX V3 inode (64 bytes).
#[derive(Debug, Clone, Copy, Default, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C, packed)]
pub struct RawInode {
    pub i_mode: u16,
    pub i_nlinks: u16,
    pub i_uid: u16,
    pub i_gid: u16,
    pub i_size: u32,
    pub i_atime: i32,
    pub i_mtime: i32,
    pub i_ctime: i32,
    pub i_zone: [u32; MINIX_DIRECT_ZONES],
    pub i_indirect: u32,
    pub i_double_indirect: u32,
    pub i_unused: u32,
}

const _: () = assert!(core::mem::size_of::<RawInode>() == MINIX_INODE_SIZE as usize);

impl RawInode {
    pub fn to_decoded(&self, number: u32) -> Inode {
        let zones = self.i_zone;
        Inode {
            number,
            mode: MinixMode::from_raw(u16::from_le(self.i_mode)),
            links: u16::from_le(self.i_nlinks),
            uid: u16::from_le(self.i_uid),
            gid: u16::from_le(self.i_gid),
            size: u32::from_le(self.i_size),
            atime: i32::from_le(self.i_atime),
            mtime: i32::from_le(self.i_mtime),
            ctime: i32::from_le(self.i_ctime),
            zones: zones.map(u32::from_le),
            indirect: u32::from_le(self.i_indirect),
            double_indirect: u32::from_le(self.i_double_indirect),
        }
    }

    pub fn from_decoded(inode: &Inode) -> Self {
        Self {
            i_mode: inode.mode.bits().to_le(),
            i_nlinks: inode.links.to_le(),
            i_uid: inode.uid.to_le(),
            i_gid: inode.gid.to_le(),
            i_size: inode.size.to_le(),
            i_atime: inode.atime.to_le(),
            i_mtime: inode.mtime.to_le(),
            i_ctime: inode.ctime.to_le(),
            i_zone: inode.zones.map(u32::to_le),
            i_indirect: inode.indirect.to_le(),
            i_double_indirect: inode.double_indirect.to_le(),
            i_unused: 0,
        }
    }
}

/// Decoded inode, tagged with the number it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inode {
    pub number: u32,
    pub mode: MinixMode,
    pub links: u16,
    pub uid: u16,
    pub gid: u16,
    pub size: u32,
    pub atime: i32,
    pub mtime: i32,
    pub ctime: i32,
    pub zones: [u32; MINIX_DIRECT_ZONES],
    pub indirect: u32,
    pub double_indirect: u32,
}

impl Inode {
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    #[inline]
    pub fn has_dir_bit(&self) -> bool {
        self.mode.has_dir_bit()
    }

    /// Number of 64-byte directory slots covered by `size`, a partial tail counting as one.
    #[inline]
    pub fn dirent_slots(&self) -> u64 {
        (self.size as u64).div_ceil(MINIX_DIRENT_SIZE)
    }
}

fn write_time(f: &mut fmt::Formatter<'_>, label: &str, secs: i32) -> fmt::Result {
    match OffsetDateTime::from_unix_timestamp(secs as i64) {
        Ok(t) => writeln!(f, "  {label} {secs:>12} --- {t}"),
        Err(_) => writeln!(f, "  {label} {secs:>12}"),
    }
}

impl fmt::Display for Inode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File inode {}:", self.number)?;
        writeln!(
            f,
            "  uint16_t mode {:>#10o} ({})",
            self.mode.bits(),
            self.mode.permission_string()
        )?;
        writeln!(f, "  uint16_t links {:>9}", self.links)?;
        writeln!(f, "  uint16_t uid {:>11}", self.uid)?;
        writeln!(f, "  uint16_t gid {:>11}", self.gid)?;
        writeln!(f, "  uint32_t size {:>10}", self.size)?;
        write_time(f, "uint32_t atime", self.atime)?;
        write_time(f, "uint32_t mtime", self.mtime)?;
        write_time(f, "uint32_t ctime", self.ctime)?;
        writeln!(f)?;
        writeln!(f, "  Direct zones:")?;
        for (i, zone) in self.zones.iter().enumerate() {
            writeln!(f, "    zone[{i}] = {zone:>10}")?;
        }
        writeln!(f, "  uint32_t indirect {:>9}", self.indirect)?;
        write!(f, "  uint32_t double {:>11}", self.double_indirect)
    }
}
