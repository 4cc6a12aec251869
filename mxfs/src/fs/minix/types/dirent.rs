// SPDX-License-Identifier: MIT
//! MINIX V3 directory entry

use std::borrow::Cow;
use core::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fs::minix::constant::*;

/// On-disk directory entry: inode number then a NUL-padded name (64 bytes).
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C, packed)]
pub struct RawDirEntry {
    pub d_inode: u32,
    pub d_name: [u8; MINIX_NAME_LEN],
}

const _: () = assert!(core::mem::size_of::<RawDirEntry>() == MINIX_DIRENT_SIZE as usize);

impl RawDirEntry {
    pub fn to_decoded(&self) -> DirEntry {
        DirEntry {
            inode: u32::from_le(self.d_inode),
            name: self.d_name,
        }
    }

    pub fn from_decoded(entry: &DirEntry) -> Self {
        Self {
            d_inode: entry.inode.to_le(),
            d_name: entry.name,
        }
    }
}

/// Decoded directory entry. Inode 0 marks a deleted (tombstone) slot.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    pub inode: u32,
    pub name: [u8; MINIX_NAME_LEN],
}

impl DirEntry {
    /// Builds an entry in memory; names longer than 60 bytes are truncated.
    pub fn new(inode: u32, name: &[u8]) -> Self {
        let mut buf = [0u8; MINIX_NAME_LEN];
        let len = name.len().min(MINIX_NAME_LEN);
        buf[..len].copy_from_slice(&name[..len]);
        Self { inode, name: buf }
    }

    pub fn tombstone() -> Self {
        Self {
            inode: 0,
            name: [0u8; MINIX_NAME_LEN],
        }
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.inode == 0
    }

    /// Name bytes up to the first NUL, or all 60 if unterminated.
    pub fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MINIX_NAME_LEN);
        &self.name[..end]
    }

    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    /// Exact byte comparison against a path component.
    #[inline]
    pub fn matches(&self, component: &str) -> bool {
        self.name_bytes() == component.as_bytes()
    }
}

impl fmt::Debug for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirEntry")
            .field("inode", &self.inode)
            .field("name", &self.name())
            .finish()
    }
}
