// SPDX-License-Identifier: MIT

use mxio::{MinIO, MinIOStructExt};

use crate::{
    core::{FsError, FsResult, ReadContext},
    ensure,
    fs::minix::{
        constant::MINIX_DIRENT_SIZE,
        inode_table::read_inode,
        meta::MinixMeta,
        types::{DirEntry, Inode, RawDirEntry},
        zones::{DirectZones, ZoneMap, ZoneSlot},
    },
};

/// Position of a walk: index of the next 64-byte slot in the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirCursor {
    pub slot: u64,
}

/// Iterates the slots of a directory in on-disk order.
///
/// Every slot is yielded, tombstones (inode 0) included; filtering is the
/// consumer's choice. Slots living in a hole zone come back as tombstones
/// without touching the image.
pub struct DirWalker<'a, IO: MinIO + ?Sized, Z: ZoneMap = DirectZones> {
    io: &'a mut IO,
    meta: &'a MinixMeta,
    zones: Z,
    dir: u32,
    total: u64,
    cursor: DirCursor,
}

impl<'a, IO: MinIO + ?Sized> DirWalker<'a, IO> {
    pub fn new(io: &'a mut IO, meta: &'a MinixMeta, dir: &Inode) -> FsResult<Self> {
        Self::with_zones(io, meta, dir, DirectZones::of(dir))
    }
}

impl<'a, IO: MinIO + ?Sized, Z: ZoneMap> DirWalker<'a, IO, Z> {
    /// Fails with `NotADirectory`, or with `Unsupported` if the directory
    /// size reaches past what `zones` can address.
    pub fn with_zones(
        io: &'a mut IO,
        meta: &'a MinixMeta,
        dir: &Inode,
        zones: Z,
    ) -> FsResult<Self> {
        ensure!(dir.is_dir(), FsError::NotADirectory { inode: dir.number });
        let total = dir.dirent_slots();
        let addressable = zones.capacity() as u64 * meta.dirents_per_zone();
        ensure!(
            total <= addressable,
            FsError::Unsupported {
                inode: dir.number,
                what: "Directory extends past its direct zones"
            }
        );
        Ok(Self {
            io,
            meta,
            zones,
            dir: dir.number,
            total,
            cursor: DirCursor::default(),
        })
    }

    /// Total number of slots in the directory.
    pub fn len(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn cursor(&self) -> DirCursor {
        self.cursor
    }

    /// Resumes the walk from `cursor` (e.g. one saved earlier).
    pub fn seek(&mut self, cursor: DirCursor) {
        self.cursor = cursor;
    }

    pub fn restart(&mut self) {
        self.cursor = DirCursor::default();
    }

    /// Pairs each entry with its inode; tombstones get `None` and are not read.
    pub fn resolved(self) -> ResolvedEntries<'a, IO, Z> {
        ResolvedEntries { walker: self }
    }

    fn read_slot(&mut self, slot: u64) -> FsResult<DirEntry> {
        let per_zone = self.meta.dirents_per_zone();
        let index = (slot / per_zone) as usize;
        let within = slot % per_zone;

        match self.zones.zone(index) {
            Some(ZoneSlot::Mapped(zone)) => {
                let offset = self.meta.zone_offset(zone) + within * MINIX_DIRENT_SIZE;
                let raw: RawDirEntry = self.io.read_struct(offset).at(offset)?;
                Ok(raw.to_decoded())
            }
            Some(ZoneSlot::Hole) => Ok(DirEntry::tombstone()),
            None => Err(FsError::Unsupported {
                inode: self.dir,
                what: "Directory extends past its direct zones",
            }),
        }
    }
}

impl<IO: MinIO + ?Sized, Z: ZoneMap> Iterator for DirWalker<'_, IO, Z> {
    type Item = FsResult<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.slot >= self.total {
            return None;
        }
        let slot = self.cursor.slot;
        let res = self.read_slot(slot);
        // a failed slot ends the walk
        self.cursor.slot = if res.is_ok() { slot + 1 } else { self.total };
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total.saturating_sub(self.cursor.slot) as usize;
        (left, Some(left))
    }
}

/// Entries of a directory together with the inode each one names.
pub struct ResolvedEntries<'a, IO: MinIO + ?Sized, Z: ZoneMap = DirectZones> {
    walker: DirWalker<'a, IO, Z>,
}

impl<IO: MinIO + ?Sized, Z: ZoneMap> Iterator for ResolvedEntries<'_, IO, Z> {
    type Item = FsResult<(DirEntry, Option<Inode>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.walker.next()? {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        if entry.is_tombstone() {
            return Some(Ok((entry, None)));
        }
        let meta = self.walker.meta;
        let res = read_inode(&mut *self.walker.io, meta, entry.inode);
        Some(res.map(|inode| (entry, Some(inode))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walker.size_hint()
    }
}
