// SPDX-License-Identifier: MIT

use crate::DEFAULT_SECTOR_SIZE;
use crate::errors::*;
use crate::mbr::{Mbr, MbrEntry, NR_PARTITIONS, read_mbr, read_mbr_at_lba};
use mxio::prelude::*;

/// Which (sub)partition holds the filesystem.
///
/// `partition: None` means the whole image is the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocateRequest {
    pub partition: Option<usize>,
    pub subpartition: Option<usize>,
}

impl LocateRequest {
    pub fn whole_image() -> Self {
        Self::default()
    }

    pub fn partition(index: usize) -> Self {
        Self {
            partition: Some(index),
            subpartition: None,
        }
    }

    pub fn with_subpartition(mut self, index: usize) -> Self {
        self.subpartition = Some(index);
        self
    }

    /// Rejects out-of-range indices before any I/O happens.
    pub fn validate(&self) -> PartResult<()> {
        if self.subpartition.is_some() && self.partition.is_none() {
            return Err(PartError::MissingPartition);
        }
        check_index(TableLevel::Primary, self.partition)?;
        check_index(TableLevel::Sub, self.subpartition)?;
        Ok(())
    }
}

#[inline]
fn check_index(which: TableLevel, index: Option<usize>) -> PartResult<()> {
    match index {
        Some(index) if index >= NR_PARTITIONS => Err(PartError::InvalidIndex { which, index }),
        _ => Ok(()),
    }
}

/// Result of locating the filesystem inside an image.
///
/// Keeps the tables that were consulted so callers can dump them.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    /// Absolute byte offset of the filesystem.
    pub offset: u64,
    pub primary: Option<Mbr>,
    pub sub: Option<Mbr>,
}

impl Location {
    pub fn whole_image() -> Self {
        Self {
            offset: 0,
            primary: None,
            sub: None,
        }
    }
}

/// Picks entry `index` and checks that it is a MINIX partition.
fn select_minix(mbr: &Mbr, which: TableLevel, index: usize) -> PartResult<MbrEntry> {
    let entry = mbr.entry(which, index)?;
    if !entry.is_minix() {
        return Err(PartError::NotMinix {
            which,
            index,
            found: entry.part_type,
        });
    }
    Ok(entry)
}

/// Locates the filesystem according to `req`.
///
/// The subpartition table lives in the first sector of the primary
/// partition, and its entries hold absolute sector numbers (not relative
/// to the enclosing partition).
pub fn locate<IO: MinIO + ?Sized>(io: &mut IO, req: LocateRequest) -> PartResult<Location> {
    req.validate()?;

    let Some(part) = req.partition else {
        return Ok(Location::whole_image());
    };

    let primary = read_mbr(io)?;
    let entry = select_minix(&primary, TableLevel::Primary, part)?;
    let mut location = Location {
        offset: entry.byte_offset(),
        primary: Some(primary),
        sub: None,
    };

    if let Some(subpart) = req.subpartition {
        let sub = read_mbr_at_lba(io, entry.start_lba as u64)?;
        let sub_entry = select_minix(&sub, TableLevel::Sub, subpart)?;
        location.offset = sub_entry.start_lba as u64 * DEFAULT_SECTOR_SIZE;
        location.sub = Some(sub);
    }

    Ok(location)
}
