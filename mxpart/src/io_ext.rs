// SPDX-License-Identifier: MIT

//! "LBA-aware" MinIO helpers to avoid `* sector_size` everywhere,
//! with overflow-check and a `read_struct` version on LBA.

use mxio::errors::MinIOError;
use mxio::prelude::*;

/// Offset = LBA * sector_size (with overflow-check)
#[inline]
pub(crate) fn lba_offset(lba: u64, sector_size: u64) -> MinIOResult<u64> {
    lba.checked_mul(sector_size)
        .ok_or(MinIOError::Other("lba_offset overflow"))
}

/// LBA-aligned reads
pub trait MinIOLbaExt: MinIO {
    /// Reads a struct `T` starting from an LBA (size = size_of::<T>()).
    #[inline]
    fn read_struct_lba<T>(&mut self, lba: u64, sector_size: u64) -> MinIOResult<T>
    where
        T: zerocopy::FromBytes + zerocopy::KnownLayout + zerocopy::Immutable,
    {
        let off = lba_offset(lba, sector_size)?;
        self.read_struct::<T>(off)
    }
}

impl<T: MinIO + ?Sized> MinIOLbaExt for T {}
