// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod errors;
#[macro_use]
mod macros;
pub mod stats;

// Backend modules
#[cfg(feature = "mem")]
mod mem;

#[cfg(feature = "std")]
mod std_io;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use super::MinIO;
    pub use super::MinIOExt;
    pub use super::MinIOStructExt;
    pub use super::errors::*;
    pub use super::stats::*;

    #[cfg(feature = "mem")]
    pub use super::mem::MemMinIO;

    #[cfg(feature = "std")]
    pub use super::std_io::StdMinIO;
}

// Internal use
use errors::*;

// Constants

/// Maximum size of internal scratch buffer (used for chunked reads and struct decoding).
/// 4 KiB = typical page size and the most common MINIX block size.
pub const BLOCK_BUF_SIZE: usize = 4096;

// Traits

/// Positioned read abstraction over a disk image.
///
/// Every call carries its own absolute offset, so no caller depends on
/// where a previous read left the underlying handle.
/// Implementations may target RAM, files, block devices, etc.
pub trait MinIO {
    /// Reads `buf.len()` bytes into `buf` from `offset` (absolute).
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> MinIOResult;
}

impl<T: MinIO + ?Sized> MinIO for &mut T {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> MinIOResult {
        (**self).read_at(offset, buf)
    }
}

/// Extension helpers for MinIO.
///
/// - chunked reads for large regions
/// - little-endian primitive reads (read_u8/16/32/64)
pub trait MinIOExt: MinIO {
    /// Reads `buf.len()` bytes from `offset` in chunks of `chunk_size` or less.
    #[inline(always)]
    fn read_in_chunks(&mut self, offset: u64, buf: &mut [u8], chunk_size: usize) -> MinIOResult {
        if chunk_size == 0 {
            return Err(MinIOError::Other("read_in_chunks: zero chunk size"));
        }

        let mut remaining = buf.len();
        let mut off = offset;
        let mut pos = 0;

        while remaining > 0 {
            let to_read = remaining.min(chunk_size);
            self.read_at(off, &mut buf[pos..pos + to_read])?;
            off += to_read as u64;
            pos += to_read;
            remaining -= to_read;
        }

        Ok(())
    }

    // Implements read helpers for primitive types (u8, u16, u32, u64)
    MinIO_impl_primitive_read!(u8, u16, u32, u64);
}

impl<T: MinIO + ?Sized> MinIOExt for T {}

/// Extension trait for reading fixed-layout records using zerocopy.
pub trait MinIOStructExt: MinIO {
    /// Reads a struct of type `T` from the given offset.
    ///
    /// Records larger than [`BLOCK_BUF_SIZE`] are rejected.
    fn read_struct<T: zerocopy::FromBytes + zerocopy::KnownLayout + zerocopy::Immutable>(
        &mut self,
        offset: u64,
    ) -> MinIOResult<T> {
        let size = core::mem::size_of::<T>();
        if size > BLOCK_BUF_SIZE {
            return Err(MinIOError::Other("read_struct: type too large"));
        }
        let mut buf = [0u8; BLOCK_BUF_SIZE];
        self.read_at(offset, &mut buf[..size])?;
        T::read_from_bytes(&buf[..size]).map_err(|_| MinIOError::Other("read_struct failed"))
    }
}

impl<T: MinIO + ?Sized> MinIOStructExt for T {}
