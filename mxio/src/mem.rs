// SPDX-License-Identifier: MIT

use crate::{MinIO, MinIOError, MinIOResult};

/// In-memory implementation of `MinIO`.
///
/// Useful for tests and for images already loaded or mapped into memory.
#[derive(Debug)]
pub struct MemMinIO<'a> {
    buffer: &'a [u8],
}

impl<'a> MemMinIO<'a> {
    #[inline]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    fn check_bounds(&self, offset: u64, len: usize) -> MinIOResult<usize> {
        let end = offset
            .checked_add(len as u64)
            .ok_or(MinIOError::OutOfBounds)?;
        if end > self.buffer.len() as u64 {
            return Err(MinIOError::OutOfBounds);
        }
        Ok(offset as usize)
    }
}

impl<'a> MinIO for MemMinIO<'a> {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> MinIOResult {
        let start = self.check_bounds(offset, buf.len())?;
        buf.copy_from_slice(&self.buffer[start..start + buf.len()]);
        Ok(())
    }
}
