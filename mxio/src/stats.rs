// SPDX-License-Identifier: MIT

use crate::{MinIO, MinIOResult};

/// Simple counters, no_std friendly.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IoStats {
    pub reads: u64,
    pub read_bytes: u64,
    pub max_read: u64,
}

impl IoStats {
    #[inline]
    pub fn reset(&mut self) {
        *self = IoStats::default();
    }
}

/// Transparent instrumentation wrapper.
pub struct IoCounter<'a, IO: MinIO + ?Sized> {
    inner: &'a mut IO,
    pub stats: IoStats,
}

impl<'a, IO: MinIO + ?Sized> IoCounter<'a, IO> {
    #[inline]
    pub fn new(inner: &'a mut IO) -> Self {
        Self {
            inner,
            stats: IoStats::default(),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> IoStats {
        self.stats
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut IO {
        self.inner
    }
}

impl<'a, IO: MinIO + ?Sized> MinIO for IoCounter<'a, IO> {
    #[inline]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> MinIOResult {
        let len = buf.len() as u64;
        self.stats.reads += 1;
        self.stats.read_bytes += len;
        if self.stats.max_read < len {
            self.stats.max_read = len;
        }

        self.inner.read_at(offset, buf)
    }
}
