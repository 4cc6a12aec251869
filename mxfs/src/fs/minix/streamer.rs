// SPDX-License-Identifier: MIT

use std::io::Write;

use mxio::{MinIO, MinIOExt};

use crate::{
    core::{FsError, FsResult, ReadContext},
    ensure,
    fs::minix::{
        constant::MINIX_STREAM_CHUNK,
        meta::MinixMeta,
        types::Inode,
        zones::{DirectZones, ZoneMap, ZoneSlot},
    },
};

/// Copies the bytes of a regular file, one zone per step.
///
/// The last zone is cut to the recorded file size. A missing or zero zone
/// before all bytes are copied is a truncated file.
pub struct FileStreamer<'a, IO: MinIO + ?Sized, Z: ZoneMap = DirectZones> {
    io: &'a mut IO,
    meta: &'a MinixMeta,
    zones: Z,
    inode: u32,
    next_zone: usize,
    remaining: u64,
    buf: Vec<u8>,
}

impl<'a, IO: MinIO + ?Sized> FileStreamer<'a, IO> {
    pub fn new(io: &'a mut IO, meta: &'a MinixMeta, inode: &Inode) -> FsResult<Self> {
        Self::with_zones(io, meta, inode, DirectZones::of(inode))
    }
}

impl<'a, IO: MinIO + ?Sized, Z: ZoneMap> FileStreamer<'a, IO, Z> {
    /// Fails with `IsADirectory` before anything is read or written, for any
    /// inode carrying the `DIR` bit.
    pub fn with_zones(
        io: &'a mut IO,
        meta: &'a MinixMeta,
        inode: &Inode,
        zones: Z,
    ) -> FsResult<Self> {
        ensure!(!inode.has_dir_bit(), FsError::IsADirectory { inode: inode.number });
        let chunk = (meta.zone_size as usize).min(MINIX_STREAM_CHUNK);
        Ok(Self {
            io,
            meta,
            zones,
            inode: inode.number,
            next_zone: 0,
            remaining: inode.size as u64,
            buf: vec![0u8; chunk],
        })
    }

    /// Bytes not yet copied.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Copies the next zone into `sink`.
    ///
    /// Returns the byte count, or `None` once the whole file has been copied.
    pub fn copy_next_zone<W: Write + ?Sized>(&mut self, sink: &mut W) -> FsResult<Option<u64>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let zone = match self.zones.zone(self.next_zone) {
            Some(ZoneSlot::Mapped(zone)) => zone,
            Some(ZoneSlot::Hole) | None => {
                return Err(FsError::TruncatedFile {
                    inode: self.inode,
                    remaining: self.remaining,
                });
            }
        };

        let len = self.remaining.min(self.meta.zone_size as u64);
        let mut offset = self.meta.zone_offset(zone);
        let mut left = len;
        while left > 0 {
            let n = left.min(self.buf.len() as u64) as usize;
            let chunk = &mut self.buf[..n];
            self.io
                .read_in_chunks(offset, chunk, self.meta.block_size as usize)
                .at(offset)?;
            sink.write_all(chunk)?;
            offset += n as u64;
            left -= n as u64;
        }

        self.remaining -= len;
        self.next_zone += 1;
        Ok(Some(len))
    }
}

/// Streams the full contents of `inode` into `sink`, returning the byte count.
pub fn stream_file<IO: MinIO + ?Sized, W: Write + ?Sized>(
    io: &mut IO,
    meta: &MinixMeta,
    inode: &Inode,
    sink: &mut W,
) -> FsResult<u64> {
    let mut streamer = FileStreamer::new(io, meta, inode)?;
    let mut total = 0;
    while let Some(n) = streamer.copy_next_zone(sink)? {
        total += n;
    }
    sink.flush()?;
    Ok(total)
}
