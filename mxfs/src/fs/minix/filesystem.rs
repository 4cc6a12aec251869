// SPDX-License-Identifier: MIT

use std::io::Write;

use mxio::MinIO;
use mxpart::{LocateRequest, Location, locate};

use crate::{
    core::{FsResult, display_path},
    fs::minix::{
        constant::MINIX_ROOT_INODE,
        inode_table::read_inode,
        listing::{Listing, ListingLine},
        meta::MinixMeta,
        resolver::{Resolved, resolve},
        streamer::{FileStreamer, stream_file},
        types::Inode,
        walker::DirWalker,
    },
};

/// An opened MINIX filesystem: located, superblock checked, geometry cached.
pub struct MinixFs<'a, IO: MinIO + ?Sized> {
    io: &'a mut IO,
    meta: MinixMeta,
    location: Location,
}

impl<'a, IO: MinIO + ?Sized> MinixFs<'a, IO> {
    /// Locates the filesystem described by `req` and validates its superblock.
    pub fn open(io: &'a mut IO, req: LocateRequest) -> FsResult<Self> {
        let location = locate(&mut *io, req)?;
        let meta = MinixMeta::from_io(&mut *io, location.offset)?;
        Ok(Self { io, meta, location })
    }

    pub fn meta(&self) -> &MinixMeta {
        &self.meta
    }

    /// Where the filesystem was found, with the partition tables that led there.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn read_inode(&mut self, number: u32) -> FsResult<Inode> {
        read_inode(&mut *self.io, &self.meta, number)
    }

    pub fn root(&mut self) -> FsResult<Inode> {
        self.read_inode(MINIX_ROOT_INODE)
    }

    pub fn resolve(&mut self, path: &str) -> FsResult<Resolved> {
        resolve(&mut *self.io, &self.meta, path)
    }

    /// Walks the slots of directory `dir`, tombstones included.
    pub fn entries(&mut self, dir: &Inode) -> FsResult<DirWalker<'_, IO>> {
        DirWalker::new(&mut *self.io, &self.meta, dir)
    }

    /// Lists `path`: every live entry of a directory, or one line for a file
    /// named by the path as given.
    pub fn list(&mut self, path: &str) -> FsResult<Listing> {
        let resolved = self.resolve(path)?;
        self.list_resolved(path, &resolved)
    }

    /// Like [`list`](Self::list), for a path the caller already resolved.
    pub fn list_resolved(&mut self, path: &str, resolved: &Resolved) -> FsResult<Listing> {
        let inode = &resolved.inode;
        if !inode.is_dir() {
            return Ok(Listing::File {
                line: ListingLine::new(inode, path),
            });
        }

        let mut lines = Vec::new();
        for res in self.entries(inode)?.resolved() {
            if let (entry, Some(child)) = res? {
                lines.push(ListingLine::new(&child, entry.name()));
            }
        }

        Ok(Listing::Directory {
            path: display_path(path).to_string(),
            lines,
        })
    }

    /// Streamer over the regular file `inode`.
    pub fn streamer(&mut self, inode: &Inode) -> FsResult<FileStreamer<'_, IO>> {
        FileStreamer::new(&mut *self.io, &self.meta, inode)
    }

    /// Resolves `path` and copies the file into `sink`; returns the byte count.
    pub fn stream<W: Write + ?Sized>(&mut self, path: &str, sink: &mut W) -> FsResult<u64> {
        let Resolved { inode, .. } = self.resolve(path)?;
        stream_file(&mut *self.io, &self.meta, &inode, sink)
    }
}
