// SPDX-License-Identifier: MIT

use mxio::MinIO;

use crate::{
    core::{FsError, FsResult, split_path},
    ensure,
    fs::minix::{
        constant::MINIX_ROOT_INODE,
        inode_table::read_inode,
        meta::MinixMeta,
        types::{DirEntry, Inode},
        walker::DirWalker,
    },
};

/// Final entry of a path walk and the inode it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub entry: DirEntry,
    pub inode: Inode,
}

/// Looks `name` up among the live entries of directory `dir`.
///
/// Scans in on-disk order and stops at the first match.
pub fn find_in_dir<IO: MinIO + ?Sized>(
    io: &mut IO,
    meta: &MinixMeta,
    dir: &Inode,
    name: &str,
) -> FsResult<Option<DirEntry>> {
    for entry in DirWalker::new(io, meta, dir)? {
        let entry = entry?;
        if !entry.is_tombstone() && entry.matches(name) {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}

/// Resolves a `/`-separated path from the root directory.
///
/// Empty components are ignored, so `""`, `"/"` and `"//"` all name the root,
/// which comes back without any directory scan under the synthetic name `/`.
pub fn resolve<IO: MinIO + ?Sized>(
    io: &mut IO,
    meta: &MinixMeta,
    path: &str,
) -> FsResult<Resolved> {
    let mut inode = read_inode(io, meta, MINIX_ROOT_INODE)?;
    let mut entry = DirEntry::new(MINIX_ROOT_INODE, b"/");

    for component in split_path(path) {
        ensure!(inode.is_dir(), FsError::NotADirectory { inode: inode.number });
        entry = find_in_dir(io, meta, &inode, component)?.ok_or(FsError::NotFound {
            parent: inode.number,
        })?;
        inode = read_inode(io, meta, entry.inode)?;
    }

    Ok(Resolved { entry, inode })
}
