// SPDX-License-Identifier: MIT

use mxio::{MinIO, MinIOStructExt};

use crate::{
    core::{FsError, FsResult, ReadContext},
    ensure,
    fs::minix::{meta::MinixMeta, types::{Inode, RawInode}},
};

/// Reads inode `number` (1-based) from the inode table.
///
/// Numbers outside `1..=inode_count` fail with [`FsError::OutOfRange`] before any read.
pub fn read_inode<IO: MinIO + ?Sized>(
    io: &mut IO,
    meta: &MinixMeta,
    number: u32,
) -> FsResult<Inode> {
    ensure!(
        number >= 1 && number <= meta.inode_count(),
        FsError::OutOfRange {
            inode: number,
            count: meta.inode_count()
        }
    );
    let offset = meta.inode_offset(number);
    let raw: RawInode = io.read_struct(offset).at(offset)?;
    Ok(raw.to_decoded(number))
}
