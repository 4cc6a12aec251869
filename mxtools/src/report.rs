// SPDX-License-Identifier: MIT

use mxfs::minix::{Inode, MinixFs};
use mxio::MinIO;

/// Dumps the partition tables consulted and the superblock geometry.
pub fn print_filesystem<IO: MinIO + ?Sized>(fs: &MinixFs<'_, IO>) {
    let location = fs.location();
    if let Some(primary) = &location.primary {
        log_verbose!("Partition table:\n{primary}");
    }
    if let Some(sub) = &location.sub {
        log_verbose!("Subpartition table:\n{sub}");
    }
    log_verbose!("Filesystem at offset {:#x}", location.offset);
    log_verbose!("{}", fs.meta());
}

pub fn print_inode(inode: &Inode) {
    log_verbose!("{inode}");
}
