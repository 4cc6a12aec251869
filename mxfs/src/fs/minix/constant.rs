// SPDX-License-Identifier: MIT

// === Superblock ===

// Magic number MINIX V3 (in s_magic)
pub const MINIX_MAGIC: u16 = 0x4D5A;

// Superblock position, relative to the start of the filesystem
pub const MINIX_SUPERBLOCK_OFFSET: u64 = 1024;

// Boot block + superblock, in blocks, before the inode bitmap
pub const MINIX_BOOT_AND_SUPER_BLOCKS: u64 = 2;

pub const MINIX_MAX_LOG_ZONE_SIZE: i16 = 15;

// === Inode ===

pub const MINIX_ROOT_INODE: u32 = 1;
pub const MINIX_INODE_SIZE: u64 = 64;

// Zone pointers stored directly in the inode
pub const MINIX_DIRECT_ZONES: usize = 7;

// Zone number 0 marks an unallocated slot
pub const MINIX_NO_ZONE: u32 = 0;

// === Directory entries ===

pub const MINIX_DIRENT_SIZE: u64 = 64;
pub const MINIX_NAME_LEN: usize = 60;

// === Streaming ===

// Upper bound on a single read while copying file data
pub const MINIX_STREAM_CHUNK: usize = 64 * 1024;
