// SPDX-License-Identifier: MIT
#![allow(dead_code)]

use mxfs::minix::*;
use mxpart::mbr::{Mbr, MbrEntry, NO_PART_TYPE};
use zerocopy::IntoBytes;

pub const DIR_MODE: u16 = 0o040755;
pub const FILE_MODE: u16 = 0o100644;

/// Builds small MINIX V3 images in memory.
///
/// Layout: boot block, superblock, one inode-bitmap block, one zone-bitmap
/// block, the inode table, then data zones. Root (inode 1) starts with `.`
/// and `..`.
pub struct ImageBuilder {
    pub bytes: Vec<u8>,
    pub block_size: u16,
    pub log_zone_size: i16,
    pub inode_count: u32,
    next_inode: u32,
    next_zone: u32,
}

impl ImageBuilder {
    pub fn new(block_size: u16, log_zone_size: i16, inode_count: u32) -> Self {
        let zone_size = (block_size as u64) << log_zone_size;
        let table_blocks = (inode_count as u64 * MINIX_INODE_SIZE).div_ceil(block_size as u64);
        let data_start = (4 + table_blocks) * block_size as u64;
        let first_zone = data_start.div_ceil(zone_size) as u32;

        let mut img = Self {
            bytes: vec![0u8; (first_zone as u64 * zone_size) as usize],
            block_size,
            log_zone_size,
            inode_count,
            next_inode: 2,
            next_zone: first_zone,
        };
        img.write_superblock(MINIX_MAGIC);
        img.set_inode(1, DIR_MODE, 0, [0; 7]);
        img.add_entry(1, ".", 1);
        img.add_entry(1, "..", 1);
        img
    }

    /// 1 KiB blocks, 4 KiB zones.
    pub fn small() -> Self {
        Self::new(1024, 2, 64)
    }

    pub fn zone_size(&self) -> u64 {
        (self.block_size as u64) << self.log_zone_size
    }

    pub fn write_superblock(&mut self, magic: u16) {
        let sb = Superblock {
            inode_count: self.inode_count,
            inode_bitmap_blocks: 1,
            zone_bitmap_blocks: 1,
            first_data_zone: 0,
            log_zone_size: self.log_zone_size,
            max_file_size: u32::MAX,
            zone_count: 0,
            magic,
            block_size: self.block_size,
            subversion: 0,
        };
        let raw = RawSuperblock::from_decoded(&sb);
        self.bytes[1024..1024 + 31].copy_from_slice(raw.as_bytes());
    }

    pub fn inode_offset(&self, number: u32) -> usize {
        4 * self.block_size as usize + (number as usize - 1) * MINIX_INODE_SIZE as usize
    }

    pub fn inode(&self, number: u32) -> Inode {
        let off = self.inode_offset(number);
        let raw = <RawInode as zerocopy::FromBytes>::read_from_bytes(&self.bytes[off..off + 64])
            .unwrap();
        raw.to_decoded(number)
    }

    pub fn put_inode(&mut self, inode: &Inode) {
        let off = self.inode_offset(inode.number);
        self.bytes[off..off + 64].copy_from_slice(RawInode::from_decoded(inode).as_bytes());
    }

    pub fn set_inode(&mut self, number: u32, mode: u16, size: u32, zones: [u32; 7]) {
        let inode = Inode {
            number,
            mode: MinixMode::from_raw(mode),
            links: 1,
            uid: 0,
            gid: 0,
            size,
            atime: 0,
            mtime: 0,
            ctime: 0,
            zones,
            indirect: 0,
            double_indirect: 0,
        };
        self.put_inode(&inode);
    }

    pub fn alloc_zone(&mut self) -> u32 {
        let zone = self.next_zone;
        self.next_zone += 1;
        let new_len = (self.next_zone as u64 * self.zone_size()) as usize;
        self.bytes.resize(new_len, 0);
        zone
    }

    fn alloc_inode(&mut self) -> u32 {
        let n = self.next_inode;
        assert!(n <= self.inode_count, "image builder out of inodes");
        self.next_inode += 1;
        n
    }

    /// Appends a directory entry, growing the directory by one slot.
    pub fn add_entry(&mut self, dir: u32, name: &str, target: u32) {
        self.add_raw_entry(dir, DirEntry::new(target, name.as_bytes()));
    }

    pub fn add_tombstone(&mut self, dir: u32) {
        self.add_raw_entry(dir, DirEntry::tombstone());
    }

    fn add_raw_entry(&mut self, dir: u32, entry: DirEntry) {
        let mut inode = self.inode(dir);
        let per_zone = self.zone_size() / MINIX_DIRENT_SIZE;
        let slot = inode.size as u64 / MINIX_DIRENT_SIZE;
        let index = (slot / per_zone) as usize;
        if inode.zones[index] == 0 {
            inode.zones[index] = self.alloc_zone();
        }
        let off = (inode.zones[index] as u64 * self.zone_size()
            + (slot % per_zone) * MINIX_DIRENT_SIZE) as usize;
        self.bytes[off..off + 64].copy_from_slice(RawDirEntry::from_decoded(&entry).as_bytes());
        inode.size += MINIX_DIRENT_SIZE as u32;
        self.put_inode(&inode);
    }

    /// Creates a subdirectory of `parent` holding `.` and `..`.
    pub fn mkdir(&mut self, parent: u32, name: &str) -> u32 {
        let n = self.alloc_inode();
        self.set_inode(n, DIR_MODE, 0, [0; 7]);
        self.add_entry(n, ".", n);
        self.add_entry(n, "..", parent);
        self.add_entry(parent, name, n);
        n
    }

    /// Creates a regular file in `parent` with `data` spread over fresh zones.
    pub fn add_file(&mut self, parent: u32, name: &str, data: &[u8]) -> u32 {
        let n = self.alloc_inode();
        let zs = self.zone_size() as usize;
        let mut zones = [0u32; 7];
        for (i, chunk) in data.chunks(zs).enumerate() {
            let zone = self.alloc_zone();
            zones[i] = zone;
            let off = zone as usize * zs;
            self.bytes[off..off + chunk.len()].copy_from_slice(chunk);
        }
        self.set_inode(n, FILE_MODE, data.len() as u32, zones);
        self.add_entry(parent, name, n);
        n
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Deterministic, non-repeating-looking content.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

/// Writes an MBR with the given entries into the first sector of `disk`.
pub fn write_table(disk: &mut [u8], sector: usize, entries: [MbrEntry; 4]) {
    let mbr = Mbr::new_from_entries(entries);
    let off = sector * 512;
    disk[off..off + 512].copy_from_slice(mbr.as_bytes());
}

pub fn empty_entry() -> MbrEntry {
    MbrEntry {
        part_type: NO_PART_TYPE,
        ..Default::default()
    }
}

/// Places `fs` at `lba` of a fresh disk whose partition `index` points to it.
pub fn partitioned(fs: &[u8], index: usize, lba: u32) -> Vec<u8> {
    let start = lba as usize * 512;
    let mut disk = vec![0u8; start + fs.len()];
    disk[start..].copy_from_slice(fs);
    let mut entries = [empty_entry(); 4];
    entries[index] = MbrEntry::new_minix(lba, (fs.len() / 512) as u32);
    write_table(&mut disk, 0, entries);
    disk
}

/// Like [`partitioned`], with a subpartition table inside partition `part`.
///
/// The filesystem sits at absolute `sub_lba`.
pub fn subpartitioned(fs: &[u8], part: usize, part_lba: u32, sub: usize, sub_lba: u32) -> Vec<u8> {
    let start = sub_lba as usize * 512;
    let mut disk = vec![0u8; start + fs.len()];
    disk[start..].copy_from_slice(fs);

    let mut primary = [empty_entry(); 4];
    primary[part] = MbrEntry::new_minix(part_lba, (disk.len() / 512) as u32 - part_lba);
    write_table(&mut disk, 0, primary);

    let mut inner = [empty_entry(); 4];
    inner[sub] = MbrEntry::new_minix(sub_lba, (fs.len() / 512) as u32);
    write_table(&mut disk, part_lba as usize, inner);
    disk
}
