// SPDX-License-Identifier: MIT

mod common;

use std::io::Write;

use common::*;
use mxfs::minix::*;

#[test]
fn test_stream_cuts_last_zone_to_size() {
    let mut img = ImageBuilder::small();
    let zs = img.zone_size() as usize;
    let data = pattern(2 * zs + 10);
    img.add_file(1, "big", &data);
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let mut out = Vec::new();
    assert_eq!(fs.stream("/big", &mut out).unwrap(), data.len() as u64);
    assert_eq!(out, data);
}

#[test]
fn test_streamer_steps_one_zone_at_a_time() {
    let mut img = ImageBuilder::small();
    let zs = img.zone_size();
    let data = pattern(2 * zs as usize + 10);
    img.add_file(1, "big", &data);
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let inode = fs.resolve("big").unwrap().inode;
    let mut streamer = fs.streamer(&inode).unwrap();
    let mut out = Vec::new();

    assert_eq!(streamer.remaining(), 2 * zs + 10);
    assert_eq!(streamer.copy_next_zone(&mut out).unwrap(), Some(zs));
    assert_eq!(streamer.copy_next_zone(&mut out).unwrap(), Some(zs));
    assert_eq!(streamer.copy_next_zone(&mut out).unwrap(), Some(10));
    assert_eq!(streamer.copy_next_zone(&mut out).unwrap(), None);
    assert_eq!(streamer.remaining(), 0);
    assert_eq!(out, data);
}

#[test]
fn test_empty_file_reads_nothing() {
    let mut img = ImageBuilder::small();
    let n = img.add_file(1, "empty", b"");
    // zones stay zero, size zero
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let meta = MinixMeta::from_io(&mut io, 0).unwrap();
    let inode = read_inode(&mut io, &meta, n).unwrap();

    let mut counter = IoCounter::new(&mut io);
    let mut out = Vec::new();
    assert_eq!(stream_file(&mut counter, &meta, &inode, &mut out).unwrap(), 0);
    assert!(out.is_empty());
    assert_eq!(counter.snapshot().reads, 0);
}

#[test]
fn test_directory_is_refused_before_output() {
    let mut img = ImageBuilder::small();
    img.mkdir(1, "dir");
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let mut out = Vec::new();
    let err = fs.stream("/dir", &mut out).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::IsADirectory);
    assert!(out.is_empty());

    let err = fs.stream("/", &mut out).unwrap_err();
    assert_eq!(err, FsError::IsADirectory { inode: 1 });
}

#[test]
fn test_zero_zone_before_end_is_truncated() {
    let mut img = ImageBuilder::small();
    let zs = img.zone_size() as usize;
    let n = img.add_file(1, "f", &pattern(2 * zs));
    let mut inode = img.inode(n);
    inode.zones[1] = 0;
    img.put_inode(&inode);
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let mut out = Vec::new();
    let err = fs.stream("/f", &mut out).unwrap_err();
    assert_eq!(
        err,
        FsError::TruncatedFile {
            inode: n,
            remaining: zs as u64
        }
    );
    // the first zone went out before the gap was found
    assert_eq!(out.len(), zs);
}

#[test]
fn test_size_past_direct_zones_is_truncated() {
    let mut img = ImageBuilder::new(1024, 0, 64);
    let data = pattern(7 * 1024);
    let n = img.add_file(1, "f", &data);
    let mut inode = img.inode(n);
    inode.size += 1;
    img.put_inode(&inode);
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let err = fs.stream("f", &mut std::io::sink()).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::TruncatedFile);
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_output_error() {
    let mut img = ImageBuilder::small();
    img.add_file(1, "f", b"payload");
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let err = fs.stream("/f", &mut FailingSink).unwrap_err();
    assert_eq!(err, FsError::Output(std::io::ErrorKind::BrokenPipe));
    assert_eq!(err.kind(), FsErrorKind::OutputFailed);
}

#[test]
fn test_list_directory_and_file() {
    let mut img = ImageBuilder::small();
    let usr = img.mkdir(1, "usr");
    img.add_file(usr, "notes", &pattern(42));
    img.add_tombstone(usr);
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();

    let listing = fs.list("/usr").unwrap();
    assert_eq!(
        listing.to_string(),
        "/usr:\n\
         drwxr-xr-x       256 .\n\
         drwxr-xr-x       192 ..\n\
         -rw-r--r--        42 notes\n"
    );

    let listing = fs.list("usr//notes").unwrap();
    assert_eq!(listing.to_string(), "-rw-r--r--        42 usr//notes\n");

    match fs.list("").unwrap() {
        Listing::Directory { path, lines } => {
            assert_eq!(path, "/");
            let names: Vec<_> = lines.iter().map(|l| l.name.as_str()).collect();
            assert_eq!(names, [".", "..", "usr"]);
        }
        other => panic!("unexpected listing {other:?}"),
    }
}

#[test]
fn test_open_inside_partition() {
    let mut img = ImageBuilder::small();
    img.add_file(1, "hello", b"from a partition");
    let fs_bytes = img.finish();
    let disk = partitioned(&fs_bytes, 2, 16);

    let mut io = MemMinIO::new(&disk);
    let mut fs = MinixFs::open(&mut io, LocateRequest::partition(2)).unwrap();
    assert_eq!(fs.location().offset, 16 * 512);
    assert_eq!(fs.meta().inode_table_offset, 16 * 512 + 4 * 1024);

    let mut out = Vec::new();
    fs.stream("/hello", &mut out).unwrap();
    assert_eq!(out, b"from a partition");

    // partition 0 is empty
    let mut io = MemMinIO::new(&disk);
    let err = MinixFs::open(&mut io, LocateRequest::partition(0)).err().unwrap();
    assert_eq!(err.kind(), FsErrorKind::NotMinixFilesystem);
}

#[test]
fn test_open_inside_subpartition() {
    let mut img = ImageBuilder::small();
    img.add_file(1, "deep", b"nested");
    let fs_bytes = img.finish();
    let disk = subpartitioned(&fs_bytes, 1, 8, 3, 24);

    let mut io = MemMinIO::new(&disk);
    let mut fs =
        MinixFs::open(&mut io, LocateRequest::partition(1).with_subpartition(3)).unwrap();
    assert_eq!(fs.location().offset, 24 * 512);

    let mut out = Vec::new();
    fs.stream("deep", &mut out).unwrap();
    assert_eq!(out, b"nested");
}

#[test]
fn test_partition_index_checked_before_io() {
    let image = [0u8; 16];
    let mut io = MemMinIO::new(&image);
    let err = MinixFs::open(&mut io, LocateRequest::partition(4)).err().unwrap();
    assert_eq!(err.kind(), FsErrorKind::InvalidArgument);
}

#[test]
fn test_block_device_is_refused_like_a_directory() {
    let mut img = ImageBuilder::small();
    let n = img.add_file(1, "dev", b"blockdata");
    let mut inode = img.inode(n);
    inode.mode = MinixMode::from_raw(0o060644);
    img.put_inode(&inode);
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let meta = MinixMeta::from_io(&mut io, 0).unwrap();
    let inode = read_inode(&mut io, &meta, n).unwrap();
    let mut out = Vec::new();
    let err = stream_file(&mut io, &meta, &inode, &mut out).unwrap_err();
    assert_eq!(err, FsError::IsADirectory { inode: n });
    assert!(out.is_empty());

    // listed as a single entry with the DIR bit shown, not walked
    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    assert_eq!(fs.list("/dev").unwrap().to_string(), "drw-r--r--         9 /dev\n");
    assert_eq!(fs.stream("dev", &mut out).unwrap_err().kind(), FsErrorKind::IsADirectory);
}

#[test]
fn test_stream_reads_block_by_block() {
    let mut img = ImageBuilder::small();
    let zs = img.zone_size() as usize;
    let n = img.add_file(1, "big", &pattern(2 * zs + 10));
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let meta = MinixMeta::from_io(&mut io, 0).unwrap();
    let inode = read_inode(&mut io, &meta, n).unwrap();

    let mut counter = IoCounter::new(&mut io);
    stream_file(&mut counter, &meta, &inode, &mut std::io::sink()).unwrap();
    let stats = counter.snapshot();
    // four 1 KiB blocks per 4 KiB zone, then the 10-byte tail
    assert_eq!(stats.reads, 9);
    assert_eq!(stats.max_read, 1024);
    assert_eq!(stats.read_bytes, 2 * zs as u64 + 10);
}

#[test]
fn test_list_resolved_skips_second_lookup() {
    let mut img = ImageBuilder::small();
    let usr = img.mkdir(1, "usr");
    img.add_file(usr, "notes", &pattern(42));
    let image = img.finish();

    let mut io = MemMinIO::new(&image);
    let mut counter = IoCounter::new(&mut io);
    {
        let mut fs = MinixFs::open(&mut counter, LocateRequest::whole_image()).unwrap();
        fs.resolve("/usr/notes").unwrap();
    }
    let lookup_reads = counter.snapshot().reads;

    let mut counter = IoCounter::new(&mut io);
    let listing = {
        let mut fs = MinixFs::open(&mut counter, LocateRequest::whole_image()).unwrap();
        let resolved = fs.resolve("/usr/notes").unwrap();
        fs.list_resolved("/usr/notes", &resolved).unwrap()
    };
    assert_eq!(counter.snapshot().reads, lookup_reads);
    assert_eq!(listing.to_string(), "-rw-r--r--        42 /usr/notes\n");

    let mut fs = MinixFs::open(&mut io, LocateRequest::whole_image()).unwrap();
    let resolved = fs.resolve("usr").unwrap();
    assert_eq!(
        fs.list_resolved("usr", &resolved).unwrap().to_string(),
        fs.list("usr").unwrap().to_string()
    );
}
