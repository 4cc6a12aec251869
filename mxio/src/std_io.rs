// SPDX-License-Identifier: MIT

use std::io::{Read, Seek, SeekFrom};

use crate::{MinIO, MinIOResult};

/// `MinIO` over any seekable reader (image files, block devices).
///
/// Each read seeks to its absolute offset first; the handle position left
/// behind by a previous read is never relied upon.
#[derive(Debug)]
pub struct StdMinIO<'a, T: Read + Seek> {
    io: &'a mut T,
}

impl<'a, T: Read + Seek> StdMinIO<'a, T> {
    #[inline]
    pub fn new(io: &'a mut T) -> Self {
        Self { io }
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut T {
        self.io
    }
}

impl<'a, T: Read + Seek> MinIO for StdMinIO<'a, T> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> MinIOResult {
        self.io.seek(SeekFrom::Start(offset))?;
        self.io.read_exact(buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;
    use std::io::{Cursor, Write};
    use tempfile::tempfile;

    #[test]
    fn test_read_file() {
        let mut file = tempfile().unwrap();
        file.write_all(&[0u8; 10]).unwrap();
        file.write_all(&[1, 2, 3, 4]).unwrap();

        let mut io = StdMinIO::new(&mut file);
        let mut output = [0u8; 4];
        io.read_at(10, &mut output).unwrap();
        assert_eq!(output, [1, 2, 3, 4]);
    }

    #[test]
    fn test_short_read_is_eof() {
        let mut file = tempfile().unwrap();
        file.write_all(&[0xAB; 8]).unwrap();

        let mut io = StdMinIO::new(&mut file);
        let mut output = [0u8; 16];
        assert_eq!(
            io.read_at(0, &mut output),
            Err(MinIOError::Io(std::io::ErrorKind::UnexpectedEof))
        );
    }

    #[test]
    fn test_reads_ignore_prior_position() {
        let data: Vec<u8> = (0..32u8).collect();
        let mut cursor = Cursor::new(data);
        let mut io = StdMinIO::new(&mut cursor);

        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        io.read_at(20, &mut a).unwrap();
        io.read_at(2, &mut b).unwrap();
        assert_eq!(a, [20, 21, 22, 23]);
        assert_eq!(b, [2, 3, 4, 5]);
        assert_eq!(io.read_u16_at(30).unwrap(), u16::from_le_bytes([30, 31]));
    }
}
