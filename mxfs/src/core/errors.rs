// SPDX-License-Identifier: MIT

use core::fmt;

pub use mxio::errors::*;
pub use mxpart::errors::{PartError, TableLevel};

pub type FsResult<T = ()> = core::result::Result<T, FsError>;

/// Coarse classification of failures, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    InvalidArgument,
    ImageUnreadable,
    InvalidPartitionTable,
    NotMinixFilesystem,
    NotFound,
    NotADirectory,
    IsADirectory,
    OutOfRange,
    Unsupported,
    TruncatedFile,
    OutputFailed,
}

impl FsErrorKind {
    pub fn msg(&self) -> &'static str {
        match self {
            FsErrorKind::InvalidArgument => "invalid argument",
            FsErrorKind::ImageUnreadable => "image unreadable",
            FsErrorKind::InvalidPartitionTable => "invalid partition table",
            FsErrorKind::NotMinixFilesystem => "not a MINIX filesystem",
            FsErrorKind::NotFound => "not found",
            FsErrorKind::NotADirectory => "not a directory",
            FsErrorKind::IsADirectory => "is a directory",
            FsErrorKind::OutOfRange => "inode out of range",
            FsErrorKind::Unsupported => "unsupported",
            FsErrorKind::TruncatedFile => "truncated file",
            FsErrorKind::OutputFailed => "output failed",
        }
    }
}

impl fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// Positioned read against the image failed.
    IO { offset: u64, source: MinIOError },
    Part(PartError),
    BadMagic { offset: u64, found: u16 },
    InvalidGeometry(&'static str),
    /// A path component was not found in directory `parent`.
    NotFound { parent: u32 },
    NotADirectory { inode: u32 },
    IsADirectory { inode: u32 },
    OutOfRange { inode: u32, count: u32 },
    Unsupported { inode: u32, what: &'static str },
    TruncatedFile { inode: u32, remaining: u64 },
    Output(std::io::ErrorKind),
}

crate::fs_error_wiring! {
    top => FsError {
        PartError: Part,
    }
}

impl FsError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsError::IO { .. } => "IO error",
            FsError::Part(_) => "Partition error",
            FsError::BadMagic { .. } => "Bad superblock magic",
            FsError::InvalidGeometry(msg) => msg,
            FsError::NotFound { .. } => "No such file or directory",
            FsError::NotADirectory { .. } => "Not a directory",
            FsError::IsADirectory { .. } => "Is a directory",
            FsError::OutOfRange { .. } => "Inode number out of range",
            FsError::Unsupported { what, .. } => what,
            FsError::TruncatedFile { .. } => "File data ends before its recorded size",
            FsError::Output(_) => "Output error",
        }
    }

    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::IO { .. } => FsErrorKind::ImageUnreadable,
            FsError::Part(e) => match e {
                PartError::IO(_) => FsErrorKind::ImageUnreadable,
                PartError::InvalidIndex { .. } | PartError::MissingPartition => {
                    FsErrorKind::InvalidArgument
                }
                PartError::NotMinix { .. } => FsErrorKind::NotMinixFilesystem,
                PartError::InvalidSignature { .. } => FsErrorKind::InvalidPartitionTable,
            },
            FsError::BadMagic { .. } | FsError::InvalidGeometry(_) => {
                FsErrorKind::NotMinixFilesystem
            }
            FsError::NotFound { .. } => FsErrorKind::NotFound,
            FsError::NotADirectory { .. } => FsErrorKind::NotADirectory,
            FsError::IsADirectory { .. } => FsErrorKind::IsADirectory,
            FsError::OutOfRange { .. } => FsErrorKind::OutOfRange,
            FsError::Unsupported { .. } => FsErrorKind::Unsupported,
            FsError::TruncatedFile { .. } => FsErrorKind::TruncatedFile,
            FsError::Output(_) => FsErrorKind::OutputFailed,
        }
    }

    /// Underlying IO failure, if any.
    pub fn source(&self) -> Option<MinIOError> {
        match self {
            FsError::IO { source, .. } => Some(*source),
            _ => None,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::IO { offset, .. } => write!(f, "{} at offset {offset:#x}", self.msg())?,
            FsError::Part(e) => write!(f, "{e}")?,
            FsError::BadMagic { offset, found } => write!(
                f,
                "{} at offset {offset:#x} (found {found:#06x}, expected {:#06x})",
                self.msg(),
                crate::fs::minix::constant::MINIX_MAGIC
            )?,
            FsError::NotFound { parent } => {
                write!(f, "{} (in directory inode {parent})", self.msg())?
            }
            FsError::NotADirectory { inode } | FsError::IsADirectory { inode } => {
                write!(f, "{} (inode {inode})", self.msg())?
            }
            FsError::OutOfRange { inode, count } => {
                write!(f, "{} ({inode}, filesystem has {count})", self.msg())?
            }
            FsError::Unsupported { inode, .. } => {
                write!(f, "{} (inode {inode})", self.msg())?
            }
            FsError::TruncatedFile { inode, remaining } => write!(
                f,
                "{} (inode {inode}, {remaining} bytes unreachable)",
                self.msg()
            )?,
            FsError::Output(kind) => write!(f, "{}: {kind}", self.msg())?,
            FsError::InvalidGeometry(_) => write!(f, "{}", self.msg())?,
        }
        if let Some(src) = self.source() {
            write!(f, "\n  caused by: {src}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FsError {}

/// Attaches the image offset to a failed positioned read.
pub trait ReadContext<T> {
    fn at(self, offset: u64) -> FsResult<T>;
}

impl<T> ReadContext<T> for MinIOResult<T> {
    #[inline]
    fn at(self, offset: u64) -> FsResult<T> {
        self.map_err(|source| FsError::IO { offset, source })
    }
}

impl From<std::io::Error> for FsError {
    fn from(e: std::io::Error) -> Self {
        FsError::Output(e.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_errors_are_classified() {
        let e: FsError = PartError::MissingPartition.into();
        assert_eq!(e.kind(), FsErrorKind::InvalidArgument);

        let e: FsError = PartError::InvalidSignature {
            sector_offset: 0,
            found: [0, 0],
        }
        .into();
        assert_eq!(e.kind(), FsErrorKind::InvalidPartitionTable);

        let e: FsError = PartError::NotMinix {
            which: TableLevel::Primary,
            index: 0,
            found: 0x83,
        }
        .into();
        assert_eq!(e.kind(), FsErrorKind::NotMinixFilesystem);
    }

    #[test]
    fn test_read_context_carries_offset() {
        let res: MinIOResult<u8> = Err(MinIOError::OutOfBounds);
        let err = res.at(0x400).unwrap_err();
        assert_eq!(
            err,
            FsError::IO {
                offset: 0x400,
                source: MinIOError::OutOfBounds
            }
        );
        assert_eq!(err.kind(), FsErrorKind::ImageUnreadable);
        let text = err.to_string();
        assert!(text.starts_with("IO error at offset 0x400"));
        assert!(text.contains("caused by:"));
    }

    #[test]
    fn test_display_names_inode() {
        let e = FsError::IsADirectory { inode: 7 };
        assert_eq!(e.to_string(), "Is a directory (inode 7)");
        assert_eq!(e.kind(), FsErrorKind::IsADirectory);
    }
}
