// SPDX-License-Identifier: MIT

use core::fmt;

use mxio::errors::*;

/// Which partition table a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLevel {
    Primary,
    Sub,
}

impl TableLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TableLevel::Primary => "partition",
            TableLevel::Sub => "subpartition",
        }
    }
}

impl fmt::Display for TableLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unified error type for partition location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartError {
    IO(MinIOError),
    /// Partition or subpartition index outside `0..=3`.
    InvalidIndex { which: TableLevel, index: usize },
    /// A subpartition was requested without a primary partition.
    MissingPartition,
    /// The enclosing sector lacks the 0x55 0xAA boot signature.
    InvalidSignature { sector_offset: u64, found: [u8; 2] },
    /// The selected entry is not of MINIX type (0x81).
    NotMinix {
        which: TableLevel,
        index: usize,
        found: u8,
    },
}

impl PartError {
    pub fn msg(&self) -> &'static str {
        match self {
            PartError::IO(e) => e.msg(),
            PartError::InvalidIndex { .. } => "Index must be between 0 and 3",
            PartError::MissingPartition => "Subpartition requires a partition",
            PartError::InvalidSignature { .. } => "Invalid partition table",
            PartError::NotMinix { .. } => "This doesn't look like a MINIX filesystem",
        }
    }
}

impl From<MinIOError> for PartError {
    fn from(e: MinIOError) -> Self {
        PartError::IO(e)
    }
}

impl fmt::Display for PartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartError::IO(e) => write!(f, "{e}"),
            PartError::InvalidIndex { which, index } => {
                write!(f, "{which} {index}: {}", self.msg())
            }
            PartError::InvalidSignature {
                sector_offset,
                found,
            } => write!(
                f,
                "{} at 0x{sector_offset:X} (signature {:02X} {:02X})",
                self.msg(),
                found[0],
                found[1]
            ),
            PartError::NotMinix {
                which,
                index,
                found,
            } => write!(
                f,
                "Invalid {which} type 0x{found:02X} at index {index}: {}",
                self.msg()
            ),
            PartError::MissingPartition => write!(f, "{}", self.msg()),
        }
    }
}

pub type PartResult<T = ()> = Result<T, PartError>;
