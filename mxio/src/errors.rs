// SPDX-License-Identifier: MIT

use core::fmt;

/// Result type for MinIO operations.
pub type MinIOResult<T = ()> = core::result::Result<T, MinIOError>;

/// Error type for MinIO operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinIOError {
    /// Attempted to read out of bounds.
    OutOfBounds,
    /// Underlying host I/O failure.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
    Other(&'static str),
}

impl MinIOError {
    pub fn msg(&self) -> &'static str {
        match self {
            MinIOError::OutOfBounds => "Out of bounds",
            #[cfg(feature = "std")]
            MinIOError::Io(std::io::ErrorKind::UnexpectedEof) => "Unexpected end of image",
            #[cfg(feature = "std")]
            MinIOError::Io(_) => "Host I/O error",
            MinIOError::Other(msg) => msg,
        }
    }
}

impl fmt::Display for MinIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        #[cfg(feature = "std")]
        if let MinIOError::Io(kind) = self
            && *kind != std::io::ErrorKind::UnexpectedEof
        {
            write!(f, " ({kind})")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for MinIOError {
    #[cold]
    #[inline(never)]
    fn from(e: std::io::Error) -> Self {
        MinIOError::Io(e.kind())
    }
}
