// SPDX-License-Identifier: MIT

use core::fmt;

use crate::fs::minix::{attr::MinixMode, types::Inode};

/// One `ls`-style line: permissions, size right-aligned to 9, name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    pub mode: MinixMode,
    pub size: u32,
    pub name: String,
}

impl ListingLine {
    pub fn new(inode: &Inode, name: impl Into<String>) -> Self {
        Self {
            mode: inode.mode,
            size: inode.size,
            name: name.into(),
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>9} {}",
            self.mode.permission_string(),
            self.size,
            self.name
        )
    }
}

/// Result of listing a path: a directory's entries or a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Directory {
        path: String,
        lines: Vec<ListingLine>,
    },
    File {
        line: ListingLine,
    },
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Directory { path, lines } => {
                writeln!(f, "{path}:")?;
                for line in lines {
                    writeln!(f, "{line}")?;
                }
                Ok(())
            }
            Listing::File { line } => writeln!(f, "{line}"),
        }
    }
}
