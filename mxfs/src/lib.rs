// SPDX-License-Identifier: MIT

//! Read-only access to MINIX V3 filesystem images.
//!
//! The entry point is [`minix::MinixFs`]: it locates the filesystem
//! (optionally inside a partition or subpartition), validates the superblock,
//! and then resolves paths, lists directories and streams regular files.

// Core Modules
pub mod core;
pub mod fs;

// Utilities
pub use crate::core::errors::*;
pub use crate::core::utils::path_utils::*;

/// MINIX V3 filesystem implementation.
///
/// See [`minix::MinixFs`], [`minix::DirWalker`] and [`minix::FileStreamer`].
pub mod minix {
    pub use super::fs::minix::prelude::*;
}
