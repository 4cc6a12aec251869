// SPDX-License-Identifier: MIT
pub mod attr;
pub mod constant;
pub mod filesystem;
pub mod inode_table;
pub mod listing;
pub mod meta;
pub mod resolver;
pub mod streamer;
pub mod types;
pub mod walker;
pub mod zones;

// Public Interface
pub mod traits {
    pub use super::zones::ZoneMap;
}

pub mod prelude {
    pub use super::attr::MinixMode;
    pub use super::constant::*;
    pub use super::filesystem::MinixFs;
    pub use super::inode_table::read_inode;
    pub use super::listing::{Listing, ListingLine};
    pub use super::meta::{MinixMeta, inode_table_offset, read_superblock};
    pub use super::resolver::{Resolved, find_in_dir, resolve};
    pub use super::streamer::{FileStreamer, stream_file};
    pub use super::traits::*;
    pub use super::types::*;
    pub use super::walker::{DirCursor, DirWalker, ResolvedEntries};
    pub use super::zones::{DirectZones, ZoneSlot};
    pub use crate::core::errors::*;
    pub use mxio::prelude::*;
    pub use mxpart::{LocateRequest, Location};
}
