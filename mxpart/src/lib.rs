// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std)]

mod io_ext;

pub mod errors;
/// Partition / subpartition location.
pub mod locate;
/// Master Boot Record (MBR) partition table.
pub mod mbr;

pub use errors::{PartError, PartResult, TableLevel};
pub use locate::{LocateRequest, Location, locate};

pub const DEFAULT_SECTOR_SIZE: u64 = 512;
