// SPDX-License-Identifier: MIT

//! Shared plumbing for the `minls` and `minget` binaries.

#[macro_use]
pub mod utils;

pub mod cli;
pub mod report;
