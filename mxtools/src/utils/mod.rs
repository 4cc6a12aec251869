// SPDX-License-Identifier: MIT
#[macro_use]
pub mod log;

pub use log::*;
