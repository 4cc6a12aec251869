// SPDX-License-Identifier: MIT

// === Sub-modules ===
#[macro_use]
pub mod macros;
pub mod errors;
pub mod utils;

// === Error types ===
pub use errors::*;

// === Utilities ===
pub use utils::path_utils::*;
