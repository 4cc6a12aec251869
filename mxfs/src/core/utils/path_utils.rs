// SPDX-License-Identifier: MIT

//! Path utilities for image-side paths.
//!
//! Image paths always use `/` as separator. Empty components produced by
//! leading, trailing or repeated slashes are dropped.

/// Splits a path into its components, using `/` as separator.
///
/// Returns a Vec of non-empty components.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

/// Returns the path as it should be echoed back to the user (`/` for empty).
pub fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
