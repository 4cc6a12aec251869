// SPDX-License-Identifier: MIT
pub mod path_utils;
