// SPDX-License-Identifier: MIT
pub mod minix;
