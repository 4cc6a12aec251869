// SPDX-License-Identifier: MIT

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LogLevel {
    Normal,
    Verbose,
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Normal as u8);
static PROG_NAME: OnceLock<&'static str> = OnceLock::new();

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn log_level() -> LogLevel {
    match LOG_LEVEL.load(Ordering::Relaxed) {
        1 => LogLevel::Verbose,
        _ => LogLevel::Normal,
    }
}

/// Names the running tool in every log prefix. First call wins.
pub fn set_prog_name(name: &'static str) {
    let _ = PROG_NAME.set(name);
}

pub fn prog_name() -> &'static str {
    PROG_NAME.get().copied().unwrap_or("mxtools")
}

// Diagnostics go to stderr: stdout carries listings and file data.

#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => {
        if $crate::utils::log_level() == $crate::utils::LogLevel::Verbose {
            eprintln!("[{}] {}", $crate::utils::prog_name(), format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        {
            use ::colored::Colorize as _;
            eprintln!(
                "[{}] {} {}",
                $crate::utils::prog_name(),
                "error:".red().bold(),
                format_args!($($arg)*)
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        set_log_level(LogLevel::Verbose);
        assert_eq!(log_level(), LogLevel::Verbose);
        set_log_level(LogLevel::Normal);
        assert_eq!(log_level(), LogLevel::Normal);
    }
}
