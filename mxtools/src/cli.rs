// SPDX-License-Identifier: MIT

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser};
use mxpart::LocateRequest;

use crate::utils::{LogLevel, set_log_level, set_prog_name};

/// Options shared by every tool: where the filesystem lives.
#[derive(Args, Debug, Clone)]
pub struct ImageArgs {
    /// Print partition tables, superblock and inode to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Primary partition holding the filesystem (0-3)
    #[arg(short = 'p', long = "partition", value_name = "NUM")]
    pub partition: Option<usize>,

    /// Subpartition inside the primary partition (0-3)
    #[arg(
        short = 's',
        long = "subpartition",
        value_name = "NUM",
        requires = "partition"
    )]
    pub subpartition: Option<usize>,

    /// Disk image to read
    #[arg(value_name = "IMAGEFILE")]
    pub imagefile: PathBuf,
}

impl ImageArgs {
    pub fn request(&self) -> LocateRequest {
        LocateRequest {
            partition: self.partition,
            subpartition: self.subpartition,
        }
    }

    pub fn open(&self) -> anyhow::Result<File> {
        File::open(&self.imagefile)
            .with_context(|| format!("cannot open image {}", self.imagefile.display()))
    }

    pub fn apply_log_level(&self) {
        if self.verbose {
            set_log_level(LogLevel::Verbose);
        }
    }
}

/// Parses the command line. Help and version exit 0, usage errors exit 1.
pub fn parse_or_exit<P: Parser>(prog: &'static str) -> P {
    set_prog_name(prog);
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Runs a tool body, reporting any error on stderr with exit status 1.
pub fn run(body: impl FnOnce() -> anyhow::Result<()>) -> ExitCode {
    match body() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
