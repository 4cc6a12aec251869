// SPDX-License-Identifier: MIT

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mxfs::minix::{MinixFs, StdMinIO};
use mxtools::{
    cli::{ImageArgs, parse_or_exit, run},
    report,
};

#[derive(Parser, Debug)]
#[command(
    name = "minls",
    version,
    about = "List a file or directory inside a MINIX V3 image",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    image: ImageArgs,

    /// Path inside the image
    #[arg(default_value = "/")]
    path: String,
}

fn minls(cli: Cli) -> anyhow::Result<()> {
    cli.image.apply_log_level();

    let mut file = cli.image.open()?;
    let mut io = StdMinIO::new(&mut file);
    let mut fs = MinixFs::open(&mut io, cli.image.request())
        .with_context(|| format!("{}: no usable filesystem", cli.image.imagefile.display()))?;
    report::print_filesystem(&fs);

    let resolved = fs
        .resolve(&cli.path)
        .with_context(|| format!("cannot access '{}'", cli.path))?;
    report::print_inode(&resolved.inode);

    let listing = fs
        .list_resolved(&cli.path, &resolved)
        .with_context(|| format!("cannot list '{}'", cli.path))?;

    let mut out = std::io::stdout().lock();
    write!(out, "{listing}").context("writing listing")?;
    out.flush().context("writing listing")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli: Cli = parse_or_exit("minls");
    run(|| minls(cli))
}
