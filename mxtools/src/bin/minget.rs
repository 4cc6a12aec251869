// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mxfs::minix::{MinixFs, StdMinIO};
use mxtools::{
    cli::{ImageArgs, parse_or_exit, run},
    log_verbose, report,
};

#[derive(Parser, Debug)]
#[command(
    name = "minget",
    version,
    about = "Copy a regular file out of a MINIX V3 image",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    image: ImageArgs,

    /// File inside the image
    srcpath: String,

    /// Destination on the host (stdout when omitted)
    dstpath: Option<PathBuf>,
}

fn minget(cli: Cli) -> anyhow::Result<()> {
    cli.image.apply_log_level();

    let mut file = cli.image.open()?;
    let mut io = StdMinIO::new(&mut file);
    let mut fs = MinixFs::open(&mut io, cli.image.request())
        .with_context(|| format!("{}: no usable filesystem", cli.image.imagefile.display()))?;
    report::print_filesystem(&fs);

    let inode = fs
        .resolve(&cli.srcpath)
        .with_context(|| format!("cannot access '{}'", cli.srcpath))?
        .inode;
    report::print_inode(&inode);

    // refuses directories before the destination is touched
    let mut streamer = fs
        .streamer(&inode)
        .with_context(|| format!("cannot copy '{}'", cli.srcpath))?;

    let mut sink: Box<dyn Write> = match &cli.dstpath {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let mut total = 0;
    while let Some(n) = streamer
        .copy_next_zone(&mut sink)
        .with_context(|| format!("cannot copy '{}'", cli.srcpath))?
    {
        total += n;
    }
    sink.flush().context("flushing output")?;
    log_verbose!("copied {total} bytes");
    Ok(())
}

fn main() -> ExitCode {
    let cli: Cli = parse_or_exit("minget");
    run(|| minget(cli))
}
