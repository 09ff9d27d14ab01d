mod apply;
mod decode;
mod encode;
mod hash;
pub(crate) mod helpers;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
    Hash(hash::HashArgs),
    Apply(apply::ApplyArgs),
}

pub fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Encode(args) => encode::execute(args, mode),
        Commands::Decode(args) => decode::execute(args, mode),
        Commands::Hash(args) => hash::execute(args, mode),
        Commands::Apply(args) => apply::execute(args, mode),
    }
}
