//! Runs the function composition walkthroughs from the commandline.

use clap::Parser;
use pipeline_cli::{args::DemoCli, demo};

fn main() -> anyhow::Result<()> {
    // Handle commandline arguments.
    let opt = DemoCli::parse();
    demo::run(opt)
}
