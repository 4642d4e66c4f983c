#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use tsbind::cli::args::CliArgs;
use tsbind::cli::driver;

const EXIT_FAILURE: i32 = 1;

fn main() {
    // Only initialised when TSBIND_LOG or RUST_LOG is set.
    tsbind::tracing_config::init_tracing();

    let args = CliArgs::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::generate(args, &cwd)?;

    println!(
        "Generated {} files ({} declarations, {} prototypes, {} globals) in {}",
        result.written_files.len(),
        result.declarations,
        result.prototypes,
        result.globals,
        args.out_dir.display()
    );
    Ok(())
}
