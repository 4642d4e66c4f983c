use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the tsbind binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsbind",
    version,
    about = "Generates C# interop contracts and prototype shims from a TypeScript declaration model"
)]
pub struct CliArgs {
    /// Declaration model (`ParsedInfo` JSON) produced by the front end.
    pub input: PathBuf,

    /// Directory the generated `.cs` files are written to. Created if
    /// missing; existing files are never overwritten.
    pub out_dir: PathBuf,

    /// Optional JSON settings file (`namespace`, `globalScopeInterface`,
    /// `newLine`).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}
