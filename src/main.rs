//! A command-line interface to the library, allowing the compiler version of
//! bytecode to be inferred and short compiler versions to be resolved.
//!
//! Results are written to stdout as JSON, while logs go to stderr and can be
//! controlled using `RUST_LOG`.

use std::{fs, io, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use solc_version_inference::{
    infer_solc_version,
    release::{Config, HttpCatalogFetcher, Resolver},
    Bytecode,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Infer the solc version range that produced some deployed bytecode.
    Infer(InferArgs),

    /// Resolve a short solc version (e.g. 0.8.4) to its published build.
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
struct InferArgs {
    /// Hex-encoded deployed bytecode, with or without the 0x prefix.
    #[arg(value_name = "HEX", required_unless_present = "file", conflicts_with = "file")]
    bytecode: Option<String>,

    /// Read the hex-encoded bytecode from a file instead.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// The short version to resolve.
    #[arg(value_name = "VERSION", required_unless_present = "latest")]
    version: Option<String>,

    /// Resolve the most recent release instead of a given version.
    #[arg(long, default_value_t = false, conflicts_with = "version")]
    latest: bool,

    /// Fetch the list of releases from this location instead.
    #[arg(long, value_name = "URL")]
    list_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Infer(args) => infer(args)?,
        Command::Resolve(args) => resolve(args)?,
    };
    println!("{output}");

    Ok(())
}

/// Infers the version range for the bytecode described by `args`, returning it
/// as JSON.
fn infer(args: InferArgs) -> Result<String> {
    let code = match (args.bytecode, args.file) {
        (Some(code), _) => code,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Could not read bytecode from {}", path.display()))?,
        (None, None) => return Err(anyhow!("No bytecode was provided")),
    };
    let bytecode = Bytecode::from_hex(&code)?;
    let range = infer_solc_version(&bytecode)?;

    Ok(serde_json::to_string(&range)?)
}

/// Resolves the version described by `args`, returning the build as JSON.
fn resolve(args: ResolveArgs) -> Result<String> {
    let mut config = Config::from_env();
    if let Some(url) = args.list_url {
        config = config.with_list_url(url);
    }
    let resolver = Resolver::new(HttpCatalogFetcher::new(config));

    let long_version = match args.version {
        Some(version) if !args.latest => resolver.get_long_version(&version)?,
        _ => resolver.latest_long_version()?,
    };

    Ok(serde_json::to_string(&long_version)?)
}
