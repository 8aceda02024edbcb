//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - a build driver for Skia static libraries
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure and build Skia for one target
    Build(BuildArgs),

    /// Copy public headers into the artifact tree
    Headers(HeadersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Target OS (linux, mac/macos/darwin, win/windows)
    pub os: String,

    /// Target architecture (x64, arm64, arm), or `all` for x64 + arm64
    pub arch: String,

    /// Vendor all third-party dependencies instead of linking system ones
    #[arg(long)]
    pub self_contained: bool,

    /// Produce a debug build
    #[arg(long)]
    pub debug: bool,

    /// Print the resolved option set as JSON and write nothing
    #[arg(long)]
    pub plan: bool,

    /// Skia source root
    #[arg(long, default_value = "skia")]
    pub skia_dir: PathBuf,
}

#[derive(Args)]
pub struct HeadersArgs {
    /// Skia source root
    #[arg(long, default_value = "skia")]
    pub skia_dir: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
