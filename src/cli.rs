use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uedev", version, about = "Unreal project developer tools")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enforce the project copyright notice across the source tree
    Copyright {
        #[arg(long, default_value_t = false, help = "Report instead of rewriting")]
        check: bool,
    },
    /// Zip a staged build directory with mode-dependent filename filters
    Package {
        #[arg(value_enum)]
        mode: PackageMode,
        source_dir: PathBuf,
        output: PathBuf,
    },
    /// Scaffold a new engine module and register it in the .uproject
    Module { name: String },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageMode {
    /// Archive only debug artifacts (symbols, staging manifests)
    Debug,
    /// Archive everything except debug artifacts
    Shipping,
}
