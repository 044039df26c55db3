use clap::Parser;
use std::path::PathBuf;

/// Case-aware rename across a directory tree
///
/// Renames files and directories whose names contain OLD and rewrites OLD
/// inside text files, keeping each occurrence's case style and separators
/// (snake_case, kebab-case, camelCase). Parts are separated by '/', '_' or '-':
/// `drename my/user your/pet` turns `MyUser` into `YourPet` and `MY_USER`
/// into `YOUR_PET`.
#[derive(Parser, Debug)]
#[command(name = "drename")]
#[command(version)]
pub struct Cli {
    /// Identifier to replace (parts separated by '/')
    pub old: String,

    /// Replacement identifier (parts separated by '/')
    pub new: String,

    /// Directory to process (default: current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Preview changes without executing (dry-run)
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
