use crate::app::models::NamingStrategy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Generate typed constants for every static asset in a directory"
)]
pub struct Cli {
    /// Config file (TOML or JSON). Defaults to ./assetgen.toml or ./assetgen.json
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory containing the assets
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// File to write the generated code to
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Patterns for files to leave out (e.g., '*.map' 'drafts/*')
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Put every constant at the top level instead of one namespace per directory
    #[arg(long, overrides_with = "no_flat")]
    pub flat: bool,

    /// Nest constants into one namespace per directory, even if the config file says otherwise
    #[arg(long, overrides_with = "flat")]
    pub no_flat: bool,

    /// Case convention for generated identifiers
    #[arg(long, value_enum)]
    pub naming: Option<NamingStrategy>,

    /// Keep file extensions in identifiers
    #[arg(long, overrides_with = "no_include_extensions")]
    pub include_extensions: bool,

    /// Drop file extensions from identifiers, even if the config file keeps them
    #[arg(long, overrides_with = "include_extensions")]
    pub no_include_extensions: bool,

    /// String prepended to every identifier
    #[arg(long)]
    pub prefix: Option<String>,

    /// Regenerate whenever the asset directory changes
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Quiet period in milliseconds before a watch-triggered run
    #[arg(long, default_value_t = 200)]
    pub debounce_ms: u64,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
