//! slate-glue — generate scripting glue code for Slate widgets.
//!
//! Scans an engine source tree for widget headers that declare a
//! `SLATE_BEGIN_ARGS` … `SLATE_END_ARGS` block, renders one `$<Header>.cpp`
//! per widget from a template, and writes `DEFINE_FUNCTION.json` listing
//! every argument definition macro the generated files rely on.
//!
//! ```text
//! slate-glue -s Engine/Source/Runtime -o GlueCode -t Template/Template.txt
//! ```
//!
//! Existing output files are never overwritten; the manifest is rebuilt on
//! every run.

mod config;
mod driver;
mod extract;
mod manifest;
mod model;
mod render;
mod snippet;
mod walk;

use anyhow::Result;
use clap::Parser;
use config::{GlueConfig, ManifestScope};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "slate-glue",
    about = "Generate glue code and a DEFINE_FUNCTION manifest from Slate widget headers"
)]
struct Cli {
    /// Root of the header tree to scan (recursively)
    #[arg(short = 's', long)]
    source: PathBuf,

    /// Directory receiving the generated files (created if missing, parent must exist)
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Template with $WidgetClass$, $SuperClass$, $__ARGUMENTS__$ and $__DTS_ARGS__$ placeholders
    #[arg(short = 't', long)]
    template: PathBuf,

    /// Header extension to scan for, without the dot
    #[arg(short = 'e', long, default_value = config::DEFAULT_EXTENSION)]
    extension: String,

    /// Skip headers with this base name (repeatable). Added to the built-in list.
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Do not apply the built-in exclusion list
    #[arg(long)]
    no_default_exclusions: bool,

    /// Which widgets contribute to DEFINE_FUNCTION.json
    #[arg(long, value_enum, default_value_t = ManifestScope::Matched)]
    manifest_scope: ManifestScope,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn into_config(self) -> GlueConfig {
        let mut config = GlueConfig::new(self.source, self.output, self.template);
        config.extension = self.extension.trim_start_matches('.').to_string();
        if self.no_default_exclusions {
            config.exclusions.clear();
        }
        config.exclusions.extend(self.exclude);
        config.manifest_scope = self.manifest_scope;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = cli.into_config();
    let report = driver::run(&config)?;
    log::info!("{}", report);
    Ok(())
}
