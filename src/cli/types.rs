use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "sectionize")]
#[command(about = "Wrap HTML headings in nested sections and prepend a table of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for _sectionize.yml / .yaml / .toml (defaults to ./)
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Custom configuration file, may be repeated; later files win
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false, global = true, conflicts_with = "debug")]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sectionize a document
    #[command(alias = "r")]
    Render {
        /// Input HTML file; reads stdin when omitted or `-`
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file; writes stdout when omitted or `-`
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Fail instead of emitting a diagnostic comment when headings cannot be nested
        #[arg(long, default_value_t = false)]
        strict: bool,

        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Report heading structure problems without writing anything
    #[command(alias = "c")]
    Check {
        /// Input HTML files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print the effective global configuration
    Config {
        /// Print only this key
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
}

/// Command-line values that take precedence over all configuration
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Prefix prepended to section IDs
    #[arg(long, value_name = "PREFIX")]
    pub id_prefix: Option<String>,

    /// Markup opening a section; `%id` is replaced by the section ID
    #[arg(long, value_name = "MARKUP")]
    pub start_section: Option<String>,

    /// Markup closing a section
    #[arg(long, value_name = "MARKUP")]
    pub end_section: Option<String>,

    /// Minimum heading count for a table of contents, -1 disables it
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub toc_threshold: Option<i64>,

    /// Markup placed before the table of contents
    #[arg(long, value_name = "MARKUP")]
    pub before_toc: Option<String>,

    /// Markup placed after the table of contents
    #[arg(long, value_name = "MARKUP")]
    pub after_toc: Option<String>,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Overrides {
            id_prefix: args.id_prefix,
            start_section: args.start_section,
            end_section: args.end_section,
            include_toc_threshold: args.toc_threshold,
            before_toc: args.before_toc,
            after_toc: args.after_toc,
        }
    }
}
