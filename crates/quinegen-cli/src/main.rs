//! quinegen CLI — construction toolkit for sentinel-based quines.
//!
//! Provides five commands covering the full lifecycle of a self-reproducing
//! program: `new` scaffolds a skeleton for a target language, `solve` runs
//! the fixed-point pass that turns a skeleton into a finished source,
//! `expand` streams a raw expansion to stdout, `escape` renders bytes as a
//! literal body, and `verify` checks the round-trip invariant.
//!
//! The core algorithms live in [`quinegen_core`]; this crate is argument
//! parsing and presentation only.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quinegen",
    about = "Quine construction toolkit — escape, expand, solve, verify",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new quine project from an embedded skeleton
    New {
        /// Project name (creates a directory with this name)
        name: String,

        /// Target language for the generated quine
        #[arg(long, value_enum)]
        lang: Option<LangChoice>,

        /// Overwrite files if the directory already exists
        #[arg(long)]
        force: bool,
    },

    /// Run the fixed-point pass: expand a skeleton into its finished source
    Solve {
        /// Path to the skeleton file (source with the @Q@@S@@Q@ placeholder)
        skeleton: PathBuf,

        /// Output path (default: skeleton path with `.tmpl` stripped)
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[command(flatten)]
        sentinels: SentinelArgs,
    },

    /// Expand a template and stream the result to stdout
    Expand {
        /// Path to the template file
        template: PathBuf,

        #[command(flatten)]
        sentinels: SentinelArgs,
    },

    /// Escape a file (or stdin) as a double-quoted literal body, to stdout
    Escape {
        /// Path to the input file (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Check that expanding a skeleton reproduces a source byte for byte
    Verify {
        /// Path to the skeleton file
        skeleton: PathBuf,

        /// Path to the claimed source file
        source: PathBuf,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        sentinels: SentinelArgs,
    },
}

/// Sentinel overrides shared by the commands that run an expansion.
#[derive(clap::Args)]
struct SentinelArgs {
    /// Quote-sentinel token (exactly 3 bytes)
    #[arg(long, default_value = "@Q@")]
    quote_sentinel: String,

    /// String-sentinel token (exactly 3 bytes)
    #[arg(long, default_value = "@S@")]
    string_sentinel: String,
}

impl SentinelArgs {
    fn expander(&self) -> anyhow::Result<quinegen_core::Expander> {
        let quote = quinegen_core::Sentinel::parse(&self.quote_sentinel)?;
        let string = quinegen_core::Sentinel::parse(&self.string_sentinel)?;
        Ok(quinegen_core::Expander::new(quote, string)?)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LangChoice {
    Cpp,
    Rust,
    Python,
}

impl LangChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Rust => "rust",
            Self::Python => "python",
        }
    }

    /// File name of the finished quine inside a scaffolded project.
    pub fn source_file(&self) -> &'static str {
        match self {
            Self::Cpp => "quine.cpp",
            Self::Rust => "quine.rs",
            Self::Python => "quine.py",
        }
    }

    /// The embedded skeleton for this language.
    pub fn skeleton(&self) -> &'static str {
        match self {
            Self::Cpp => quinegen_core::templates::embedded::CPP_SKELETON,
            Self::Rust => quinegen_core::templates::embedded::RUST_SKELETON,
            Self::Python => quinegen_core::templates::embedded::PYTHON_SKELETON,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New { name, lang, force } => {
            commands::new::run(&name, lang, force)?;
        }
        Commands::Solve {
            skeleton,
            output,
            sentinels,
        } => {
            commands::solve::run(&skeleton, output.as_deref(), &sentinels.expander()?)?;
        }
        Commands::Expand {
            template,
            sentinels,
        } => {
            commands::expand::run(&template, &sentinels.expander()?)?;
        }
        Commands::Escape { input } => {
            commands::escape::run(input.as_deref())?;
        }
        Commands::Verify {
            skeleton,
            source,
            json,
            sentinels,
        } => {
            commands::verify::run(&skeleton, &source, json, &sentinels.expander()?)?;
        }
    }

    Ok(())
}
