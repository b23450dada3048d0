//! Unitsmith — render process-supervisor unit files from YAML descriptors.
//!
//! # Usage
//!
//! ```text
//! unitsmith <input.yaml> [--output-dir <DIR>] [--templates <DIR>] [--dry-run]
//! unitsmith all [--service-dir <DIR>] [--output-dir <DIR>] [--templates <DIR>] [--dry-run]
//! ```
//!
//! # Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! | 0    | success (also `--help`/`--version`)  |
//! | 1    | usage error or unclassified failure  |
//! | 2    | I/O error                            |
//! | 3    | YAML decode error                    |
//! | 4    | validation error                     |
//! | 5    | template render error                |
//! | 6    | service directory not configured     |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use unitsmith_core::error::DescriptorError;
use unitsmith_gen::{
    pipeline::{self, GenConfig, GenScope},
    GenError, WriteResult,
};
use unitsmith_renderer::RenderError;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_OK: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_DECODE: i32 = 3;
const EXIT_VALIDATION: i32 = 4;
const EXIT_RENDER: i32 = 5;
const EXIT_CONFIG: i32 = 6;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "unitsmith",
    version,
    about = "Render process-supervisor unit files from YAML service descriptors",
    long_about = None,
)]
struct Cli {
    /// Descriptor file to convert, or the literal `all` to process every file
    /// in the service directory.
    input: String,

    /// Directory scanned in `all` mode.
    #[arg(long, env = "SERVICE_DIR", value_name = "DIR")]
    service_dir: Option<PathBuf>,

    /// Write generated units here instead of their default location.
    #[arg(long, env = "OUTPUT_DIR", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Directory of `.tera` templates overriding the embedded ones.
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    // clap exits 2 on bad usage by default; this tool documents 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GenConfig {
        service_dir: cli.service_dir,
        output_dir: cli.output_dir,
        template_dir: cli.templates,
    };

    let results = if cli.input == "all" {
        pipeline::run(GenScope::All, &config, cli.dry_run)
            .context("batch generation failed")?
    } else {
        let input = PathBuf::from(&cli.input);
        pipeline::run(GenScope::File(input), &config, cli.dry_run)?
    };

    for r in &results {
        print_results(&r.source, &r.writes, cli.dry_run);
    }
    if results.is_empty() {
        println!("No descriptor files found in the service directory.");
    }
    Ok(())
}

fn print_results(source: &Path, writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let count = writes.len();
    let noun = if count == 1 { "unit" } else { "units" };
    println!("{prefix}{} {} ({count} {noun})", "✓".green(), source.display());
    for r in writes {
        match r {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
        }
    }
}

/// Map the failure to its documented exit code by walking the anyhow chain.
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(gen) = cause.downcast_ref::<GenError>() {
            return match gen {
                GenError::Descriptor(DescriptorError::Io { .. }) => EXIT_IO,
                GenError::Descriptor(DescriptorError::Parse { .. }) => EXIT_DECODE,
                GenError::Descriptor(DescriptorError::Invalid { .. }) => EXIT_VALIDATION,
                GenError::Render { source: RenderError::Io { .. }, .. } => EXIT_IO,
                GenError::Render { .. } => EXIT_RENDER,
                GenError::Io { .. } => EXIT_IO,
                GenError::ServiceDirUnset => EXIT_CONFIG,
            };
        }
    }
    EXIT_USAGE
}
