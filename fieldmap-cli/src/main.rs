//! Fieldmap CLI - Command-line tool for field mapping generation
//!
//! This binary provides two one-shot batch operations:
//! - generate: project raw field definitions into a mapping artifact
//! - recase: rewrite the expressions of an existing artifact as camelCase

use clap::{Parser, Subcommand};
use fieldmap_io::{
    execute_generate, execute_recase, GenerateRequest, RecaseRequest, DEFAULT_FIELD_DEFS_PATH,
    DEFAULT_MAPPING_PATH,
};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldmap")]
#[command(about = "Generate field mapping artifacts from raw field definitions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project raw field definitions into a mapping artifact
    Generate {
        /// Field definition export (JSON array)
        #[arg(default_value = DEFAULT_FIELD_DEFS_PATH)]
        input: PathBuf,
        /// Mapping artifact to write
        #[arg(short, long, default_value = DEFAULT_MAPPING_PATH)]
        output: PathBuf,
    },
    /// Recase the expressions of an existing mapping artifact, in place
    Recase {
        /// Mapping artifact to rewrite
        #[arg(default_value = DEFAULT_MAPPING_PATH)]
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => {
            handle_generate(input, output)?;
        }
        Commands::Recase { file } => {
            handle_recase(file)?;
        }
    }

    Ok(())
}

fn handle_generate(input: PathBuf, output: PathBuf) -> Result<(), Box<dyn Error>> {
    let request = GenerateRequest { input, output };
    let summary = execute_generate(&request)?;
    let mut stderr = std::io::stderr().lock();
    writeln!(
        &mut stderr,
        "Converted {} of {} field definitions ({} ignored) -> {}",
        summary.entries_written,
        summary.fields_read,
        summary.ignored,
        request.output.display()
    )?;
    Ok(())
}

fn handle_recase(file: PathBuf) -> Result<(), Box<dyn Error>> {
    let request = RecaseRequest { file };
    let summary = execute_recase(&request)?;
    let mut stderr = std::io::stderr().lock();
    writeln!(
        &mut stderr,
        "Recased {} of {} expressions in {}",
        summary.changed,
        summary.records,
        request.file.display()
    )?;
    Ok(())
}
