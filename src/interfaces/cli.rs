// ============================================================
// COMMAND-LINE INTERFACE
// ============================================================
// Host surface: reads files, drives the session, renders its output

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::application::use_cases::export::{MIGRATED_FILE_NAME, SAMPLE_CSV, SAMPLE_FILE_NAME};
use crate::application::use_cases::seo_check::format_report;
use crate::application::Session;
use crate::domain::error::Result;
use crate::infrastructure::decode::InputFormat;
use crate::infrastructure::fs::{read_text, write_text};

#[derive(Parser, Debug)]
#[command(
    name = "storemigrate",
    about = "Migrate e-commerce product catalogs into a storefront import schema"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a catalog (.csv or .json) and write the import JSON
    Migrate {
        input: PathBuf,
        /// Destination path (default: migrated_data.json)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also report SEO field consistency after migrating
        #[arg(long)]
        check: bool,
    },
    /// Migrate in memory and report SEO field consistency
    Check { input: PathBuf },
    /// Print the loaded catalog as a text table
    Preview {
        input: PathBuf,
        /// Maximum number of records to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Write the sample catalog CSV
    Sample {
        /// Destination path (default: sample_store_data.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Migrate {
            input,
            output,
            check,
        } => migrate(&input, output, check),
        Command::Check { input } => check_catalog(&input),
        Command::Preview { input, limit } => preview(&input, limit),
        Command::Sample { output } => sample(output),
    }
}

fn load_session(input: &Path) -> Result<Session> {
    let format = InputFormat::from_path(input)?;
    let content = read_text(input)?;
    Session::new().load(&content, format)
}

fn migrate(input: &Path, output: Option<PathBuf>, check: bool) -> Result<()> {
    let session = load_session(input)?.migrate()?;
    let json = session.export()?;

    let output = output.unwrap_or_else(|| PathBuf::from(MIGRATED_FILE_NAME));
    write_text(&output, &json)?;
    println!(
        "migrated {} records -> {}",
        session.mapped().len(),
        output.display()
    );

    if check {
        println!("{}", format_report(&session.seo_check()?));
    }

    Ok(())
}

fn check_catalog(input: &Path) -> Result<()> {
    let session = load_session(input)?.migrate()?;
    println!("{}", format_report(&session.seo_check()?));
    Ok(())
}

fn preview(input: &Path, limit: usize) -> Result<()> {
    let session = load_session(input)?;
    println!("{}", session.preview(limit)?);
    Ok(())
}

fn sample(output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(SAMPLE_FILE_NAME));
    write_text(&output, SAMPLE_CSV)?;
    println!("wrote sample catalog -> {}", output.display());
    Ok(())
}
