//! Preset Reader CLI Application
//!
//! Command-line interface for the preset decoder library. It unwraps a
//! program or library file, decodes the selected program and prints either
//! a panel-style text report or pretty JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod report;

/// Preset Reader - Decode synthesizer program files
#[derive(Parser, Debug)]
#[command(name = "preset-cli")]
#[command(about = "Decode synthesizer program/library files", long_about = None)]
#[command(version)]
struct Args {
    /// Program or library file to decode
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Program number to select from a library file
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    program: u32,

    /// Emit the program as pretty-printed JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Preset Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", preset_decoder::VERSION);

    let bytes = preset_decoder::unwrap_file(&args.file, args.program)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    log::debug!("unwrapped {} bytes from {}", bytes.len(), args.file.display());

    let program = preset_decoder::decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    if !program.is_well_formed() {
        log::warn!(
            "program '{}' has unexpected record markers",
            program.program_name
        );
    }

    let rendered = if args.json {
        report::json_report(&program)?
    } else {
        report::text_report(&program)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
