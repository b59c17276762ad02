use anyhow::{Context, Result as AnyhowResult};
use bionic::app::flash::{self, FlashOptions, DEFAULT_WPM};
use bionic::services::time_source::RealTimeSource;
use bionic::services::{log_dirs, tracing_setup};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Flash a text file one word at a time
#[derive(Parser, Debug)]
#[command(name = "bionic-flash")]
#[command(about = "Show a text file one word at a time at a fixed reading speed", long_about = None)]
#[command(version)]
struct Args {
    /// Text file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Words per minute
    #[arg(long, default_value_t = DEFAULT_WPM, value_parser = clap::value_parser!(u32).range(1..))]
    wpm: u32,

    /// Clear the screen before each word
    #[arg(short, long)]
    clear: bool,

    /// Path to log file for diagnostics (default: per-process file in the state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| log_dirs::main_log_path("bionic-flash"));
    tracing_setup::init_global(&log_file);

    let text = flash::load_text(&args.file)?;
    let options = FlashOptions {
        wpm: args.wpm,
        clear_each: args.clear,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let session = flash::run(&text, &options, &mut out, &RealTimeSource)
        .context("failed to write to the terminal")?;

    tracing::info!("Flashed {} words", session.words_shown());
    Ok(())
}
