use anyhow::Result as AnyhowResult;
use bionic::app::session;
use bionic::app::Pager;
use bionic::config::PagerConfig;
use bionic::error::PagerError;
use bionic::model::document::{detect_terminal_width, Document};
use bionic::services::{log_dirs, signal_handler, terminal_modes, tracing_setup};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};

/// A terminal pager with bionic reading emphasis
#[derive(Parser, Debug)]
#[command(name = "bionic")]
#[command(about = "Page through a text file with the start of every word in bold", long_about = None)]
#[command(version)]
struct Args {
    /// Text file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to log file for diagnostics (default: per-process file in the state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Parse the command line; `--help` and `--version` print and exit here.
fn parse_args<I, T>(argv: I) -> Result<Args, PagerError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(PagerError::Usage(e.render().to_string())),
    }
}

/// Name shown in the status bar: the file name without its directories.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn initialize_app(args: &Args) {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| log_dirs::main_log_path("bionic"));
    if tracing_setup::init_global(&log_file) {
        log_dirs::cleanup_stale_logs();
    }

    tracing::info!("Pager starting for {:?}", args.file);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));
}

fn main() -> AnyhowResult<()> {
    let args = parse_args(std::env::args_os())?;
    initialize_app(&args);

    let config = PagerConfig::default();
    let width = detect_terminal_width(config.fallback_width);
    let document = Document::load(&args.file, width, config.lines_per_page)?;

    let mut pager = Pager::new(document, source_name(&args.file), width);

    // The handlers only set a flag that the session loop polls
    signal_handler::install_signal_handlers();
    session::run_interactive(&mut pager, &config)?;

    tracing::info!("Pager exiting");
    Ok(())
}
