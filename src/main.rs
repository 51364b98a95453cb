use clap::Parser;
use notes::commands::{self, Command, TerminalEditor};
use notes::core::config::{self, ResolvedConfig};
use notes::core::store::NoteStore;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notes", about = "Keep short notes from the terminal")]
struct Args {
    /// Note file to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.data_file.as_deref());
    init_logging(&resolved);
    log::info!("Notes starting: {:?}", args.command);

    let mut store = match NoteStore::open(&resolved.data_file) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Could not open {}: {}", resolved.data_file.display(), e);
            eprintln!("{}: {e}", resolved.data_file.display());
            return ExitCode::FAILURE;
        }
    };

    let mut editor = TerminalEditor {
        tab_width: resolved.tab_width,
    };
    match commands::execute(&args.command, &mut store, &mut editor, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger. Logging stays off if the log file can't be opened.
fn init_logging(resolved: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = resolved.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&resolved.log_file)
    {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
