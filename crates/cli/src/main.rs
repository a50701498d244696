//! `larder` binary entry point.

mod app;
mod config;
mod editor;

use std::io;
use std::process::ExitCode;

use larder_model::JsonStorage;
use larder_observability::LogFormat;

use crate::app::App;
use crate::config::{CliConfig, HELP_TEXT, LOG_FORMAT_ENV};
use crate::editor::RustylineEditor;

fn main() -> ExitCode {
    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    let config = CliConfig::parse(args)?;

    if config.show_help {
        print!("{HELP_TEXT}");
        return Ok(());
    }
    if config.show_version {
        println!("larder {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_default().parse::<LogFormat>();
    larder_observability::init(log_format.clone().unwrap_or_default());
    if let Err(err) = log_format {
        tracing::warn!(error = %err, "falling back to text logs");
    }

    let prefs_path = config.prefs_path();
    tracing::info!(path = %prefs_path.display(), "loading preferences");
    let mut app = App::load(JsonStorage::new(prefs_path), !config.no_save)?;

    let mut out = io::stdout().lock();
    if config.batch_mode {
        app.run_batch(io::stdin().lock(), &mut out)?;
    } else {
        let mut editor = RustylineEditor::new()?;
        app.run_interactive(&mut editor, &mut out)?;
    }

    app.save()
}
