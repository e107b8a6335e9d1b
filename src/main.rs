mod app_error;
mod cli;
mod graphics;
mod velocity;
mod widget;

use app_error::Result;
use clap::Parser;
use cli::Args;
use env_logger::{Env, Target};
use std::fs::File;
use std::path::Path;
use widget::CloudWidget;

/// Fallback when the terminal size cannot be read
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Sets up logging. The demo owns the terminal, so records only go to a
/// file; without one, logging stays off unless `RUST_LOG` asks for it.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn terminal_size() -> (u16, u16) {
    if let Some(size) = termsize::get() {
        return (size.cols, size.rows);
    }
    crossterm::terminal::size().unwrap_or(DEFAULT_SIZE)
}

/// Main function
fn main() -> Result<()> {
    let settings = Args::parse().into_settings()?;
    init_logging(settings.log_file.as_deref())?;

    let (columns, rows) = terminal_size();
    log::info!(
        "starting with {} tags on a {}x{} terminal at {} fps",
        settings.tags.len(),
        columns,
        rows,
        settings.fps
    );

    let mut widget = CloudWidget::new(&settings, columns, rows);
    widget.run()
}
