use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use lazypick::config;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{App, Outcome};

mod app;
mod cli;
mod screen;
mod tui;
mod ui;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lazypick");

    let args = cli::Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    args.apply(&mut config.picker);
    let items = args.read_items()?;
    let config_path = args.config.clone().or_else(config::config_path);

    match App::new(items, config, config_path).run().await? {
        Some(Outcome::Selected(item) | Outcome::Accepted(item)) => {
            println!("{item}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lazypick").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lazypick.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}
