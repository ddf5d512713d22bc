//! Mindful EEG - terminal driver for the EEG prediction core
//!
//! ```text
//! mindful-eeg predict <file.csv> [target]
//! mindful-eeg batch   <file.csv> [target]
//! mindful-eeg sample  [dir]
//! ```
//!
//! Server and timeout come from `EEG_API_BASE` / `EEG_REQUEST_TIMEOUT`
//! (a `.env` file is honored).

use std::path::PathBuf;
use std::process::ExitCode;

use mindful_eeg_core::api::{self, EegPanel};
use mindful_eeg_core::constants;
use mindful_eeg_core::logic::inference_client::{ClientConfig, EegClient};
use mindful_eeg_core::logic::presenter::{ChartRenderer, ChartSeries, ChartSlot};
use mindful_eeg_core::logic::upload::UploadFile;
use mindful_eeg_core::{EegError, PredictionTarget};

const USAGE: &str = "usage: mindful-eeg <predict|batch> <file.csv> [target] | mindful-eeg sample [dir]";

/// Draws series as text bars on stdout
struct TerminalRenderer;

impl ChartRenderer for TerminalRenderer {
    fn render(&self, slot: ChartSlot, series: &ChartSeries) {
        let peak = series.values.iter().cloned().fold(0.0f64, f64::max).max(f64::EPSILON);
        println!("-- {:?} ({:?}) --", slot, series.style);
        for (label, value) in series.labels.iter().zip(&series.values) {
            if *value == 0.0 && series.labels.len() > 20 {
                continue;
            }
            let width = ((value / peak) * 40.0).round() as usize;
            println!("{:>8} | {} {}", label, "#".repeat(width), value);
        }
    }
}

enum Command {
    Predict { path: PathBuf, target: PredictionTarget },
    Batch { path: PathBuf, target: PredictionTarget },
    Sample { dir: PathBuf },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let target = || match args.get(2) {
        Some(name) => api::parse_target(name).map_err(|e| e.to_string()),
        None => Ok(PredictionTarget::default()),
    };
    let path = || args.get(1).map(PathBuf::from).ok_or_else(|| USAGE.to_string());

    match args.first().map(String::as_str) {
        Some("predict") => Ok(Command::Predict { path: path()?, target: target()? }),
        Some("batch") => Ok(Command::Batch { path: path()?, target: target()? }),
        Some("sample") => Ok(Command::Sample {
            dir: args.get(1).map(PathBuf::from).unwrap_or_else(constants::get_sample_dir),
        }),
        _ => Err(USAGE.to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    log::info!("Starting {} EEG client v{}", constants::APP_NAME, constants::APP_VERSION);

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", api::error_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), EegError> {
    let config = ClientConfig::default();
    log::info!("Inference server: {}", config.api_base);
    let panel = EegPanel::new(EegClient::new(config)?, TerminalRenderer);

    match command {
        Command::Predict { path, target } => {
            let file = UploadFile::from_path(&path).await?;
            let view = panel.upload_file(target, &file).await?;
            println!("{}", view.title);
            if let Some(note) = view.note {
                println!("({})", note);
            }
            println!("{}", view.headline);
        }
        Command::Batch { path, target } => {
            let file = UploadFile::from_path(&path).await?;
            let view = panel.upload_batch(target, &file).await?;
            println!("{} - {} results", view.title, view.batch.results.len());
            println!("{}", view.summary_text);
        }
        Command::Sample { dir } => {
            let saved = panel.download_sample(&dir).await?;
            println!("Sample saved to {} ({:?})", saved.path.display(), saved.source);
        }
    }

    Ok(())
}
