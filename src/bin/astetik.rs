use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use astetik::{ChartConfig, DataFrame};

#[derive(Parser)]
#[command(name = "astetik")]
#[command(
    about = "Render opinionated charts as SVG",
    long_about = "Draws one chart from a column-oriented JSON dataset and a JSON chart configuration. Writes the SVG to the configured save path, to --out, or to stdout."
)]
struct Cli {
    /// Dataset as a JSON object of equal-length column arrays
    #[arg(long, required = true)]
    data: PathBuf,
    /// Chart configuration JSON file (tagged with "chart": "line" or "multikde")
    #[arg(long, required = true)]
    config: PathBuf,
    /// Output SVG path; overrides the configuration's save path
    #[arg(long)]
    out: Option<PathBuf>,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Append to log file instead of truncating
    #[arg(long)]
    append_log: bool,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            File::options().create(true).append(true).open(path)
        } else {
            File::create(path)
        }
        .with_context(|| format!("Could not open log file '{}'", path.display()))?;
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = ChartConfig::load(&cli.config)
        .with_context(|| format!("Failed to load chart config '{}'", cli.config.display()))?;
    if let Some(ref out) = cli.out {
        config.options_mut().save = Some(out.clone());
    }

    let file = File::open(&cli.data)
        .with_context(|| format!("Failed to open dataset '{}'", cli.data.display()))?;
    let data = DataFrame::from_json_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read dataset '{}'", cli.data.display()))?;
    info!("Loaded {} rows from {}", data.len(), cli.data.display());

    let mut ctx = config.context();
    let figure = config.render(&mut ctx, &data).context("Failed to render chart")?;

    if config.options().save.is_none() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(figure.render().as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}
