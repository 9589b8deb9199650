use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use trendwatch_detector::DayErrorPolicy;
use trendwatch_runner::{load_config, load_default_config, render_json, render_text, run_files};

/// Report output format
#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Burst word detection over daily posts
#[derive(Parser)]
#[command(name = "trendwatch")]
#[command(about = "Detect bursting words and their context in daily posts", long_about = None)]
#[command(version)]
struct Cli {
    /// History posts (`day,id,text`), used only to warm up the baseline
    #[arg(long)]
    history: PathBuf,

    /// Current posts (`day,id,text`) to detect on
    #[arg(long)]
    current: PathBuf,

    /// Detection config JSON (embedded defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Withhold failing days instead of aborting
    #[arg(long)]
    skip_failed_days: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };
    if cli.skip_failed_days {
        config = config.with_policy(DayErrorPolicy::SkipDay);
    }

    let report = run_files(config, &cli.history, &cli.current)?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}
