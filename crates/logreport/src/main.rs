use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;

use logreport::reader::StdoutSink;
use logreport::render::OutputFormat;
use logreport::runtime::{boot, run, RunRequest};

/// Build reports from newline-delimited JSON access logs
#[derive(Parser, Debug)]
#[command(name = "logreport", version)]
struct Cli {
    /// Log file(s) to read, in order
    #[arg(long = "file", num_args = 1.., required = true, value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Report type: average | user_agent
    #[arg(long)]
    report: String,

    /// Only keep records from this day (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Output format, overrides the configured one
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Path to a configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        tracing::error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = boot::boot(cli.config.as_deref())?;

    let request = RunRequest {
        files: cli.files,
        report: cli.report,
        date: cli.date,
        format: cli.format.unwrap_or(config.output.format),
    };

    let output = run(&request, &StdoutSink).context("Report generation failed")?;
    print!("{}", output);
    Ok(())
}
