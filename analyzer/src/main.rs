use anyhow::Context;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use vitalcore::telemetry::MetricsRecorder;
use workflow::config::AnalysisConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline vital-signs statistics driver")]
struct Args {
    /// Load an analysis config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 1000)]
    window_len: usize,
    #[arg(long, default_value_t = 125.0)]
    sample_rate_hz: f32,
    /// Heart-rate fundamental of the synthetic waveform
    #[arg(long, default_value_t = 1.2)]
    frequency_hz: f32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Append the JSON summary line to this baseline file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        AnalysisConfig::load(path)?
    } else {
        AnalysisConfig::from_args(
            args.window_len,
            args.sample_rate_hz,
            args.frequency_hz,
            args.seed,
        )
    };

    let runner = Runner::new(config);
    let metrics = MetricsRecorder::new();
    let result = runner.execute(&metrics)?;

    println!(
        "Offline run -> samples {}, mean {:.4}, std {:.4}, rms {:.4}, peak gradient {:.4}, spectrum peak bin {}",
        result.summary.sample_count,
        result.summary.mean,
        result.summary.std_dev,
        result.summary.rms,
        result.summary.peak_gradient,
        result.peak_bin
    );

    if let Some(report_path) = args.report {
        let line = serde_json::to_string(&serde_json::json!({
            "summary": result.summary,
            "spectrum_peak_bin": result.peak_bin,
        }))
        .context("serializing summary for the baseline report")?;
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
    }

    let (summaries, rejections) = metrics.snapshot();
    log::info!("run complete: {} summaries, {} rejections", summaries, rejections);

    Ok(())
}
