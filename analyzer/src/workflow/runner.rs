use crate::generator::profile::build_waveform;
use crate::workflow::config::AnalysisConfig;
use anyhow::Context;
use vitalcore::math::{SpectrumHelper, StatsHelper};
use vitalcore::report::SignalSummary;
use vitalcore::telemetry::{LogManager, MetricsRecorder};

pub struct AnalysisResult {
    pub summary: SignalSummary,
    pub gradient: Vec<f32>,
    pub spectrum: Vec<f32>,
    pub peak_bin: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: AnalysisConfig,
}

impl Runner {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Generates the configured waveform and runs every statistic over it.
    pub fn execute(&self, metrics: &MetricsRecorder) -> anyhow::Result<AnalysisResult> {
        let logger = LogManager::new();
        let samples = build_waveform(&self.config).context("generating waveform")?;

        let summary = match SignalSummary::from_samples(&samples) {
            Ok(summary) => summary,
            Err(err) => {
                metrics.record_rejection();
                logger.record_rejection(&err.to_string());
                return Err(err).context("summarizing waveform");
            }
        };
        let gradient =
            StatsHelper::gradient(&samples).context("computing waveform gradient")?;

        let spectrum_helper =
            SpectrumHelper::new(samples.len()).context("planning spectrum window")?;
        let spectrum = spectrum_helper
            .magnitudes(&samples)
            .context("computing magnitude spectrum")?;

        // Peak search over positive frequencies only; bin 0 is DC.
        let half = spectrum.len() / 2;
        let peak_bin = spectrum[1..half]
            .iter()
            .enumerate()
            .fold((1, f32::MIN), |(best, max), (offset, &value)| {
                if value > max {
                    (offset + 1, value)
                } else {
                    (best, max)
                }
            })
            .0;

        metrics.record_summary();
        logger.record_stat("waveform mean", summary.mean);
        logger.record_stat("waveform rms", summary.rms);
        logger.record(&format!("spectrum peak bin {}", peak_bin));

        Ok(AnalysisResult {
            summary,
            gradient,
            spectrum,
            peak_bin,
        })
    }
}
