use serde::{Deserialize, Serialize};

use crate::math::stats::StatsHelper;
use crate::prelude::{StatsError, StatsResult};

/// Scalar summary of a signal window, emitted as the analyzer baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalSummary {
    pub sample_count: usize,
    pub mean: f32,
    pub std_dev: f32,
    pub rms: f32,
    pub peak_gradient: f32,
}

impl SignalSummary {
    /// Computes every scalar statistic over one window. Requires at
    /// least 3 samples so the gradient edge formulas are defined.
    pub fn from_samples(samples: &[f32]) -> StatsResult<Self> {
        let mean = StatsHelper::mean(samples)?;
        let std_dev = StatsHelper::std_dev(samples)?;
        let rms = StatsHelper::rms(samples)?;
        let gradient = StatsHelper::gradient(samples)?;
        let peak_gradient = gradient.iter().fold(0.0f32, |acc, &v| acc.max(v.abs()));

        Ok(Self {
            sample_count: samples.len(),
            mean,
            std_dev,
            rms,
            peak_gradient,
        })
    }

    pub fn to_json(&self) -> StatsResult<String> {
        serde_json::to_string(self).map_err(|err| StatsError::Internal(err.to_string()))
    }
}
