use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub window_len: usize,
    pub sample_rate_hz: f32,
    pub frequency_hz: f32,
    pub noise: f32,
    pub seed: u64,
}

impl AnalysisConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading analysis config {}", path_ref.display()))?;
        let config: AnalysisConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing analysis config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(window_len: usize, sample_rate_hz: f32, frequency_hz: f32, seed: u64) -> Self {
        Self {
            window_len,
            sample_rate_hz,
            frequency_hz,
            noise: 0.03,
            seed,
        }
    }
}
