use log::{info, warn};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// Logs a named scalar statistic at a fixed precision so baselines
    /// stay diffable across runs.
    pub fn record_stat(&self, name: &str, value: f32) {
        info!("{} {:.4}", name, value);
    }

    pub fn record_rejection(&self, reason: &str) {
        warn!("input rejected: {}", reason);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
