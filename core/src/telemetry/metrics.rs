use std::sync::Mutex;

/// Counts summaries produced and inputs rejected across a run.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    summaries: usize,
    rejections: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                summaries: 0,
                rejections: 0,
            }),
        }
    }

    pub fn record_summary(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.summaries += 1;
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejections += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.summaries, metrics.rejections)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
