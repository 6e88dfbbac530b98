use num_complex::Complex32;
use rustfft::{num_traits::Zero, Fft, FftPlanner};

use crate::math::stats::StatsHelper;
use crate::prelude::{StatsError, StatsResult};

/// Helper that wraps the `rustfft` planner for reuse. The transform size
/// is padded up to the next power of two so arbitrary window lengths get
/// an efficient radix-2 plan.
pub struct SpectrumHelper {
    fft: std::sync::Arc<dyn Fft<f32>>,
    size: usize,
}

impl SpectrumHelper {
    pub fn new(window_len: usize) -> StatsResult<Self> {
        if window_len == 0 {
            return Err(StatsError::InvalidInput("empty spectrum window".into()));
        }
        let size = StatsHelper::next_power_of_two(window_len as u32) as usize;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Ok(Self { fft, size })
    }

    /// Padded transform size (a power of two).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-pads the input to the planned size and returns the magnitude
    /// spectrum.
    pub fn magnitudes(&self, input: &[f32]) -> StatsResult<Vec<f32>> {
        if input.len() > self.size {
            return Err(StatsError::InvalidInput(format!(
                "window of {} samples exceeds planned size {}",
                input.len(),
                self.size
            )));
        }
        let mut buffer: Vec<Complex32> = input
            .iter()
            .map(|&value| Complex32::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex32::zero());
        self.fft.process(&mut buffer);
        Ok(buffer.iter().map(|c| c.norm()).collect())
    }
}
