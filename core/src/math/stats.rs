use crate::prelude::{StatsError, StatsResult};

pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean of the samples.
    pub fn mean(samples: &[f32]) -> StatsResult<f32> {
        if samples.is_empty() {
            return Err(StatsError::InvalidInput("mean of empty signal".into()));
        }
        let sum: f32 = samples.iter().sum();
        Ok(sum / samples.len() as f32)
    }

    /// Sample standard deviation (n - 1 normalization).
    pub fn std_dev(samples: &[f32]) -> StatsResult<f32> {
        if samples.len() < 2 {
            return Err(StatsError::InvalidInput(
                "standard deviation requires at least 2 samples".into(),
            ));
        }
        let mean = Self::mean(samples)?;
        let sum_sq: f32 = samples.iter().map(|&v| (v - mean) * (v - mean)).sum();
        Ok((sum_sq / (samples.len() - 1) as f32).sqrt())
    }

    /// Root mean square of the samples.
    pub fn rms(samples: &[f32]) -> StatsResult<f32> {
        if samples.is_empty() {
            return Err(StatsError::InvalidInput("rms of empty signal".into()));
        }
        let sum_sq: f32 = samples.iter().map(|&v| v * v).sum();
        Ok((sum_sq / samples.len() as f32).sqrt())
    }

    /// Discrete derivative: central differences in the interior,
    /// second-order one-sided differences at both edges.
    pub fn gradient(samples: &[f32]) -> StatsResult<Vec<f32>> {
        let n = samples.len();
        if n < 3 {
            return Err(StatsError::InvalidInput(
                "gradient requires at least 3 samples".into(),
            ));
        }
        let mut result = vec![0.0; n];
        for i in 1..n - 1 {
            result[i] = (samples[i + 1] - samples[i - 1]) / 2.0;
        }
        result[0] = (-3.0 * samples[0] + 4.0 * samples[1] - samples[2]) / 2.0;
        result[n - 1] = (3.0 * samples[n - 1] - 4.0 * samples[n - 2] + samples[n - 3]) / 2.0;
        Ok(result)
    }

    /// Smallest power of two greater than or equal to `val`.
    /// `next_power_of_two(0)` is 1: the accumulator starts at 1 and the
    /// loop never runs.
    pub fn next_power_of_two(val: u32) -> u32 {
        let mut n = 1u32;
        while n < val {
            n <<= 1;
        }
        n
    }

    /// Cosine similarity `dot(a, b) / (|a| * |b|)`. An all-zero input
    /// yields NaN per IEEE-754 division; callers that care must screen
    /// for degenerate vectors themselves.
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> StatsResult<f32> {
        if a.is_empty() || b.is_empty() {
            return Err(StatsError::InvalidInput(
                "cosine similarity of empty signal".into(),
            ));
        }
        if a.len() != b.len() {
            return Err(StatsError::InvalidInput(format!(
                "cosine similarity length mismatch: {} vs {}",
                a.len(),
                b.len()
            )));
        }
        let mut dot = 0.0f32;
        let mut norm_a = 0.0f32;
        let mut norm_b = 0.0f32;
        for (&x, &y) in a.iter().zip(b.iter()) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn mean_of_known_signal() {
        let mean = StatsHelper::mean(&[1.0, 2.0, 4.0, 7.0, 11.0]).unwrap();
        assert!((mean - 5.0).abs() < EPS);
    }

    #[test]
    fn mean_rejects_empty_signal() {
        assert!(StatsHelper::mean(&[]).is_err());
    }

    #[test]
    fn constant_signal_has_zero_std_dev() {
        let samples = [3.5; 8];
        assert!((StatsHelper::mean(&samples).unwrap() - 3.5).abs() < EPS);
        assert!(StatsHelper::std_dev(&samples).unwrap().abs() < EPS);
    }

    #[test]
    fn std_dev_uses_sample_normalization() {
        // sample variance of [1, 2, 3, 4] is 5/3
        let std = StatsHelper::std_dev(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((std - (5.0f32 / 3.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn std_dev_rejects_single_sample() {
        assert!(StatsHelper::std_dev(&[1.0]).is_err());
    }

    #[test]
    fn rms_is_nonnegative_and_handles_single_value() {
        assert!((StatsHelper::rms(&[-4.0]).unwrap() - 4.0).abs() < EPS);
        assert!(StatsHelper::rms(&[-1.0, 1.0, -1.0]).unwrap() >= 0.0);
    }

    #[test]
    fn gradient_of_linear_ramp_is_constant() {
        let samples: Vec<f32> = (0..16).map(|i| 0.75 * i as f32 - 2.0).collect();
        let gradient = StatsHelper::gradient(&samples).unwrap();
        for value in gradient {
            assert!((value - 0.75).abs() < EPS);
        }
    }

    #[test]
    fn gradient_of_known_signal() {
        let gradient = StatsHelper::gradient(&[1.0, 2.0, 4.0, 7.0, 11.0]).unwrap();
        let expected = [0.5, 1.5, 2.5, 3.5, 4.5];
        assert_eq!(gradient.len(), expected.len());
        for (got, want) in gradient.iter().zip(expected.iter()) {
            assert!((got - want).abs() < EPS);
        }
    }

    #[test]
    fn gradient_rejects_short_signal() {
        assert!(StatsHelper::gradient(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn next_power_of_two_boundaries() {
        assert_eq!(StatsHelper::next_power_of_two(0), 1);
        assert_eq!(StatsHelper::next_power_of_two(1), 1);
        assert_eq!(StatsHelper::next_power_of_two(5), 8);
        assert_eq!(StatsHelper::next_power_of_two(1024), 1024);
        assert_eq!(StatsHelper::next_power_of_two(1025), 2048);
    }

    #[test]
    fn next_power_of_two_is_minimal() {
        for val in 1..200u32 {
            let pow = StatsHelper::next_power_of_two(val);
            assert!(pow.is_power_of_two());
            assert!(pow >= val);
            assert!(pow / 2 < val);
        }
    }

    #[test]
    fn cosine_self_similarity_is_one() {
        let a = [0.5, -1.0, 2.0, 3.0];
        let sim = StatsHelper::cosine_similarity(&a, &a).unwrap();
        assert!((sim - 1.0).abs() < EPS);
    }

    #[test]
    fn cosine_orthogonal_vectors_yield_zero() {
        let sim = StatsHelper::cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < EPS);
    }

    #[test]
    fn cosine_zero_vector_propagates_nan() {
        let sim = StatsHelper::cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert!(sim.is_nan());
    }

    #[test]
    fn cosine_rejects_length_mismatch() {
        assert!(StatsHelper::cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }
}
