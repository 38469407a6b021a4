//! Signal Statistics
//!
//! Compute summary statistics for a normalized complex signal: the envelope
//! (per-sample magnitude), I/Q component ranges, and mean amplitude.

use crate::types::{IQSample, IqPair, Sample};

/// Per-sample magnitude `sqrt(re² + im²)` of a complex signal.
///
/// Output length equals input length; an empty signal has an empty envelope.
pub fn envelope(samples: &[IQSample]) -> Vec<Sample> {
    samples.iter().map(|s| s.norm()).collect()
}

/// Summary statistics derived once from a complex signal.
///
/// Pure value object: computing it twice from the same signal yields
/// identical results, and it is never updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalStats {
    /// Raw scalar components decoded from the source (two per complex
    /// sample unless the source carried an unpaired trailing component)
    pub sample_count: usize,
    /// Number of complex samples analyzed
    pub complex_sample_count: usize,
    /// Minimum I value
    pub min_i: f64,
    /// Maximum I value
    pub max_i: f64,
    /// Minimum Q value
    pub min_q: f64,
    /// Maximum Q value
    pub max_q: f64,
    /// Arithmetic mean of the envelope; NaN for an empty signal
    pub mean_amplitude: f64,
}

impl SignalStats {
    /// Compute statistics for the given samples.
    ///
    /// `sample_count` is derived as two scalars per complex sample; use
    /// [`SignalStats::with_sample_count`] when the source's raw scalar count
    /// differs (interleaved captures with an odd element count).
    ///
    /// An empty signal yields the degenerate record: zero counts, `[0, 0]`
    /// ranges, and a `mean_amplitude` of NaN. This is a defined result, not
    /// a panic.
    pub fn compute(samples: &[IQSample]) -> Self {
        if samples.is_empty() {
            return Self::empty();
        }

        let mut min_i = f64::INFINITY;
        let mut max_i = f64::NEG_INFINITY;
        let mut min_q = f64::INFINITY;
        let mut max_q = f64::NEG_INFINITY;
        let mut amplitude_sum = 0.0;

        for sample in samples {
            min_i = min_i.min(sample.re);
            max_i = max_i.max(sample.re);
            min_q = min_q.min(sample.im);
            max_q = max_q.max(sample.im);
            amplitude_sum += sample.norm();
        }

        Self {
            sample_count: samples.len() * 2,
            complex_sample_count: samples.len(),
            min_i,
            max_i,
            min_q,
            max_q,
            mean_amplitude: amplitude_sum / samples.len() as f64,
        }
    }

    /// Compute statistics for an I/Q component pair.
    ///
    /// The mean amplitude comes from the assembled (length-truncated)
    /// signal, but the component ranges cover the full sequences, including
    /// any unpaired trailing element that assembly drops.
    pub fn compute_from_pair(pair: &IqPair) -> Self {
        let signal = pair.assemble();
        let mut stats = Self::compute(&signal).with_sample_count(pair.raw_sample_count());

        if let Some((min, max)) = min_max(&pair.in_phase) {
            stats.min_i = min;
            stats.max_i = max;
        }
        if let Some((min, max)) = min_max(&pair.quadrature) {
            stats.min_q = min;
            stats.max_q = max;
        }

        stats
    }

    /// Override the raw scalar count reported for the source.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// The degenerate record for an empty signal
    fn empty() -> Self {
        Self {
            sample_count: 0,
            complex_sample_count: 0,
            min_i: 0.0,
            max_i: 0.0,
            min_q: 0.0,
            max_q: 0.0,
            mean_amplitude: f64::NAN,
        }
    }

    /// Format as text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str("Signal Statistics\n");
        output.push_str(&"─".repeat(40));
        output.push('\n');

        output.push_str(&format!("Total samples:     {}\n", self.sample_count));
        output.push_str(&format!(
            "Complex samples:   {}\n",
            self.complex_sample_count
        ));
        output.push_str(&format!("I range:           [{}, {}]\n", self.min_i, self.max_i));
        output.push_str(&format!("Q range:           [{}, {}]\n", self.min_q, self.max_q));
        output.push_str(&format!("Mean amplitude:    {:.2}\n", self.mean_amplitude));

        output
    }

    /// Format as JSON
    pub fn to_json(&self) -> String {
        let mean = if self.mean_amplitude.is_nan() {
            "null".to_string()
        } else {
            format!("{:.6}", self.mean_amplitude)
        };
        format!(
            r#"{{
  "sample_count": {},
  "complex_sample_count": {},
  "i_range": [{:.6}, {:.6}],
  "q_range": [{:.6}, {:.6}],
  "mean_amplitude": {}
}}"#,
            self.sample_count,
            self.complex_sample_count,
            self.min_i,
            self.max_i,
            self.min_q,
            self.max_q,
            mean
        )
    }
}

fn min_max(values: &[Sample]) -> Option<(Sample, Sample)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty_is_degenerate_not_panic() {
        let stats = SignalStats::compute(&[]);

        assert_eq!(stats.sample_count, 0);
        assert_eq!(stats.complex_sample_count, 0);
        assert_eq!((stats.min_i, stats.max_i), (0.0, 0.0));
        assert!(stats.mean_amplitude.is_nan());
    }

    #[test]
    fn test_stats_interleaved_capture() {
        // Decoded from int16 LE bytes 01 00 02 00 03 00 04 00
        let samples = [IQSample::new(1.0, 2.0), IQSample::new(3.0, 4.0)];
        let stats = SignalStats::compute(&samples);

        assert_eq!(stats.sample_count, 4);
        assert_eq!(stats.complex_sample_count, 2);
        assert_eq!((stats.min_i, stats.max_i), (1.0, 3.0));
        assert_eq!((stats.min_q, stats.max_q), (2.0, 4.0));

        // (|(1,2)| + |(3,4)|) / 2 = (sqrt(5) + 5) / 2 ≈ 3.618
        let expected = (5.0f64.sqrt() + 5.0) / 2.0;
        assert!((stats.mean_amplitude - expected).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_values() {
        let samples = [IQSample::new(3.0, 4.0), IQSample::new(-1.0, -1.0)];
        let env = envelope(&samples);

        assert_eq!(env.len(), 2);
        assert_eq!(env[0], 5.0);
        assert!((env[1] - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_empty() {
        assert!(envelope(&[]).is_empty());
    }

    #[test]
    fn test_stats_idempotent() {
        let samples: Vec<IQSample> = (0..100)
            .map(|i| IQSample::new(i as f64, -(i as f64) / 2.0))
            .collect();

        let first = SignalStats::compute(&samples);
        let second = SignalStats::compute(&samples);
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_sample_count_override() {
        // 3 raw integers decode to 1 complex sample plus an unpaired I
        let samples = [IQSample::new(1.0, 2.0)];
        let stats = SignalStats::compute(&samples).with_sample_count(3);

        assert_eq!(stats.sample_count, 3);
        assert_eq!(stats.complex_sample_count, 1);
    }

    #[test]
    fn test_pair_ranges_cover_unpaired_element() {
        // The trailing 99 never forms a complex sample but still counts
        // toward the I range and the raw sample total
        let pair = IqPair::new(vec![1.0, 3.0, 99.0], vec![2.0, 4.0]);
        let stats = SignalStats::compute_from_pair(&pair);

        assert_eq!(stats.sample_count, 5);
        assert_eq!(stats.complex_sample_count, 2);
        assert_eq!((stats.min_i, stats.max_i), (1.0, 99.0));
        assert_eq!((stats.min_q, stats.max_q), (2.0, 4.0));

        let expected = (5.0f64.sqrt() + 5.0) / 2.0;
        assert!((stats.mean_amplitude - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pair_empty_is_degenerate() {
        let stats = SignalStats::compute_from_pair(&IqPair::default());
        assert_eq!(stats.sample_count, 0);
        assert!(stats.mean_amplitude.is_nan());
    }

    #[test]
    fn test_json_mean_is_null_when_empty() {
        let json = SignalStats::compute(&[]).to_json();
        assert!(json.contains("\"mean_amplitude\": null"));
    }
}
