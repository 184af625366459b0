use crate::models::{ShotSeries, SummaryStats};

impl SummaryStats {
    /// Compute the velocity statistics of a series.
    ///
    /// An empty series yields all-undefined stats. The standard deviation is
    /// the sample one (N-1) and stays undefined with a single shot.
    pub fn from_series(series: &ShotSeries) -> Self {
        if series.is_empty() {
            return Self::default();
        }

        let n = series.len() as f64;
        let mean = series.velocities().sum::<f64>() / n;
        let max = series.velocities().fold(f64::NEG_INFINITY, f64::max);
        let min = series.velocities().fold(f64::INFINITY, f64::min);

        let std_dev = (series.len() >= 2).then(|| {
            let sq: f64 = series.velocities().map(|v| (v - mean).powi(2)).sum();
            (sq / (n - 1.0)).sqrt()
        });

        Self {
            mean: Some(mean),
            max: Some(max),
            min: Some(min),
            spread: Some(max - min),
            std_dev,
        }
    }
}
