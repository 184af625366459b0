/// Velocity statistics of a series, all in m/s.
/// Every figure is `None` when it is undefined (empty series).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStats {
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub spread: Option<f64>,
    /// Sample standard deviation (N-1). `None` with fewer than two shots.
    pub std_dev: Option<f64>,
}
