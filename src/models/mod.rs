pub mod output;
pub mod shot;
pub mod stats;

pub use output::OutputRecord;
pub use shot::{ShotRecord, ShotSeries};
pub use stats::SummaryStats;
