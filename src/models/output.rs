use crate::models::ShotRecord;
use crate::utils::number::{plain, round2};

/// Riga del file LabRadar: `Shot ID;V0;Date;Time`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub shot_id: String,
    pub v0: f64,
    pub date: String,
    pub time: String,
}

impl OutputRecord {
    /// `date` is the already formatted date stamp (MM-DD-YYYY).
    pub fn from_shot(shot: &ShotRecord, date: &str) -> Self {
        Self {
            shot_id: shot.shot_id(),
            v0: round2(shot.velocity),
            date: date.to_string(),
            time: shot.time.clone(),
        }
    }

    pub fn to_row(&self) -> [String; 4] {
        [
            self.shot_id.clone(),
            plain(self.v0),
            self.date.clone(),
            self.time.clone(),
        ]
    }
}
