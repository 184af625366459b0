/// One row of the Garmin export, after cleanup and normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub seq: u64,      // ⇔ column "#"
    pub velocity: f64, // ⇔ column "SPEED (MPS)"
    pub time: String,  // ⇔ column "TIME" (verbatim)
}

impl ShotRecord {
    pub fn new(seq: u64, velocity: f64, time: impl Into<String>) -> Self {
        Self {
            seq,
            velocity,
            time: time.into(),
        }
    }

    /// LabRadar shot id: sequence number zero-padded to 4 digits.
    /// Wider numbers are kept as they are.
    pub fn shot_id(&self) -> String {
        format!("{:04}", self.seq)
    }
}

/// Shots in source file order, with the number of incomplete rows that
/// were skipped while loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotSeries {
    shots: Vec<ShotRecord>,
    dropped: usize,
}

impl ShotSeries {
    pub fn new(shots: Vec<ShotRecord>, dropped: usize) -> Self {
        Self { shots, dropped }
    }

    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Rows discarded because one of the required fields was blank.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn velocities(&self) -> impl Iterator<Item = f64> + '_ {
        self.shots.iter().map(|s| s.velocity)
    }
}
