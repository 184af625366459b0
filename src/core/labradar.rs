//! LabRadar CSV document: fixed header block followed by `;`-separated
//! shot records.

use crate::core::convert::ConvertOptions;
use crate::errors::AppResult;
use crate::models::{OutputRecord, ShotSeries, SummaryStats};
use crate::utils::date::stamp;
use crate::utils::number::fixed2;
use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const COLUMN_HEADER: &str = "Shot ID;V0;Date;Time";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

#[derive(Debug, Clone, PartialEq)]
pub struct LabradarDocument {
    header: Vec<String>,
    records: Vec<OutputRecord>,
}

impl LabradarDocument {
    pub fn build(
        series: &ShotSeries,
        stats: &SummaryStats,
        today: NaiveDate,
        options: &ConvertOptions,
    ) -> Self {
        let date = stamp(today);
        let records = series
            .shots()
            .iter()
            .map(|shot| OutputRecord::from_shot(shot, &date))
            .collect();

        Self {
            header: build_header(series.len(), stats, options),
            records,
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Header lines first, then one record per line (no column header row).
    pub fn write_to<W: Write>(&self, mut out: W) -> AppResult<()> {
        for line in &self.header {
            out.write_all(line.as_bytes())?;
            out.write_all(LINE_ENDING.as_bytes())?;
        }

        let mut wtr = WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .terminator(terminator())
            .from_writer(out);

        for rec in &self.records {
            wtr.write_record(rec.to_row())?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Crea (o sovrascrive) il file di output.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}

fn build_header(total: usize, stats: &SummaryStats, options: &ConvertOptions) -> Vec<String> {
    vec![
        "sep=;".to_string(),
        format!("Device ID;{};;", options.device_id),
        String::new(),
        format!("Series No;{};;", options.series_no),
        format!("Total number of shots;{};;", total),
        String::new(),
        "Units velocity;m/s;;".to_string(),
        "Units distances;m;;".to_string(),
        "Units kinetic energy;ft-lbf;;".to_string(),
        "Units weight;grain (gr);;".to_string(),
        String::new(),
        stat_line("Average", stats.mean),
        stat_line("Highest", stats.max),
        stat_line("Lowest", stats.min),
        stat_line("Ext. Spread", stats.spread),
        stat_line("Std. Dev", stats.std_dev),
        String::new(),
        COLUMN_HEADER.to_string(),
    ]
}

fn stat_line(label: &str, value: Option<f64>) -> String {
    format!("Stats - {};{};m/s;", label, fixed2(value))
}

fn terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}
