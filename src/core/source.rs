//! Loading of the Garmin Xero CSV export.
//!
//! Layout of the file:
//! - line 1: session banner (ignored)
//! - line 2: column header, must contain `#`, `SPEED (MPS)` and `TIME`
//! - then one row per shot, possibly followed by summary rows which lack
//!   the required fields and are skipped like any other incomplete row.

use crate::core::convert::ConvertOptions;
use crate::errors::{AppError, AppResult};
use crate::models::{ShotRecord, ShotSeries};
use crate::utils::number::parse_decimal;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

pub const SEQ_COLUMN: &str = "#";
pub const SPEED_COLUMN: &str = "SPEED (MPS)";
pub const TIME_COLUMN: &str = "TIME";

pub const FORMAT_ERROR: &str =
    "Unexpected source CSV format. Ensure it has '#', 'SPEED (MPS)', and 'TIME' columns.";

/// Cell contents read as "no value", besides blank cells.
const MISSING_MARKERS: [&str; 19] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "",
];

const DEFAULT_DELIMITER: u8 = b',';
const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Position of the required columns inside the header.
#[derive(Debug, Clone, Copy)]
struct Columns {
    seq: usize,
    speed: usize,
    time: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };

        match (find(SEQ_COLUMN), find(SPEED_COLUMN), find(TIME_COLUMN)) {
            (Some(seq), Some(speed), Some(time)) => Ok(Self { seq, speed, time }),
            _ => Err(AppError::Format(FORMAT_ERROR.to_string())),
        }
    }
}

/// Read and parse a Garmin export from disk.
pub fn load_series(path: &Path, options: &ConvertOptions) -> AppResult<ShotSeries> {
    let content = fs::read_to_string(path)?;
    parse_series(&content, options)
}

/// Parse the textual content of a Garmin export.
pub fn parse_series(content: &str, options: &ConvertOptions) -> AppResult<ShotSeries> {
    let body = skip_banner(content);
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| sniff_delimiter(body.lines().next().unwrap_or("")));

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns = Columns::locate(rdr.headers()?)?;

    let mut shots = Vec::new();
    let mut dropped = 0;

    for result in rdr.records() {
        let record = result?;

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        // +1: la riga di banner saltata
        let line = record.position().map(|p| p.line() + 1).unwrap_or(0);

        match read_shot(&record, columns, line)? {
            Some(shot) => shots.push(shot),
            None if options.strict => {
                return Err(AppError::IncompleteRow {
                    line,
                    column: first_missing(&record, columns).to_string(),
                });
            }
            None => dropped += 1,
        }
    }

    Ok(ShotSeries::new(shots, dropped))
}

/// `Ok(None)` when one of the required cells is blank or a missing marker.
fn read_shot(
    record: &StringRecord,
    columns: Columns,
    line: u64,
) -> AppResult<Option<ShotRecord>> {
    let (Some(seq), Some(speed), Some(time)) = (
        cell(record, columns.seq),
        cell(record, columns.speed),
        cell(record, columns.time),
    ) else {
        return Ok(None);
    };

    let seq = seq.trim().parse::<u64>().map_err(|_| AppError::Parse {
        line,
        value: seq.to_string(),
    })?;

    let velocity = parse_decimal(speed).ok_or_else(|| AppError::Parse {
        line,
        value: speed.to_string(),
    })?;

    Ok(Some(ShotRecord::new(seq, velocity, time)))
}

fn cell(record: &StringRecord, idx: usize) -> Option<&str> {
    record
        .get(idx)
        .filter(|v| !MISSING_MARKERS.contains(&v.trim()))
}

fn first_missing(record: &StringRecord, columns: Columns) -> &'static str {
    if cell(record, columns.seq).is_none() {
        SEQ_COLUMN
    } else if cell(record, columns.speed).is_none() {
        SPEED_COLUMN
    } else {
        TIME_COLUMN
    }
}

fn skip_banner(content: &str) -> &str {
    content.split_once('\n').map(|(_, rest)| rest).unwrap_or("")
}

/// Pick the most frequent candidate delimiter in the header line, ignoring
/// quoted text. Falls back to `,`.
pub fn sniff_delimiter(header_line: &str) -> u8 {
    let mut counts = [0usize; 3];
    let mut in_quotes = false;

    for b in header_line.bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if !in_quotes
            && let Some(i) = CANDIDATE_DELIMITERS.iter().position(|&d| d == b)
        {
            counts[i] += 1;
        }
    }

    // a parità vince il primo candidato (la virgola)
    let best = (1..counts.len()).fold(0, |best, i| {
        if counts[i] > counts[best] { i } else { best }
    });

    if counts[best] == 0 {
        DEFAULT_DELIMITER
    } else {
        CANDIDATE_DELIMITERS[best]
    }
}
