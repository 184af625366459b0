#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use garmin2labradar::core::ConvertOptions;
use std::fs;
use std::path::{Path, PathBuf};

pub const BANNER: &str = "Garmin Xero C1 Pro,Session 16 Oct 2026";
pub const HEADER: &str = "#,SPEED (MPS),Δ AVG (MPS),KE (J),TIME,SHOT NOTES";

/// Binary under test, isolated inside `dir` (cwd and HOME) and without colours.
pub fn g2l(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("garmin2labradar");
    cmd.current_dir(dir).env("HOME", dir).env("NO_COLOR", "1");
    cmd
}

pub fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Line terminator used by the writer on this platform.
pub fn nl() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

/// Build a Garmin export; each row is (seq, speed, time). Speeds containing a
/// comma are quoted.
pub fn garmin_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut out = format!("{BANNER}\n{HEADER}\n");
    for (seq, speed, time) in rows {
        let speed = if speed.contains(',') {
            format!("\"{speed}\"")
        } else {
            speed.to_string()
        };
        out.push_str(&format!("{seq},{speed},0.0,1500,{time},\n"));
    }
    out
}

pub fn three_shots() -> String {
    garmin_csv(&[
        ("1", "300.00", "12:01:02"),
        ("2", "305.50", "12:01:30"),
        ("3", "298.25", "12:02:05"),
    ])
}

pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write source csv");
    path
}

/// Default options writing under `dir`.
pub fn options_in(dir: &Path) -> ConvertOptions {
    ConvertOptions {
        base_dir: Some(dir.to_path_buf()),
        ..ConvertOptions::default()
    }
}
