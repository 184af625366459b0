use garmin2labradar::config::{Config, DEFAULT_DEVICE_ID, DEFAULT_SERIES_NO};
use garmin2labradar::errors::AppError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.device_id, DEFAULT_DEVICE_ID);
    assert_eq!(cfg.series_no, DEFAULT_SERIES_NO);
    assert!(!cfg.strict);
    assert!(cfg.dated_subdir);

    let opts = cfg.convert_options().unwrap();
    assert_eq!(opts.device_id, "LBR-0018237");
    assert_eq!(opts.series_no, "0001");
    assert_eq!(opts.delimiter, None);
    assert_eq!(opts.base_dir, None);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("g2l.conf");
    fs::write(&path, "strict: true\ndelimiter: \";\"\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert!(cfg.strict);
    assert_eq!(cfg.device_id, DEFAULT_DEVICE_ID);
    assert!(cfg.dated_subdir);

    let opts = cfg.convert_options().unwrap();
    assert_eq!(opts.delimiter, Some(b';'));
}

#[test]
fn test_empty_file_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.conf");
    fs::write(&path, "\n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_yaml_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.conf");
    fs::write(&path, "strict: [not, a, bool]\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::ConfigParse(_)));
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_non_ascii_delimiter_is_rejected() {
    let cfg = Config {
        delimiter: Some('→'),
        ..Config::default()
    };
    assert!(matches!(cfg.convert_options(), Err(AppError::Config(_))));
}

#[test]
fn test_output_dir_is_passed_through() {
    let cfg = Config {
        output_dir: Some("/srv/labradar".into()),
        ..Config::default()
    };
    let opts = cfg.convert_options().unwrap();
    assert_eq!(opts.base_dir.as_deref(), Some(std::path::Path::new("/srv/labradar")));
}
