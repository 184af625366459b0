use chrono::NaiveDate;
use garmin2labradar::utils::clock::{Clock, FixedClock};
use garmin2labradar::utils::date::{folder_name, parse_date, stamp};
use garmin2labradar::utils::number::{fixed2, normalize_decimal, parse_decimal, plain, round2};

#[test]
fn test_normalize_decimal() {
    assert_eq!(normalize_decimal(" 123,45 "), "123.45");
    assert_eq!(normalize_decimal("123.45"), "123.45");
    assert_eq!(parse_decimal("123,45"), parse_decimal("123.45"));
    assert_eq!(parse_decimal("\t812,4\t"), Some(812.4));
}

#[test]
fn test_parse_decimal_rejects_garbage() {
    assert_eq!(parse_decimal("abc"), None);
    assert_eq!(parse_decimal("1,234.5"), None);
    assert_eq!(parse_decimal("nan"), None);
    assert_eq!(parse_decimal("inf"), None);
    assert_eq!(parse_decimal(""), None);
}

#[test]
fn test_rounding_and_rendering() {
    assert_eq!(round2(305.504), 305.5);
    assert_eq!(round2(298.246), 298.25);
    assert_eq!(plain(300.0), "300.0");
    assert_eq!(plain(305.5), "305.5");
    assert_eq!(plain(298.25), "298.25");
    assert_eq!(fixed2(Some(250.1)), "250.10");
    assert_eq!(fixed2(Some(0.0)), "0.00");
    assert_eq!(fixed2(None), "nan");
    assert_eq!(fixed2(Some(f64::NAN)), "nan");
}

#[test]
fn test_date_formats() {
    let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
    assert_eq!(folder_name(d), "26.03.07");
    assert_eq!(stamp(d), "03-07-2026");
    assert_eq!(parse_date("2026-03-07"), Some(d));
    assert_eq!(parse_date("07/03/2026"), None);
}

#[test]
fn test_fixed_clock() {
    let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let boxed: Box<dyn Clock> = Box::new(FixedClock(d));
    assert_eq!(boxed.today(), d);
}

#[test]
fn test_expand_tilde() {
    use garmin2labradar::utils::path::expand_tilde;
    use std::path::PathBuf;

    assert_eq!(expand_tilde("/abs/dir"), PathBuf::from("/abs/dir"));
    assert_eq!(expand_tilde("rel/dir"), PathBuf::from("rel/dir"));
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/labradar"), home.join("labradar"));
        assert_eq!(expand_tilde("~"), home.join(""));
    }
}
