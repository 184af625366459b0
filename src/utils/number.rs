//! Numeric helpers: decimal separator normalization, rounding and rendering.

/// Trim the raw cell and turn a comma decimal separator into a period.
///
/// Esempio: `" 123,45 "` → `"123.45"`
pub fn normalize_decimal(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// Parse a velocity cell written with either `.` or `,` as decimal separator.
/// Non-finite values (`nan`, `inf`) are rejected.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    normalize_decimal(raw)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Round to 2 decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Fixed 2-decimal rendering used by the stats block; undefined values are
/// written as `nan`.
pub fn fixed2(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "nan".to_string(),
    }
}

/// Shortest rendering with at least one fractional digit: `300.0`, `305.5`.
pub fn plain(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}
