// Parsing, rounding and number formatting helpers.
//
// Cell parsing lives here so the normalizer only decides what to do when a
// value is unusable; it never needs to know how the text was inspected.
use num_format::{Locale, ToFormattedString};

/// Parse a CSV cell into `f64`.
///
/// - Accepts `Option<&str>` so a missing column and a bad cell look the same.
/// - Trims surrounding whitespace.
/// - Does not strip thousands separators: `"1,234"` is rejected.
/// - Rejects `nan` and `inf`: every parsed value is finite.
/// - Returns `None` for anything that cannot be parsed.
pub fn parse_f64_lenient(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_i32_lenient(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>().ok()
}

/// Round to two decimal places, half away from zero.
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Render a float the way the narrative text expects: shortest round-trip
/// digits, always with a fractional part (`12.0`, `65.3`).
pub fn display_float(n: f64) -> String {
    let s = format!("{}", n);
    if n.is_finite() && !s.contains('.') && !s.contains('e') {
        format!("{}.0", s)
    } else {
        s
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_rejects_text_and_separators() {
        assert_eq!(parse_f64_lenient(Some(" 12.5 ")), Some(12.5));
        assert_eq!(parse_f64_lenient(Some("N/A")), None);
        assert_eq!(parse_f64_lenient(Some("1,234")), None);
        assert_eq!(parse_f64_lenient(Some("")), None);
        assert_eq!(parse_f64_lenient(None), None);
    }

    #[test]
    fn parse_i32_rejects_decimals() {
        assert_eq!(parse_i32_lenient(Some("2024")), Some(2024));
        assert_eq!(parse_i32_lenient(Some("2024.0")), None);
        assert_eq!(parse_i32_lenient(Some("tahun")), None);
    }

    #[test]
    fn round2_and_mean() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(-1.004), -1.0);
        assert_eq!(mean(vec![1.0, 2.0, 4.0]), 7.0 / 3.0);
        assert_eq!(mean(Vec::new()), 0.0);
    }

    #[test]
    fn display_float_keeps_fraction() {
        assert_eq!(display_float(12.0), "12.0");
        assert_eq!(display_float(65.3), "65.3");
        assert_eq!(display_float(7.25), "7.25");
    }

    #[test]
    fn format_int_groups_thousands() {
        assert_eq!(format_int(48_512_i64), "48,512");
        assert_eq!(format_int(7_usize), "7");
    }

    #[test]
    fn parse_f64_rejects_non_finite() {
        assert_eq!(parse_f64_lenient(Some("nan")), None);
        assert_eq!(parse_f64_lenient(Some("NaN")), None);
        assert_eq!(parse_f64_lenient(Some("inf")), None);
        assert_eq!(parse_f64_lenient(Some("-infinity")), None);
        assert_eq!(parse_f64_lenient(Some("1e3")), Some(1000.0));
    }
}
