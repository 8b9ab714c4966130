//! Number helpers shared by the reports.

/// Compact large numbers: `999` → `"999"`, `1000` → `"1.0k"`, `2560` → `"2.6k"`.
pub fn format_number(value: i64) -> String {
    if value >= 1000 {
        format!("{:.1}k", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

/// Percentage of `wins` over `games`; exactly 0 when no games were played.
pub fn win_rate(wins: u64, games: u64) -> f64 {
    if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64 * 100.0
    }
}

/// Seconds to minutes, for one-decimal display.
pub fn minutes(seconds: i64) -> f64 {
    seconds as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.0k");
        assert_eq!(format_number(2560), "2.6k");
        assert_eq!(format_number(35_421), "35.4k");
        assert_eq!(format_number(-1500), "-1500");
    }

    #[test]
    fn test_win_rate_zero_denominator() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(5, 0), 0.0);
        assert!(!win_rate(0, 0).is_nan());
    }

    #[test]
    fn test_win_rate() {
        assert_eq!(win_rate(1, 4), 25.0);
        assert_eq!(format!("{:.1}", win_rate(2, 3)), "66.7");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format!("{:.1}", minutes(2400)), "40.0");
        assert_eq!(format!("{:.1}", minutes(1805)), "30.1");
    }
}
