use chrono::NaiveDateTime;

/// Format a float as a dollar amount with thousands separators: $1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative && cents != "0.00" {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Two-decimal percentage: 12.5 -> "12.50%"
pub fn percent(val: f64) -> String {
    format!("{val:.2}%")
}

/// Ledger date column: dd/mm/yyyy
pub fn day(date: &NaiveDateTime) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(-500.00), "-$500.00");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(1000000.99), "$1,000,000.99");
        assert_eq!(money(42.10), "$42.10");
        assert_eq!(money(-93917.12), "-$93,917.12");
    }

    #[test]
    fn test_money_tiny_negative_is_not_signed() {
        assert_eq!(money(-0.001), "$0.00");
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(0.0), "0.00%");
        assert_eq!(percent(-50.0), "-50.00%");
        assert_eq!(percent(12.3456), "12.35%");
    }

    #[test]
    fn test_day_formatting() {
        let d = chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(day(&d), "02/06/2025");
    }
}
