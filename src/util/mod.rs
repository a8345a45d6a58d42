/// Formats an amount in VND with dot thousand separators, the way the
/// backend's locale renders money: `1300000 -> "1.300.000 ₫"`.
/// Amounts are whole dong; fractional parts are rounded away.
pub(crate) fn format_vnd(amount: f64) -> String {
    let negative = amount < 0.0;
    let value = amount.abs().round() as u64;

    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

/// Table cells show the date part of a backend timestamp
/// (`2026-01-30T00:00:00.000Z -> "2026-01-30"`).
pub(crate) fn format_date(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

/// Mean star rating rendered with one decimal ("4.5"); None when there
/// are no ratings yet.
pub(crate) fn average_rating(ratings: &[u32]) -> Option<String> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().sum();
    Some(format!("{:.1}", f64::from(sum) / ratings.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vnd_grouping() {
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
        assert_eq!(format_vnd(1_000.0), "1.000 ₫");
        assert_eq!(format_vnd(1_300_000.0), "1.300.000 ₫");
        assert_eq!(format_vnd(123_456_789.0), "123.456.789 ₫");
    }

    #[test]
    fn vnd_rounds_and_signs() {
        assert_eq!(format_vnd(1_299_999.6), "1.300.000 ₫");
        assert_eq!(format_vnd(-50_000.0), "-50.000 ₫");
    }

    #[test]
    fn date_prefix() {
        assert_eq!(format_date("2026-01-30T00:00:00.000Z"), "2026-01-30");
        assert_eq!(format_date("2026-01-30"), "2026-01-30");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn rating_average_one_decimal() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[5]).as_deref(), Some("5.0"));
        assert_eq!(average_rating(&[4, 5]).as_deref(), Some("4.5"));
        assert_eq!(average_rating(&[1, 2, 2]).as_deref(), Some("1.7"));
    }
}
