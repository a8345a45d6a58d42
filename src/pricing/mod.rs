use chrono::NaiveDate;

/// Pre-submission booking estimate.
///
/// The formula mirrors the backend's own computation (nightly rate times
/// nights, plus a fixed 10% service fee, plus the cleaning fee). The
/// number shown here is advisory only; the backend recomputes and
/// persists the authoritative total on the Booking record.
pub(crate) const SERVICE_FEE_RATE: f64 = 0.10;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PriceQuote {
    pub nights: i64,
    pub room_price: f64,
    pub service_fee: f64,
    pub cleaning_fee: f64,
    pub total: f64,
}

impl PriceQuote {
    /// An invalid or empty date range quotes zero; the reserve button
    /// must not submit in that state.
    pub fn is_payable(&self) -> bool {
        self.nights > 0 && self.total > 0.0
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    // <input type="date"> yields YYYY-MM-DD; backend timestamps carry a
    // time suffix we can ignore for the nights computation.
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub(crate) fn booking_estimate(
    nightly_rate: f64,
    cleaning_fee: f64,
    check_in: &str,
    check_out: &str,
) -> PriceQuote {
    let (Some(start), Some(end)) = (parse_date(check_in), parse_date(check_out)) else {
        return PriceQuote::default();
    };

    let nights = (end - start).num_days();
    if nights <= 0 {
        return PriceQuote::default();
    }

    let room_price = nightly_rate * nights as f64;
    let service_fee = room_price * SERVICE_FEE_RATE;
    PriceQuote {
        nights,
        room_price,
        service_fee,
        cleaning_fee,
        total: room_price + service_fee + cleaning_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_night_reference_quote() {
        let quote = booking_estimate(1_000_000.0, 200_000.0, "2026-01-30", "2026-01-31");
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.room_price, 1_000_000.0);
        assert_eq!(quote.service_fee, 100_000.0);
        assert_eq!(quote.total, 1_300_000.0);
        assert!(quote.is_payable());
    }

    #[test]
    fn multi_night_quote() {
        let quote = booking_estimate(500_000.0, 150_000.0, "2026-03-01", "2026-03-04");
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.room_price, 1_500_000.0);
        assert_eq!(quote.service_fee, 150_000.0);
        assert_eq!(quote.total, 1_800_000.0);
    }

    #[test]
    fn zero_for_empty_or_reversed_range() {
        assert_eq!(
            booking_estimate(1_000_000.0, 0.0, "", "2026-01-31"),
            PriceQuote::default()
        );
        assert_eq!(
            booking_estimate(1_000_000.0, 0.0, "2026-01-30", ""),
            PriceQuote::default()
        );
        // Same-day and reversed ranges are not bookable.
        assert_eq!(
            booking_estimate(1_000_000.0, 0.0, "2026-01-30", "2026-01-30"),
            PriceQuote::default()
        );
        assert_eq!(
            booking_estimate(1_000_000.0, 0.0, "2026-01-31", "2026-01-30"),
            PriceQuote::default()
        );
        assert!(!booking_estimate(1_000_000.0, 0.0, "x", "y").is_payable());
    }

    #[test]
    fn backend_timestamps_are_accepted() {
        let quote = booking_estimate(
            1_000_000.0,
            200_000.0,
            "2026-01-30T00:00:00.000Z",
            "2026-01-31T00:00:00.000Z",
        );
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total, 1_300_000.0);
    }
}
