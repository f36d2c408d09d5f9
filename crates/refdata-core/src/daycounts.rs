//! Day count conventions carried by swap legs.
//!
//! A day count convention determines how days between two dates are counted
//! and which year basis converts that count into a year fraction.
//!
//! - [`DayCountConvention::Thirty360`]: 30/360 US (Bond Basis), with the
//!   February end-of-month rules
//! - [`DayCountConvention::Act360`]: Actual/360, money market convention
//! - [`DayCountConvention::Act365`]: Actual/365 Fixed
//!
//! ```rust
//! use refdata_core::{Date, DayCountConvention};
//! use rust_decimal::Decimal;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//!
//! assert_eq!(DayCountConvention::Act360.day_count(start, end), 90);
//! assert_eq!(DayCountConvention::Act360.year_fraction(start, end), Decimal::new(25, 2));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Day count convention of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// 30/360 US (Bond Basis)
    Thirty360,
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365,
}

impl DayCountConvention {
    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Act360 => "Act/360",
            DayCountConvention::Act365 => "Act/365",
        }
    }

    /// Returns the day count basis (days per year).
    #[must_use]
    pub fn basis(&self) -> i64 {
        match self {
            DayCountConvention::Thirty360 | DayCountConvention::Act360 => 360,
            DayCountConvention::Act365 => 365,
        }
    }

    /// Counts the days between two dates under this convention.
    ///
    /// Negative if `end` is before `start`.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Thirty360 => thirty_360_us(start, end),
            DayCountConvention::Act360 | DayCountConvention::Act365 => start.days_between(&end),
        }
    }

    /// Calculates the year fraction between two dates.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(self.basis())
    }
}

fn thirty_360_us(start: Date, end: Date) -> i64 {
    let y1 = start.year() as i64;
    let y2 = end.year() as i64;
    let m1 = start.month() as i64;
    let m2 = end.month() as i64;
    let mut d1 = start.day() as i64;
    let mut d2 = end.day() as i64;

    let d1_was_feb_eom = is_last_day_of_february(start);

    if d1_was_feb_eom || d1 == 31 {
        d1 = 30;
    }

    if is_last_day_of_february(end) && d1_was_feb_eom {
        d2 = 30;
    } else if d2 == 31 && d1 >= 30 {
        d2 = 30;
    }

    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace("ACTUAL", "ACT").as_str() {
            "30/360" | "30/360 US" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            "ACT/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACT/365F" | "ACT365" => Ok(DayCountConvention::Act365),
            _ => Err(CoreError::unknown_code("day count", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_act360_basic() {
        let dc = DayCountConvention::Act360;
        assert_eq!(dc.day_count(date(2025, 1, 1), date(2025, 4, 1)), 90);
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2025, 4, 1)), dec!(0.25));
    }

    #[test]
    fn test_act365_full_year() {
        let dc = DayCountConvention::Act365;
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2026, 1, 1)), Decimal::ONE);
        // Leap year runs over one
        assert!(dc.year_fraction(date(2024, 1, 1), date(2025, 1, 1)) > Decimal::ONE);
    }

    #[test]
    fn test_thirty360_month_ends() {
        let dc = DayCountConvention::Thirty360;
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 7, 15)), 180);
        // D2 = 31 but D1 < 30: D2 stays
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 3, 31)), 76);
    }

    #[test]
    fn test_thirty360_february_eom() {
        let dc = DayCountConvention::Thirty360;
        assert_eq!(dc.day_count(date(2025, 2, 28), date(2025, 8, 31)), 180);
        assert_eq!(dc.day_count(date(2024, 2, 29), date(2025, 2, 28)), 360);
    }

    #[test]
    fn test_thirty360_ten_year_swap() {
        let dc = DayCountConvention::Thirty360;
        let yf = dc.year_fraction(date(2015, 11, 16), date(2025, 11, 16));
        assert_eq!(yf, dec!(10));
    }

    #[test]
    fn test_negative_period() {
        let dc = DayCountConvention::Act360;
        assert_eq!(dc.day_count(date(2025, 4, 1), date(2025, 1, 1)), -90);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(DayCountConvention::Thirty360.to_string(), "30/360");
        assert_eq!(DayCountConvention::Act365.to_string(), "Act/365");
        assert_eq!(
            "ACT/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            "Actual/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365
        );
        assert!("ACT/ACT".parse::<DayCountConvention>().is_err());
    }
}
