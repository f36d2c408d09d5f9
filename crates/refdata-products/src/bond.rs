//! Fixed coupon bond.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use refdata_core::Date;

use crate::conventions::BondIdType;
use crate::error::IdentifierError;
use crate::identifiers::{Cusip, Isin};
use crate::product::{Instrument, ProductType};

/// A bond, identified by a CUSIP or ISIN.
///
/// The coupon is in percent and is not bounded: zero and negative coupons
/// are legal.
///
/// # Example
///
/// ```rust
/// use refdata_products::prelude::*;
/// use refdata_core::Date;
/// use rust_decimal::Decimal;
///
/// let bond = Bond::new(
///     "912828TW0",
///     BondIdType::Cusip,
///     "T",
///     Decimal::new(75, 2),
///     Date::from_ymd(2017, 11, 5).unwrap(),
/// );
/// assert_eq!(bond.ticker(), "T");
/// assert!(bond.validate_identifier().is_ok());
/// assert_eq!(bond.to_string(), "T 0.75 2017-11-05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    id: String,
    id_type: BondIdType,
    ticker: String,
    coupon: Decimal,
    maturity_date: Date,
}

impl Bond {
    /// Creates a new bond.
    pub fn new(
        id: impl Into<String>,
        id_type: BondIdType,
        ticker: impl Into<String>,
        coupon: Decimal,
        maturity_date: Date,
    ) -> Self {
        Self {
            id: id.into(),
            id_type,
            ticker: ticker.into(),
            coupon,
            maturity_date,
        }
    }

    /// Returns the identifier type of the bond id.
    #[must_use]
    pub fn id_type(&self) -> BondIdType {
        self.id_type
    }

    /// Returns the ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the coupon in percent.
    #[must_use]
    pub fn coupon(&self) -> Decimal {
        self.coupon
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Checks the id against its declared identifier type, including the
    /// check digit.
    ///
    /// Construction never runs this check; stores accept bonds whose id
    /// does not validate.
    pub fn validate_identifier(&self) -> Result<(), IdentifierError> {
        match self.id_type {
            BondIdType::Cusip => Cusip::validate(&self.id),
            BondIdType::Isin => Isin::validate(&self.id),
        }
    }
}

impl Instrument for Bond {
    fn id(&self) -> &str {
        &self.id
    }

    fn product_type(&self) -> ProductType {
        ProductType::Bond
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ticker, self.coupon, self.maturity_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn maturity() -> Date {
        Date::from_ymd(2025, 11, 16).unwrap()
    }

    #[test]
    fn test_accessors() {
        let bond = Bond::new("912828M56", BondIdType::Cusip, "T", dec!(2.25), maturity());
        assert_eq!(bond.id(), "912828M56");
        assert_eq!(bond.product_type(), ProductType::Bond);
        assert_eq!(bond.id_type(), BondIdType::Cusip);
        assert_eq!(bond.ticker(), "T");
        assert_eq!(bond.coupon(), dec!(2.25));
        assert_eq!(bond.maturity_date(), maturity());
    }

    #[test]
    fn test_negative_coupon_allowed() {
        let bond = Bond::new("DE0001102580", BondIdType::Isin, "DBR", dec!(-0.25), maturity());
        assert_eq!(bond.coupon(), dec!(-0.25));
    }

    #[test]
    fn test_display() {
        let bond = Bond::new("912828M56", BondIdType::Cusip, "T", dec!(2.25), maturity());
        assert_eq!(bond.to_string(), "T 2.25 2025-11-16");
    }

    #[test]
    fn test_validate_identifier() {
        let cusip = Bond::new("912828M56", BondIdType::Cusip, "T", dec!(2.25), maturity());
        assert!(cusip.validate_identifier().is_ok());

        let isin = Bond::new("US0378331005", BondIdType::Isin, "AAPL", dec!(3), maturity());
        assert!(isin.validate_identifier().is_ok());

        // A CUSIP labelled as an ISIN fails on length
        let mislabelled = Bond::new("912828M56", BondIdType::Isin, "T", dec!(2.25), maturity());
        assert!(matches!(
            mislabelled.validate_identifier(),
            Err(IdentifierError::InvalidLength { id_type: "ISIN", .. })
        ));

        let bad_check = Bond::new("912828M57", BondIdType::Cusip, "T", dec!(2.25), maturity());
        assert!(matches!(
            bad_check.validate_identifier(),
            Err(IdentifierError::InvalidCheckDigit { .. })
        ));
    }
}
