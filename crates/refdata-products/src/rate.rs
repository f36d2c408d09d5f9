//! Floating interest rate, the underlying of eurodollar futures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conventions::FloatingIndex;
use crate::product::{Instrument, ProductType};

/// A floating rate: an index, a reset tenor in months and a spread over
/// the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingInterestRate {
    id: String,
    tenor_months: i32,
    floating_index: FloatingIndex,
    spread: Decimal,
}

impl FloatingInterestRate {
    /// Creates a new floating rate.
    pub fn new(
        id: impl Into<String>,
        tenor_months: i32,
        floating_index: FloatingIndex,
        spread: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            tenor_months,
            floating_index,
            spread,
        }
    }

    /// Returns the reset tenor in months.
    #[must_use]
    pub fn tenor_months(&self) -> i32 {
        self.tenor_months
    }

    /// Returns the floating index.
    #[must_use]
    pub fn floating_index(&self) -> FloatingIndex {
        self.floating_index
    }

    /// Returns the spread over the index.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.spread
    }
}

impl Instrument for FloatingInterestRate {
    fn id(&self) -> &str {
        &self.id
    }

    fn product_type(&self) -> ProductType {
        ProductType::InterestRate
    }
}

impl fmt::Display for FloatingInterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}m{} spread:{}",
            self.tenor_months, self.floating_index, self.spread
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_floating_rate() {
        let rate = FloatingInterestRate::new("USDLIBOR3M", 3, FloatingIndex::Libor, dec!(0.0));
        assert_eq!(rate.id(), "USDLIBOR3M");
        assert_eq!(rate.product_type(), ProductType::InterestRate);
        assert_eq!(rate.tenor_months(), 3);
        assert_eq!(rate.floating_index(), FloatingIndex::Libor);
        assert_eq!(rate.spread(), Decimal::ZERO);
        assert_eq!(rate.to_string(), "3mLIBOR spread:0.0");
    }
}
