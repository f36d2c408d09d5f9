//! The product sum type and its kind tag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bond::Bond;
use crate::future::Future;
use crate::rate::FloatingInterestRate;
use crate::swap::InterestRateSwap;

/// Kind tag carried by every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Fixed coupon bond
    Bond,
    /// Interest rate swap
    Swap,
    /// Futures contract
    Future,
    /// Floating interest rate
    InterestRate,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductType::Bond => "Bond",
            ProductType::Swap => "Swap",
            ProductType::Future => "Future",
            ProductType::InterestRate => "InterestRate",
        };
        write!(f, "{name}")
    }
}

/// Identity shared by every product: an id and a kind tag.
///
/// The tag is fixed by the implementing type, so a product can never report
/// a kind other than its own.
pub trait Instrument {
    /// Returns the product identifier.
    fn id(&self) -> &str;

    /// Returns the kind tag of this product.
    fn product_type(&self) -> ProductType;
}

/// Any product, used where the kind is only known at runtime
/// (e.g. the underlying of a future).
///
/// # Example
///
/// ```rust
/// use refdata_products::prelude::*;
/// use refdata_core::Date;
/// use rust_decimal::Decimal;
///
/// let bond = Bond::new(
///     "912828M56",
///     BondIdType::Cusip,
///     "T",
///     Decimal::new(225, 2),
///     Date::from_ymd(2025, 11, 16).unwrap(),
/// );
/// let product = Product::from(bond);
/// assert_eq!(product.product_type(), ProductType::Bond);
/// assert_eq!(product.id(), "912828M56");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Product {
    /// A bond
    Bond(Bond),
    /// An interest rate swap
    Swap(InterestRateSwap),
    /// A futures contract
    Future(Future),
    /// A floating interest rate
    InterestRate(FloatingInterestRate),
}

impl Product {
    /// Returns the bond if this product is one.
    #[must_use]
    pub fn as_bond(&self) -> Option<&Bond> {
        match self {
            Product::Bond(bond) => Some(bond),
            _ => None,
        }
    }

    /// Returns the swap if this product is one.
    #[must_use]
    pub fn as_swap(&self) -> Option<&InterestRateSwap> {
        match self {
            Product::Swap(swap) => Some(swap),
            _ => None,
        }
    }

    /// Returns the future if this product is one.
    #[must_use]
    pub fn as_future(&self) -> Option<&Future> {
        match self {
            Product::Future(future) => Some(future),
            _ => None,
        }
    }

    /// Returns the floating rate if this product is one.
    #[must_use]
    pub fn as_interest_rate(&self) -> Option<&FloatingInterestRate> {
        match self {
            Product::InterestRate(rate) => Some(rate),
            _ => None,
        }
    }
}

impl Instrument for Product {
    fn id(&self) -> &str {
        match self {
            Product::Bond(p) => p.id(),
            Product::Swap(p) => p.id(),
            Product::Future(p) => p.id(),
            Product::InterestRate(p) => p.id(),
        }
    }

    fn product_type(&self) -> ProductType {
        match self {
            Product::Bond(_) => ProductType::Bond,
            Product::Swap(_) => ProductType::Swap,
            Product::Future(_) => ProductType::Future,
            Product::InterestRate(_) => ProductType::InterestRate,
        }
    }
}

impl From<Bond> for Product {
    fn from(bond: Bond) -> Self {
        Product::Bond(bond)
    }
}

impl From<InterestRateSwap> for Product {
    fn from(swap: InterestRateSwap) -> Self {
        Product::Swap(swap)
    }
}

impl From<Future> for Product {
    fn from(future: Future) -> Self {
        Product::Future(future)
    }
}

impl From<FloatingInterestRate> for Product {
    fn from(rate: FloatingInterestRate) -> Self {
        Product::InterestRate(rate)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Bond(p) => write!(f, "{p}"),
            Product::Swap(p) => write!(f, "{p}"),
            Product::Future(p) => write!(f, "{p}"),
            Product::InterestRate(p) => write!(f, "{p}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{BondIdType, FloatingIndex};
    use refdata_core::Date;
    use rust_decimal_macros::dec;

    fn treasury() -> Bond {
        Bond::new(
            "912828M56",
            BondIdType::Cusip,
            "T",
            dec!(2.25),
            Date::from_ymd(2025, 11, 16).unwrap(),
        )
    }

    #[test]
    fn test_variant_tags_match_kind() {
        let bond = Product::from(treasury());
        assert_eq!(bond.product_type(), ProductType::Bond);
        assert_eq!(bond.product_type(), treasury().product_type());

        let rate = Product::from(FloatingInterestRate::new(
            "USDLIBOR3M",
            3,
            FloatingIndex::Libor,
            dec!(0),
        ));
        assert_eq!(rate.product_type(), ProductType::InterestRate);
        assert_eq!(rate.id(), "USDLIBOR3M");
    }

    #[test]
    fn test_downcasts() {
        let product = Product::from(treasury());
        assert_eq!(product.as_bond(), Some(&treasury()));
        assert!(product.as_swap().is_none());
        assert!(product.as_future().is_none());
        assert!(product.as_interest_rate().is_none());
    }

    #[test]
    fn test_serde_tagged() {
        let product = Product::from(treasury());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "Bond");
        assert_eq!(json["id"], "912828M56");
    }

    #[test]
    fn test_product_type_display() {
        assert_eq!(ProductType::InterestRate.to_string(), "InterestRate");
        assert_eq!(ProductType::Swap.to_string(), "Swap");
    }
}
