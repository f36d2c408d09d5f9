//! Futures contracts and their bond and eurodollar specializations.
//!
//! A future owns a snapshot of its underlying. The specialized constructors
//! check the underlying's kind and fix the delivery method; the plain
//! constructor accepts anything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use refdata_core::Date;

use crate::conventions::DeliveryMethod;
use crate::error::{ProductError, ProductResult};
use crate::price_quote::parse_thirty_seconds;
use crate::product::{Instrument, Product, ProductType};

/// Contract terms shared by all futures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureTerms {
    /// Last trading date
    pub maturity_date: Date,
    /// Contract notional
    pub notional: Decimal,
    /// Minimum price increment
    pub tick_size: Decimal,
    /// Exchange ticker
    pub ticker: String,
}

/// Specialization of a future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FutureKind {
    /// Plain future on any underlying
    Generic,
    /// Treasury bond future, quoted in 32nds (e.g. "158-15")
    Bond {
        /// Quote as traded
        price_quote: String,
    },
    /// Eurodollar future, quoted as 100 minus the implied rate
    EuroDollar {
        /// Decimal price quote
        price_quote: Decimal,
    },
}

impl FutureKind {
    /// Underlying kind this specialization requires, if any.
    #[must_use]
    pub fn required_underlying(&self) -> Option<ProductType> {
        match self {
            FutureKind::Generic => None,
            FutureKind::Bond { .. } => Some(ProductType::Bond),
            FutureKind::EuroDollar { .. } => Some(ProductType::InterestRate),
        }
    }
}

/// A futures contract.
///
/// # Example
///
/// ```rust
/// use refdata_products::prelude::*;
/// use refdata_core::Date;
/// use rust_decimal::Decimal;
///
/// let rate = FloatingInterestRate::new("USDLIBOR3M", 3, FloatingIndex::Libor, Decimal::ZERO);
/// let terms = FutureTerms {
///     maturity_date: Date::from_ymd(2016, 3, 14).unwrap(),
///     notional: Decimal::from(1_000_000),
///     tick_size: Decimal::new(25, 4),
///     ticker: "EDH6".to_string(),
/// };
///
/// let future = Future::euro_dollar_future("EDH6", rate, terms, Decimal::new(9925, 2)).unwrap();
/// assert_eq!(future.delivery_method(), DeliveryMethod::Cash);
/// assert_eq!(future.implied_rate(), Some(Decimal::new(75, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Future {
    id: String,
    underlying: Box<Product>,
    #[serde(flatten)]
    terms: FutureTerms,
    delivery_method: DeliveryMethod,
    kind: FutureKind,
}

impl Future {
    /// Creates a plain future. Any underlying and delivery method are
    /// accepted.
    pub fn new(
        id: impl Into<String>,
        underlying: impl Into<Product>,
        terms: FutureTerms,
        delivery_method: DeliveryMethod,
    ) -> Self {
        Self {
            id: id.into(),
            underlying: Box::new(underlying.into()),
            terms,
            delivery_method,
            kind: FutureKind::Generic,
        }
    }

    /// Creates a bond future. Delivery is physical.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::IncompatibleUnderlying` unless the underlying
    /// is a bond.
    pub fn bond_future(
        id: impl Into<String>,
        underlying: impl Into<Product>,
        terms: FutureTerms,
        price_quote: impl Into<String>,
    ) -> ProductResult<Self> {
        Self::specialized(
            id.into(),
            underlying.into(),
            terms,
            DeliveryMethod::Physical,
            FutureKind::Bond {
                price_quote: price_quote.into(),
            },
        )
    }

    /// Creates a eurodollar future. Delivery is cash.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::IncompatibleUnderlying` unless the underlying
    /// is a floating interest rate.
    pub fn euro_dollar_future(
        id: impl Into<String>,
        underlying: impl Into<Product>,
        terms: FutureTerms,
        price_quote: Decimal,
    ) -> ProductResult<Self> {
        Self::specialized(
            id.into(),
            underlying.into(),
            terms,
            DeliveryMethod::Cash,
            FutureKind::EuroDollar { price_quote },
        )
    }

    fn specialized(
        id: String,
        underlying: Product,
        terms: FutureTerms,
        delivery_method: DeliveryMethod,
        kind: FutureKind,
    ) -> ProductResult<Self> {
        if let Some(expected) = kind.required_underlying() {
            let actual = underlying.product_type();
            if actual != expected {
                return Err(ProductError::incompatible_underlying(expected, actual));
            }
        }

        Ok(Self {
            id,
            underlying: Box::new(underlying),
            terms,
            delivery_method,
            kind,
        })
    }

    /// Returns the underlying product.
    #[must_use]
    pub fn underlying(&self) -> &Product {
        &self.underlying
    }

    /// Returns the contract terms.
    #[must_use]
    pub fn terms(&self) -> &FutureTerms {
        &self.terms
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.terms.maturity_date
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.terms.notional
    }

    /// Returns the tick size.
    #[must_use]
    pub fn tick_size(&self) -> Decimal {
        self.terms.tick_size
    }

    /// Returns the ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.terms.ticker
    }

    /// Returns the delivery method.
    #[must_use]
    pub fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }

    /// Returns the specialization.
    #[must_use]
    pub fn kind(&self) -> &FutureKind {
        &self.kind
    }

    /// Resolves the price quote to a decimal price.
    ///
    /// `Ok(None)` for a plain future, which carries no quote.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidPriceQuote` if a bond future quote is
    /// not in 32nds notation.
    pub fn quoted_price(&self) -> ProductResult<Option<Decimal>> {
        match &self.kind {
            FutureKind::Generic => Ok(None),
            FutureKind::Bond { price_quote } => parse_thirty_seconds(price_quote).map(Some),
            FutureKind::EuroDollar { price_quote } => Ok(Some(*price_quote)),
        }
    }

    /// Implied rate in percent of a eurodollar future (100 - price).
    #[must_use]
    pub fn implied_rate(&self) -> Option<Decimal> {
        match &self.kind {
            FutureKind::EuroDollar { price_quote } => Some(Decimal::ONE_HUNDRED - *price_quote),
            _ => None,
        }
    }
}

impl Instrument for Future {
    fn id(&self) -> &str {
        &self.id
    }

    fn product_type(&self) -> ProductType {
        ProductType::Future
    }
}

impl fmt::Display for Future {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} on {}",
            self.terms.ticker,
            self.terms.maturity_date,
            self.delivery_method,
            self.underlying.id()
        )?;
        match &self.kind {
            FutureKind::Generic => Ok(()),
            FutureKind::Bond { price_quote } => write!(f, " @ {price_quote}"),
            FutureKind::EuroDollar { price_quote } => write!(f, " @ {price_quote}"),
        }
    }
}
