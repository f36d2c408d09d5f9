//! # RefData Products
//!
//! Product taxonomy for the RefData reference data library.
//!
//! - **Products**: [`Bond`], [`InterestRateSwap`], [`Future`] (with bond and
//!   eurodollar specializations) and [`FloatingInterestRate`], unified by the
//!   [`Product`] enum and the [`Instrument`] trait
//! - **Conventions**: identifier types, floating indices, swap types
//! - **Identifiers**: CUSIP and ISIN check-digit validation
//! - **Price quotes**: 32nds notation used by bond futures
//!
//! ## Example
//!
//! ```rust
//! use refdata_products::prelude::*;
//! use refdata_core::Date;
//! use rust_decimal::Decimal;
//!
//! let bond = Bond::new(
//!     "912828M56",
//!     BondIdType::Cusip,
//!     "T",
//!     Decimal::new(225, 2),
//!     Date::from_ymd(2025, 11, 16).unwrap(),
//! );
//! let terms = FutureTerms {
//!     maturity_date: Date::from_ymd(2016, 3, 21).unwrap(),
//!     notional: Decimal::from(100_000),
//!     tick_size: Decimal::new(15625, 6),
//!     ticker: "TYH6".to_string(),
//! };
//!
//! let future = Future::bond_future("TYH6", bond, terms, "158-15").unwrap();
//! assert_eq!(future.delivery_method(), DeliveryMethod::Physical);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unreadable_literal)]

pub mod bond;
pub mod conventions;
pub mod error;
pub mod future;
pub mod identifiers;
pub mod price_quote;
pub mod product;
pub mod rate;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::Bond;
    pub use crate::conventions::{
        BondIdType, DeliveryMethod, FloatingIndex, IndexTenor, SwapLegType, SwapType,
    };
    pub use crate::error::{IdentifierError, ProductError, ProductResult};
    pub use crate::future::{Future, FutureKind, FutureTerms};
    pub use crate::identifiers::{Cusip, Isin};
    pub use crate::product::{Instrument, Product, ProductType};
    pub use crate::rate::FloatingInterestRate;
    pub use crate::swap::{InterestRateSwap, SwapTerms};
}

pub use bond::Bond;
pub use conventions::{
    BondIdType, DeliveryMethod, FloatingIndex, IndexTenor, SwapLegType, SwapType,
};
pub use error::{IdentifierError, ProductError, ProductResult};
pub use future::{Future, FutureKind, FutureTerms};
pub use product::{Instrument, Product, ProductType};
pub use rate::FloatingInterestRate;
pub use swap::{InterestRateSwap, SwapTerms};
