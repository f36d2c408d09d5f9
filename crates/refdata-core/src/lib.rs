//! # RefData Core
//!
//! Foundation types shared by every RefData crate.
//!
//! - **Types**: `Date`, `Currency`, `PaymentFrequency`
//! - **Day Count Conventions**: the three conventions carried by swap legs,
//!   with day count and year fraction calculations
//! - **Errors**: [`CoreError`] and the [`CoreResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use refdata_core::prelude::*;
//!
//! let effective = Date::from_ymd(2015, 11, 16).unwrap();
//! let termination = Date::from_ymd(2025, 11, 16).unwrap();
//!
//! let yf = DayCountConvention::Thirty360.year_fraction(effective, termination);
//! assert_eq!(yf, rust_decimal::Decimal::from(10));
//! assert_eq!(Currency::USD.code(), "USD");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::DayCountConvention;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date, PaymentFrequency};
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountConvention;
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, PaymentFrequency};
