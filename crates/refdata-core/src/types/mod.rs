//! Domain types shared across products.

mod currency;
mod date;
mod frequency;

pub use currency::Currency;
pub use date::Date;
pub use frequency::PaymentFrequency;
