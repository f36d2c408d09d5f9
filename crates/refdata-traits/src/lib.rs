//! # RefData Traits
//!
//! Trait definitions shared by the RefData services.
//!
//! This crate contains ONLY trait definitions. The in-memory implementations
//! live in `refdata-services`.
//!
//! - [`Service`]: keyed lookup returning an owned copy or `None`
//! - [`Keyed`]: derives the storage key from a value

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod service;

pub use service::{Keyed, Service};
