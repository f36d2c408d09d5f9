//! # RefData Services
//!
//! In-memory keyed services for bonds, interest rate swaps and futures.
//!
//! Each service wraps a [`ProductStore`] and exposes `add` (upsert),
//! `get_data` (an owned copy, or `None` for an unknown id) and named
//! queries built on the store's single `select` primitive.
//!
//! ## Example
//!
//! ```rust
//! use refdata_services::prelude::*;
//! use refdata_products::prelude::*;
//! use refdata_core::Date;
//! use rust_decimal::Decimal;
//!
//! let services = ProductServices::new();
//! services.bonds.add(Bond::new(
//!     "912828TW0",
//!     BondIdType::Cusip,
//!     "T",
//!     Decimal::new(75, 2),
//!     Date::from_ymd(2017, 11, 5).unwrap(),
//! ));
//!
//! assert_eq!(services.bonds.get_bonds("T").len(), 1);
//! assert!(services.get_product("912828TW0").is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::ptr_arg)]

pub mod bond_service;
pub mod future_service;
pub mod store;
pub mod swap_service;

use refdata_config::RefDataConfig;
use refdata_products::Product;

pub use bond_service::BondService;
pub use future_service::FutureService;
pub use store::ProductStore;
pub use swap_service::SwapService;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond_service::BondService;
    pub use crate::future_service::FutureService;
    pub use crate::store::ProductStore;
    pub use crate::swap_service::SwapService;
    pub use crate::ProductServices;
    pub use refdata_traits::{Keyed, Service};
}

/// One service per product kind, built from a shared configuration.
#[derive(Debug, Default)]
pub struct ProductServices {
    /// Bond service.
    pub bonds: BondService,
    /// Swap service.
    pub swaps: SwapService,
    /// Future service.
    pub futures: FutureService,
}

impl ProductServices {
    /// Creates empty services with default configurations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty services from a configuration.
    pub fn from_config(config: &RefDataConfig) -> Self {
        tracing::debug!(
            bonds = %config.bonds.name,
            swaps = %config.swaps.name,
            futures = %config.futures.name,
            "Building product services"
        );
        Self {
            bonds: BondService::with_config(config.bonds.clone()),
            swaps: SwapService::with_config(config.swaps.clone()),
            futures: FutureService::with_config(config.futures.clone()),
        }
    }

    /// Looks an id up in every service.
    ///
    /// Bonds are searched first, then swaps, then futures.
    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.bonds
            .get_data(id)
            .map(Product::from)
            .or_else(|| self.swaps.get_data(id).map(Product::from))
            .or_else(|| self.futures.get_data(id).map(Product::from))
    }

    /// Total number of stored products.
    pub fn len(&self) -> usize {
        self.bonds.len() + self.swaps.len() + self.futures.len()
    }

    /// True if no service holds any product.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
