//! Bond reference data service.

use refdata_config::ServiceConfig;
use refdata_core::Date;
use refdata_products::{Bond, BondIdType, Instrument};
use refdata_traits::Service;

use crate::store::ProductStore;

/// Keyed store of bonds with ticker and attribute queries.
///
/// # Example
///
/// ```rust
/// use refdata_services::BondService;
/// use refdata_products::prelude::*;
/// use refdata_core::Date;
/// use rust_decimal::Decimal;
///
/// let service = BondService::new();
/// service.add(Bond::new(
///     "912828M56",
///     BondIdType::Cusip,
///     "T",
///     Decimal::new(225, 2),
///     Date::from_ymd(2025, 11, 16).unwrap(),
/// ));
///
/// assert_eq!(service.get_bonds("T").len(), 1);
/// assert!(service.get_data("912828TW0").is_none());
/// ```
#[derive(Debug)]
pub struct BondService {
    store: ProductStore<Bond>,
    config: ServiceConfig,
}

impl BondService {
    /// Creates an empty service with the default bond configuration.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::bonds())
    }

    /// Creates an empty service with the given configuration.
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            store: ProductStore::new(),
            config,
        }
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Stores a bond under its id, replacing any bond with the same id.
    pub fn add(&self, bond: Bond) {
        let id = bond.id().to_string();
        let replaced = self.store.upsert(bond).is_some();
        tracing::debug!(service = %self.config.name, id = %id, replaced, "Bond added");
    }

    /// Returns a copy of the bond with the given id.
    pub fn get_data(&self, id: &str) -> Option<Bond> {
        self.store.get(id)
    }

    /// Bonds with the given ticker.
    pub fn get_bonds(&self, ticker: &str) -> Vec<Bond> {
        self.query("get_bonds", |b| b.ticker() == ticker)
    }

    /// Bonds whose id is of the given identifier type.
    pub fn get_bonds_by_id_type(&self, id_type: BondIdType) -> Vec<Bond> {
        self.query("get_bonds_by_id_type", |b| b.id_type() == id_type)
    }

    /// Bonds maturing strictly before `date`.
    pub fn get_bonds_maturing_before(&self, date: Date) -> Vec<Bond> {
        self.query("get_bonds_maturing_before", |b| b.maturity_date() < date)
    }

    /// Bonds matching an arbitrary predicate.
    pub fn select<F>(&self, predicate: F) -> Vec<Bond>
    where
        F: Fn(&Bond) -> bool,
    {
        self.query("select", predicate)
    }

    /// All stored bonds, in id order.
    pub fn all(&self) -> Vec<Bond> {
        self.store.all()
    }

    /// Number of stored bonds.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if no bonds are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn query<F>(&self, name: &'static str, predicate: F) -> Vec<Bond>
    where
        F: Fn(&Bond) -> bool,
    {
        let hits = self.store.select(predicate);
        if self.config.trace_queries {
            tracing::trace!(service = %self.config.name, query = name, hits = hits.len(), "Bond query");
        }
        hits
    }
}

impl Default for BondService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<String, Bond> for BondService {
    fn get_data(&self, key: &String) -> Option<Bond> {
        self.store.get(key)
    }
}
