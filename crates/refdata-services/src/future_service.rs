//! Futures reference data service.

use refdata_config::ServiceConfig;
use refdata_products::conventions::DeliveryMethod;
use refdata_products::{Future, Instrument, ProductType};
use refdata_traits::Service;

use crate::store::ProductStore;

/// Keyed store of futures, including bond and eurodollar futures.
#[derive(Debug)]
pub struct FutureService {
    store: ProductStore<Future>,
    config: ServiceConfig,
}

impl FutureService {
    /// Creates an empty service with the default future configuration.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::futures())
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

    /// Stores a future under its id, replacing any future with the same id.
    pub fn add(&self, future: Future) {
        let id = future.id().to_string();
        let underlying = future.underlying().product_type();
        let replaced = self.store.upsert(future).is_some();
        tracing::debug!(
            service = %self.config.name,
            id = %id,
            underlying = %underlying,
            replaced,
            "Future added"
        );
    }

    /// Returns a copy of the future with the given id.
    pub fn get_data(&self, id: &str) -> Option<Future> {
        self.store.get(id)
    }

    /// Futures with the given ticker.
    pub fn get_futures_by_ticker(&self, ticker: &str) -> Vec<Future> {
        self.query("get_futures_by_ticker", |f| f.ticker() == ticker)
    }

    /// Futures settled by the given delivery method.
    pub fn get_futures_by_delivery_method(&self, method: DeliveryMethod) -> Vec<Future> {
        self.query("get_futures_by_delivery_method", |f| {
            f.delivery_method() == method
        })
    }

    /// Futures whose underlying is of the given kind.
    pub fn get_futures_by_underlying_type(&self, product_type: ProductType) -> Vec<Future> {
        self.query("get_futures_by_underlying_type", |f| {
            f.underlying().product_type() == product_type
        })
    }

    /// Futures matching an arbitrary predicate.
    pub fn select<F>(&self, predicate: F) -> Vec<Future>
    where
        F: Fn(&Future) -> bool,
    {
        self.query("select", predicate)
    }

    /// All stored futures, in id order.
    pub fn all(&self) -> Vec<Future> {
        self.store.all()
    }

    /// Number of stored futures.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if no futures are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn query<F>(&self, name: &'static str, predicate: F) -> Vec<Future>
    where
        F: Fn(&Future) -> bool,
    {
        let hits = self.store.select(predicate);
        if self.config.trace_queries {
            tracing::trace!(service = %self.config.name, query = name, hits = hits.len(), "Future query");
        }
        hits
    }
}

impl Default for FutureService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<String, Future> for FutureService {
    fn get_data(&self, key: &String) -> Option<Future> {
        self.store.get(key)
    }
}
