//! Interest rate swap reference data service.

use refdata_config::ServiceConfig;
use refdata_core::{Currency, DayCountConvention, PaymentFrequency};
use refdata_products::conventions::{FloatingIndex, SwapLegType, SwapType};
use refdata_products::{Instrument, InterestRateSwap};
use refdata_traits::Service;

use crate::store::ProductStore;

/// Keyed store of interest rate swaps with attribute queries.
///
/// Swaps whose termination date precedes their effective date are stored
/// like any other; with `warn_on_inverted_schedule` set, each one is logged
/// at warn level when added.
#[derive(Debug)]
pub struct SwapService {
    store: ProductStore<InterestRateSwap>,
    config: ServiceConfig,
}

impl SwapService {
    /// Creates an empty service with the default swap configuration.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::swaps())
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

    /// Stores a swap under its id, replacing any swap with the same id.
    pub fn add(&self, swap: InterestRateSwap) {
        if self.config.warn_on_inverted_schedule && !swap.has_valid_schedule() {
            tracing::warn!(
                service = %self.config.name,
                id = swap.id(),
                effective = %swap.effective_date(),
                termination = %swap.termination_date(),
                "Swap terminates before its effective date"
            );
        }

        let id = swap.id().to_string();
        let replaced = self.store.upsert(swap).is_some();
        tracing::debug!(service = %self.config.name, id = %id, replaced, "Swap added");
    }

    /// Returns a copy of the swap with the given id.
    pub fn get_data(&self, id: &str) -> Option<InterestRateSwap> {
        self.store.get(id)
    }

    /// Swaps with the given fixed leg day count convention.
    pub fn get_swaps_by_day_count(&self, day_count: DayCountConvention) -> Vec<InterestRateSwap> {
        self.query("get_swaps_by_day_count", |s| {
            s.fixed_leg_day_count() == day_count
        })
    }

    /// Swaps with the given fixed leg payment frequency.
    pub fn get_swaps_by_payment_frequency(
        &self,
        frequency: PaymentFrequency,
    ) -> Vec<InterestRateSwap> {
        self.query("get_swaps_by_payment_frequency", |s| {
            s.fixed_leg_payment_frequency() == frequency
        })
    }

    /// Swaps on the given floating index.
    pub fn get_swaps_by_floating_index(&self, index: FloatingIndex) -> Vec<InterestRateSwap> {
        self.query("get_swaps_by_floating_index", |s| s.floating_index() == index)
    }

    /// Swaps with a term of at least `term_years`.
    pub fn get_swaps_greater_or_equal(&self, term_years: i32) -> Vec<InterestRateSwap> {
        self.query("get_swaps_greater_or_equal", |s| s.term_years() >= term_years)
    }

    /// Swaps with a term of less than `term_years`.
    pub fn get_swaps_less_than(&self, term_years: i32) -> Vec<InterestRateSwap> {
        self.query("get_swaps_less_than", |s| s.term_years() < term_years)
    }

    /// Swaps of the given type.
    pub fn get_swaps_by_swap_type(&self, swap_type: SwapType) -> Vec<InterestRateSwap> {
        self.query("get_swaps_by_swap_type", |s| s.swap_type() == swap_type)
    }

    /// Swaps of the given leg type.
    pub fn get_swaps_by_leg_type(&self, leg_type: SwapLegType) -> Vec<InterestRateSwap> {
        self.query("get_swaps_by_leg_type", |s| s.swap_leg_type() == leg_type)
    }

    /// Swaps in the given currency.
    pub fn get_swaps_by_currency(&self, currency: Currency) -> Vec<InterestRateSwap> {
        self.query("get_swaps_by_currency", |s| s.currency() == currency)
    }

    /// Swaps matching an arbitrary predicate.
    pub fn select<F>(&self, predicate: F) -> Vec<InterestRateSwap>
    where
        F: Fn(&InterestRateSwap) -> bool,
    {
        self.query("select", predicate)
    }

    /// All stored swaps, in id order.
    pub fn all(&self) -> Vec<InterestRateSwap> {
        self.store.all()
    }

    /// Number of stored swaps.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if no swaps are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn query<F>(&self, name: &'static str, predicate: F) -> Vec<InterestRateSwap>
    where
        F: Fn(&InterestRateSwap) -> bool,
    {
        let hits = self.store.select(predicate);
        if self.config.trace_queries {
            tracing::trace!(service = %self.config.name, query = name, hits = hits.len(), "Swap query");
        }
        hits
    }
}

impl Default for SwapService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<String, InterestRateSwap> for SwapService {
    fn get_data(&self, key: &String) -> Option<InterestRateSwap> {
        self.store.get(key)
    }
}
