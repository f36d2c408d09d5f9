//! Keyed service contract.

use refdata_products::Instrument;

/// A keyed store of values of type `V`.
///
/// Every product service implements this with `K = String` (the product
/// id). A miss is `None`; implementations never insert or fabricate a
/// default on lookup.
pub trait Service<K, V> {
    /// Returns a copy of the value stored under `key`, if any.
    fn get_data(&self, key: &K) -> Option<V>;
}

/// A value that carries its own storage key.
pub trait Keyed {
    /// Returns the key this value is stored under.
    fn key(&self) -> &str;
}

impl<T: Instrument + ?Sized> Keyed for T {
    fn key(&self) -> &str {
        self.id()
    }
}
