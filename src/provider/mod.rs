//! Text providers supplying human-readable values for generated rows.
//!
//! The generator only needs two kinds of strings: person names for
//! customers and product-like phrases for order descriptions. Both come
//! through the [`TextProvider`] trait so a deterministic stub can stand in
//! for the fake-data library in tests.

mod commerce;

use crate::error::BoxError;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

use commerce::product_name;

/// Source of random human-readable strings
pub trait TextProvider {
    /// Full person name, e.g. "Jane Doe"
    fn next_full_name(&mut self) -> Result<String, BoxError>;

    /// Product-like phrase, e.g. "Rustic Granite Chair"
    fn next_product_name(&mut self) -> Result<String, BoxError>;
}

/// Provider backed by the `fake` crate's English name data and the
/// commerce word lists in this module.
pub struct FakeProvider<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FakeProvider<rand::rngs::ThreadRng> {
    /// Provider drawing from the thread-local generator
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> TextProvider for FakeProvider<R> {
    fn next_full_name(&mut self) -> Result<String, BoxError> {
        Ok(Name().fake())
    }

    fn next_product_name(&mut self) -> Result<String, BoxError> {
        Ok(product_name(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_has_two_parts() {
        let mut provider = FakeProvider::new(StdRng::seed_from_u64(42));
        for _ in 0..20 {
            let name = provider.next_full_name().unwrap();
            assert!(!name.trim().is_empty());
            assert!(name.contains(' '), "expected first and last name: {name}");
        }
    }

    #[test]
    fn test_product_name_is_three_words() {
        let mut provider = FakeProvider::new(StdRng::seed_from_u64(7));
        let name = provider.next_product_name().unwrap();
        assert_eq!(name.split(' ').count(), 3);
    }
}
