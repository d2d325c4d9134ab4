//! Availability policies - "can this printing supply N copies?"
//!
//! A policy is a pure predicate over (candidate, requested count). The
//! three standard policies:
//!
//! - `unlimited`: always yes (basic-land art selection)
//! - `unlimited_if`: yes iff a candidate predicate holds, count ignored
//! - `from_supply`: yes iff a fixed supply multiset holds at least the
//!   requested count
//!
//! Supplies are fixed at construction and never decremented, so one
//! policy value is safe to reuse across every candidate and card within
//! a resolution pass.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::catalog::{Printing, PrintingId};

/// A supply/quantity constraint on candidate printings.
pub struct Availability<V> {
    accept: Arc<dyn Fn(&V, u32) -> bool + Send + Sync>,
}

impl<V> Clone for Availability<V> {
    fn clone(&self) -> Self {
        Self {
            accept: Arc::clone(&self.accept),
        }
    }
}

impl<V> fmt::Debug for Availability<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Availability(..)")
    }
}

impl<V> Availability<V> {
    /// Wrap an arbitrary acceptance function.
    #[must_use]
    pub fn new<F>(accept: F) -> Self
    where
        F: Fn(&V, u32) -> bool + Send + Sync + 'static,
    {
        Self {
            accept: Arc::new(accept),
        }
    }

    /// Every candidate can supply any count.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(|_, _| true)
    }

    /// A candidate can supply any count iff the predicate holds for it.
    #[must_use]
    pub fn unlimited_if<P>(predicate: P) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self::new(move |candidate, _| predicate(candidate))
    }

    /// A candidate can supply a count iff a fixed supply multiset holds
    /// at least that many, under the given key.
    #[must_use]
    pub fn from_supply<K, F>(supply: FxHashMap<K, u32>, key: F) -> Self
    where
        K: Eq + Hash + Send + Sync + 'static,
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Self::new(move |candidate, count| {
            supply.get(&key(candidate)).copied().unwrap_or(0) >= count
        })
    }

    /// Test whether a candidate can supply the requested count.
    #[must_use]
    pub fn accepts(&self, candidate: &V, count: u32) -> bool {
        (self.accept)(candidate, count)
    }
}

impl Availability<Arc<Printing>> {
    /// Supply counted per printing, the common concrete case.
    #[must_use]
    pub fn printing_supply(supply: FxHashMap<PrintingId, u32>) -> Self {
        Self::from_supply(supply, |printing: &Arc<Printing>| printing.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;

    fn printing(id: u32) -> Arc<Printing> {
        Arc::new(Printing::new(PrintingId::new(id), CardId::new(1), "TST"))
    }

    #[test]
    fn test_unlimited() {
        let policy: Availability<Arc<Printing>> = Availability::unlimited();
        assert!(policy.accepts(&printing(1), 0));
        assert!(policy.accepts(&printing(1), 1_000));
    }

    #[test]
    fn test_unlimited_if() {
        let policy = Availability::unlimited_if(|p: &Arc<Printing>| p.set_code == "TST");
        assert!(policy.accepts(&printing(1), 999));

        let other = Availability::unlimited_if(|p: &Arc<Printing>| p.set_code == "ZEN");
        assert!(!other.accepts(&printing(1), 1));
    }

    #[test]
    fn test_printing_supply() {
        let mut supply = FxHashMap::default();
        supply.insert(PrintingId::new(1), 3);

        let policy = Availability::printing_supply(supply);
        assert!(policy.accepts(&printing(1), 3));
        assert!(!policy.accepts(&printing(1), 4));
        assert!(!policy.accepts(&printing(2), 1));
        assert!(policy.accepts(&printing(2), 0));
    }

    #[test]
    fn test_supply_is_not_decremented() {
        let mut supply = FxHashMap::default();
        supply.insert(PrintingId::new(1), 2);
        let policy = Availability::printing_supply(supply);

        // Repeated queries see the same fixed supply.
        for _ in 0..5 {
            assert!(policy.accepts(&printing(1), 2));
        }
    }
}
