//! Lock-guarded inventory for callers that share one store across threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use invtrack_core::{DomainResult, ItemName, Quantity};

use crate::export;
use crate::inventory::{Inventory, LowStock, StockEntry};

/// An [`Inventory`] behind a single mutex.
///
/// Every operation holds the lock for its whole duration and releases it before
/// returning, so no caller ever observes a half-applied operation.
#[derive(Debug, Default)]
pub struct SharedInventory {
    inner: Mutex<Inventory>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Mutex::new(inventory),
        }
    }

    // Each mutation is a single insert or remove; a poisoned lock still guards a consistent map.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, name: ItemName, quantity: Quantity) -> DomainResult<Option<Quantity>> {
        self.lock().add(name, quantity)
    }

    pub fn update(&self, name: ItemName, quantity: Quantity) -> DomainResult<Quantity> {
        self.lock().update(name, quantity)
    }

    pub fn remove(&self, name: ItemName) -> DomainResult<Quantity> {
        self.lock().remove(name)
    }

    pub fn list(&self) -> DomainResult<Vec<StockEntry>> {
        self.lock().list()
    }

    pub fn low_stock(&self, threshold: Quantity) -> LowStock {
        self.lock().low_stock(threshold)
    }

    pub fn low_stock_default(&self) -> LowStock {
        self.lock().low_stock_default()
    }

    pub fn search(&self, name: &ItemName) -> DomainResult<Quantity> {
        self.lock().search(name)
    }

    /// Render the export text under the lock; writing it out happens afterwards.
    pub fn render_export(&self) -> DomainResult<String> {
        export::render(&self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> Inventory {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Inventory> for SharedInventory {
    fn from(value: Inventory) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_writers_each_land_exactly_once() {
        let shared = Arc::new(SharedInventory::default());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..50 {
                        let name = ItemName::new(format!("item-{t}-{i}")).unwrap();
                        shared.add(name, Quantity::new(i)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.len(), 400);
        let inv = Arc::try_unwrap(shared).unwrap().into_inner();
        assert_eq!(inv.version(), 400);
    }

    #[test]
    fn delegates_queries_and_errors() {
        let shared = SharedInventory::default();
        assert!(shared.is_empty());
        assert!(shared.render_export().is_err());

        let bolt = ItemName::new("bolt").unwrap();
        shared.add(bolt.clone(), Quantity::new(3)).unwrap();
        assert_eq!(shared.search(&bolt).unwrap(), Quantity::new(3));
        assert_eq!(shared.low_stock_default(), shared.low_stock(Quantity::new(5)));
        assert_eq!(shared.update(bolt.clone(), Quantity::new(9)).unwrap(), Quantity::new(3));
        assert_eq!(shared.list().unwrap().len(), 1);
        assert_eq!(shared.remove(bolt.clone()).unwrap(), Quantity::new(9));
        assert!(shared.search(&bolt).unwrap_err().is_not_found());
    }
}
