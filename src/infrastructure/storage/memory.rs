//! In-memory catalog used by the demo listing endpoint

use std::sync::Arc;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Read-only, cheaply clonable list of items.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Arc<Vec<Item>>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Catalog of `count` generated items with ids starting at 1.
    pub fn generated(count: usize) -> Self {
        let items = (1..=count as i64)
            .map(|id| Item {
                id,
                name: format!("Item #{}", id),
            })
            .collect();
        Self::new(items)
    }

    pub fn count(&self) -> i64 {
        i64::try_from(self.items.len()).unwrap_or(i64::MAX)
    }

    /// Equivalent of `OFFSET offset LIMIT limit`. Out-of-range windows
    /// produce an empty slice.
    pub fn slice(&self, offset: i64, limit: i64) -> Vec<Item> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        self.items.iter().skip(offset).take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_returns_requested_window() {
        let catalog = InMemoryCatalog::generated(25);
        let ids: Vec<i64> = catalog.slice(10, 5).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let catalog = InMemoryCatalog::generated(25);
        assert!(catalog.slice(30, 10).is_empty());
        assert_eq!(catalog.slice(20, 10).len(), 5);
    }

    #[test]
    fn negative_window_is_empty() {
        let catalog = InMemoryCatalog::generated(3);
        assert!(catalog.slice(0, -1).is_empty());
        assert!(catalog.slice(-5, 2).is_empty());
    }
}
