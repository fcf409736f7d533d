//! Reactive state containers.
//!
//! `Store<T>` is the observable value slot the UI binds to: one current
//! value, replaced wholesale on every write, with subscribers notified
//! through a watch channel. Racing writers resolve last-write-wins; there is
//! no merging or conflict detection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::PokemonData;

/// Number of pokemon species the pokedex pages over.
pub const POKEMON_TOTAL: usize = 1025;

/// Pokemon listed per page by default.
const DEFAULT_PAGE_LIMIT: usize = 20;

/// Observable value container: set, read the current value, subscribe.
///
/// Clones are handles onto the same slot. Subscribers see the latest value;
/// intermediate values may be skipped if writes outpace reads.
#[derive(Debug)]
pub struct Store<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Replace the current value in full and notify subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Read a copy of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribe to changes. The receiver starts with the current value
    /// already marked as seen; `changed()` resolves on the next write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Offset/limit window into the pokemon listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Client-side cache of the pokedex listing plus its pagination state.
#[derive(Debug, Clone, Default)]
pub struct PokedexStore {
    pub pokemons: Store<Vec<PokemonData>>,
    pub pagination: Store<Pagination>,
}

impl PokedexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page numbers to render around the current page: a window of at most
    /// five pages centered on the current one, clamped to the valid range.
    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(POKEMON_TOTAL, self.pagination.get())
    }
}

fn page_window(total: usize, page: Pagination) -> Vec<usize> {
    if page.limit == 0 {
        return Vec::new();
    }
    let total_pages = total.div_ceil(page.limit);
    let current = page.offset / page.limit + 1;

    let mut start = current.saturating_sub(2).max(1);
    let end = (start + 4).min(total_pages);
    // Shift the window back if it ran past the last page.
    start = end.saturating_sub(4).max(1);

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_set_and_get() {
        let store = Store::new(0u32);
        assert_eq!(store.get(), 0);
        store.set(7);
        assert_eq!(store.get(), 7);
    }

    #[test]
    fn test_store_last_write_wins() {
        let store = Store::new(String::new());
        store.set("first".to_string());
        store.set("second".to_string());
        assert_eq!(store.get(), "second");
    }

    #[test]
    fn test_store_clones_share_state() {
        let store = Store::new(1u32);
        let handle = store.clone();
        handle.set(2);
        assert_eq!(store.get(), 2);
    }

    #[tokio::test]
    async fn test_store_notifies_subscribers() {
        let store = Store::new(0u32);
        let mut rx = store.subscribe();
        store.set(5);
        rx.changed().await.expect("sender dropped");
        assert_eq!(*rx.borrow_and_update(), 5);
    }

    #[test]
    fn test_page_window_at_start() {
        let page = Pagination {
            offset: 0,
            limit: 20,
        };
        assert_eq!(page_window(1025, page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_window_centers_on_current_page() {
        let page = Pagination {
            offset: 200,
            limit: 20,
        };
        // Page 11 of 52.
        assert_eq!(page_window(1025, page), vec![9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_page_window_clamps_at_end() {
        let page = Pagination {
            offset: 1020,
            limit: 20,
        };
        // Page 52 of 52: window shifts back to stay five wide.
        assert_eq!(page_window(1025, page), vec![48, 49, 50, 51, 52]);
    }

    #[test]
    fn test_page_window_smaller_than_five_pages() {
        let page = Pagination {
            offset: 0,
            limit: 500,
        };
        assert_eq!(page_window(1025, page), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_window_zero_limit_is_empty() {
        let page = Pagination {
            offset: 0,
            limit: 0,
        };
        assert!(page_window(1025, page).is_empty());
    }

    #[test]
    fn test_pokedex_store_defaults() {
        let store = PokedexStore::new();
        assert!(store.pokemons.get().is_empty());
        assert_eq!(store.pagination.get(), Pagination::default());
        assert_eq!(store.page_numbers(), vec![1, 2, 3, 4, 5]);
    }
}
