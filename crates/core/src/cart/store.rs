//! Cart store.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use rust_decimal::Decimal;
use slotmap::{SlotMap, new_key_type};
use tracing::debug;

use crate::cart::{errors::CartStorageError, models::CartItem, storage::CartStorage};

/// Storage slot holding the serialized cart. External code must never write
/// this key directly; going through the store is what preserves the
/// notify-on-mutation guarantee.
pub const CART_STORAGE_KEY: &str = "shoppingCart";

new_key_type! {
    /// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
    pub struct ListenerKey;
}

type Listener = Arc<dyn Fn() + Send + Sync>;

/// The locally persisted shopping cart.
///
/// Entries are unique per `(product_id, product_size_id)`; adding a matching
/// pair increments its quantity instead of duplicating the entry. Every read
/// goes back to storage, there is no in-memory cache. The store performs no
/// stock or availability checks; callers validate business rules (e.g. stock
/// limits across size variants, via [`total_quantity_for_product`]) before
/// adding.
///
/// Another process mutating the same slot is only observed on the next read;
/// the store does not watch for external changes.
///
/// [`total_quantity_for_product`]: CartStore::total_quantity_for_product
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    listeners: Mutex<SlotMap<ListenerKey, Listener>>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("listeners", &self.lock_listeners().len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store over the given storage slot.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        Self {
            storage,
            listeners: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Current cart contents, freshly read from storage, in insertion order.
    ///
    /// A corrupt or unreadable slot reads as an empty cart; this never
    /// errors.
    #[must_use]
    pub fn all_items(&self) -> Vec<CartItem> {
        let raw = match self.storage.read(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                debug!("cart slot unreadable, treating as empty: {error}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(error) => {
                debug!("persisted cart is corrupt, treating as empty: {error}");
                Vec::new()
            }
        }
    }

    /// Add an item. An entry matching `(product_id, product_size_id)` has its
    /// quantity increased by `item.quantity`; otherwise the item is appended.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures; nothing is retried.
    pub fn add_item(&self, item: CartItem) -> Result<(), CartStorageError> {
        let mut items = self.all_items();

        match items
            .iter_mut()
            .find(|entry| entry.matches(item.product_id, item.product_size_id))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }

        self.save(&items)
    }

    /// Set the quantity of the matching entry. A zero quantity removes the
    /// entry instead. Absent entries are left alone, but the cart is still
    /// re-persisted and listeners notified.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn update_item(
        &self,
        product_id: i64,
        product_size_id: i64,
        quantity: u32,
    ) -> Result<(), CartStorageError> {
        if quantity == 0 {
            return self.remove_item(product_id, product_size_id);
        }

        let mut items = self.all_items();

        if let Some(entry) = items
            .iter_mut()
            .find(|entry| entry.matches(product_id, product_size_id))
        {
            entry.quantity = quantity;
        }

        self.save(&items)
    }

    /// Remove the matching entry. Removal of an absent entry is a logical
    /// no-op, but the cart is still re-persisted and listeners notified.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn remove_item(&self, product_id: i64, product_size_id: i64) -> Result<(), CartStorageError> {
        let mut items = self.all_items();

        items.retain(|entry| !entry.matches(product_id, product_size_id));

        self.save(&items)
    }

    /// Remove every entry by deleting the storage slot, and notify listeners.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn clear(&self) -> Result<(), CartStorageError> {
        self.storage.remove(CART_STORAGE_KEY)?;
        self.notify_listeners();

        Ok(())
    }

    /// Sum of quantities across all entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.all_items().iter().map(|item| item.quantity).sum()
    }

    /// Sum of quantities across every size variant of `product_id`. Callers
    /// use this to validate stock limits before an add, since stock is
    /// tracked per product, not per size.
    #[must_use]
    pub fn total_quantity_for_product(&self, product_id: i64) -> u32 {
        self.all_items()
            .iter()
            .filter(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .sum()
    }

    /// First entry for `product_id`, regardless of size.
    #[must_use]
    pub fn item_for_product(&self, product_id: i64) -> Option<CartItem> {
        self.all_items()
            .into_iter()
            .find(|item| item.product_id == product_id)
    }

    /// Sum over entries of `quantity * price`.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.all_items().iter().map(CartItem::line_total).sum()
    }

    /// Register a listener invoked synchronously after every mutating
    /// operation, including logical no-ops.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> ListenerKey {
        self.lock_listeners().insert(Arc::new(listener))
    }

    /// Remove a listener. Unknown keys are ignored.
    pub fn unsubscribe(&self, key: ListenerKey) {
        self.lock_listeners().remove(key);
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CartStorageError> {
        let raw = serde_json::to_string(items).map_err(CartStorageError::Serialize)?;

        self.storage.write(CART_STORAGE_KEY, &raw)?;
        self.notify_listeners();

        Ok(())
    }

    // The registry is snapshotted before the fan-out so a listener may
    // mutate it (including unsubscribing itself) without affecting delivery
    // to the rest of this pass.
    fn notify_listeners(&self) {
        let snapshot: Vec<Listener> = self.lock_listeners().values().cloned().collect();

        for listener in snapshot {
            listener();
        }
    }

    fn lock_listeners(&self) -> MutexGuard<'_, SlotMap<ListenerKey, Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering},
    };

    use rust_decimal::dec;
    use testresult::TestResult;

    use crate::cart::storage::MemoryStorage;

    use super::*;

    fn store() -> CartStore {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    fn item(product_id: i64, product_size_id: i64, quantity: u32, price: Decimal) -> CartItem {
        CartItem {
            product_id,
            product_size_id,
            name: format!("Product {product_id}"),
            price,
            quantity,
            product_size_name: format!("Size {product_size_id}"),
            product_gender_name: "Unisex".to_string(),
            product_category_name: "Shoes".to_string(),
            product_brand_name: "Allora".to_string(),
            image: "image.webp".to_string(),
        }
    }

    #[test]
    fn add_item_merges_matching_pairs_into_one_entry() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 1, dec!(20.00)))?;
        cart.add_item(item(1, 2, 2, dec!(20.00)))?;

        let items = cart.all_items();

        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|entry| entry.quantity), Some(3));
        assert_eq!(cart.total_price(), dec!(60.00));

        Ok(())
    }

    #[test]
    fn add_item_appends_distinct_pairs_in_insertion_order() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 1, dec!(10)))?;
        cart.add_item(item(1, 3, 1, dec!(15)))?;
        cart.add_item(item(7, 2, 1, dec!(5)))?;

        let ids: Vec<(i64, i64)> = cart
            .all_items()
            .iter()
            .map(|entry| (entry.product_id, entry.product_size_id))
            .collect();

        assert_eq!(ids, vec![(1, 2), (1, 3), (7, 2)]);

        Ok(())
    }

    #[test]
    fn totals_across_size_variants() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 1, dec!(10)))?;
        cart.add_item(item(1, 3, 1, dec!(15)))?;

        assert_eq!(cart.total_quantity_for_product(1), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), dec!(25));

        Ok(())
    }

    #[test]
    fn totals_match_all_items_after_mixed_operations() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 2, dec!(10.50)))?;
        cart.add_item(item(2, 4, 3, dec!(7.25)))?;
        cart.add_item(item(1, 2, 1, dec!(10.50)))?;
        cart.remove_item(2, 4)?;
        cart.add_item(item(3, 1, 5, dec!(1.10)))?;

        let items = cart.all_items();
        let expected_count: u32 = items.iter().map(|entry| entry.quantity).sum();
        let expected_price: Decimal = items.iter().map(CartItem::line_total).sum();

        assert_eq!(cart.total_items(), expected_count);
        assert_eq!(cart.total_price(), expected_price);

        Ok(())
    }

    #[test]
    fn remove_item_of_absent_pair_leaves_cart_unchanged() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 1, dec!(10)))?;

        let before = cart.all_items();

        cart.remove_item(9, 9)?;

        assert_eq!(cart.all_items(), before);

        Ok(())
    }

    #[test]
    fn remove_item_only_deletes_the_matching_size() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 1, dec!(10)))?;
        cart.add_item(item(1, 3, 1, dec!(10)))?;

        cart.remove_item(1, 2)?;

        let items = cart.all_items();

        assert_eq!(items.len(), 1);
        assert_eq!(
            items.first().map(|entry| entry.product_size_id),
            Some(3),
            "the other size variant must survive"
        );

        Ok(())
    }

    #[test]
    fn clear_resets_everything() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 4, dec!(10)))?;
        cart.add_item(item(2, 1, 1, dec!(3)))?;

        cart.clear()?;

        assert!(cart.all_items().is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn update_item_replaces_quantity_instead_of_adding() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 5, dec!(10)))?;
        cart.update_item(1, 2, 2)?;

        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[test]
    fn update_item_with_zero_quantity_removes_the_entry() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 5, dec!(10)))?;
        cart.update_item(1, 2, 0)?;

        assert!(cart.all_items().is_empty());

        Ok(())
    }

    #[test]
    fn item_for_product_ignores_size() -> TestResult {
        let cart = store();

        cart.add_item(item(1, 2, 1, dec!(10)))?;
        cart.add_item(item(1, 3, 1, dec!(10)))?;

        let found = cart.item_for_product(1);

        assert_eq!(found.map(|entry| entry.product_size_id), Some(2));
        assert_eq!(cart.item_for_product(9), None);

        Ok(())
    }

    #[test]
    fn listeners_fire_once_per_mutation_including_no_ops() -> TestResult {
        let cart = store();
        let calls = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&calls);
        cart.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_item(item(1, 2, 1, dec!(10)))?;
        cart.remove_item(9, 9)?; // logical no-op still notifies
        cart.clear()?;

        assert_eq!(calls.load(Ordering::SeqCst), 3);

        Ok(())
    }

    #[test]
    fn unsubscribed_listener_stops_receiving_notifications() -> TestResult {
        let cart = store();
        let calls = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&calls);
        let key = cart.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_item(item(1, 2, 1, dec!(10)))?;
        cart.unsubscribe(key);
        cart.add_item(item(1, 2, 1, dec!(10)))?;

        assert_eq!(calls.load(Ordering::SeqCst), 1);

        Ok(())
    }

    #[test]
    fn listener_may_unsubscribe_itself_without_disturbing_the_pass() -> TestResult {
        let cart = Arc::new(store());
        let first_calls = Arc::new(AtomicU32::new(0));
        let second_calls = Arc::new(AtomicU32::new(0));

        let self_key: Arc<Mutex<Option<ListenerKey>>> = Arc::new(Mutex::new(None));

        let store_for_listener = Arc::clone(&cart);
        let key_cell = Arc::clone(&self_key);
        let first_counter = Arc::clone(&first_calls);

        let key = cart.subscribe(move || {
            first_counter.fetch_add(1, Ordering::SeqCst);

            if let Some(key) = key_cell.lock().unwrap().take() {
                store_for_listener.unsubscribe(key);
            }
        });

        *self_key.lock().unwrap() = Some(key);

        let second_counter = Arc::clone(&second_calls);
        cart.subscribe(move || {
            second_counter.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_item(item(1, 2, 1, dec!(10)))?;

        // Both listeners saw the pass in which the first removed itself.
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);

        cart.add_item(item(1, 2, 1, dec!(10)))?;

        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 2);

        Ok(())
    }

    #[test]
    fn corrupt_slot_reads_as_empty_cart() -> TestResult {
        let storage = Arc::new(MemoryStorage::new());

        storage.write(CART_STORAGE_KEY, "{ not a cart")?;

        let cart = CartStore::new(storage);

        assert!(cart.all_items().is_empty());
        assert_eq!(cart.total_items(), 0);

        Ok(())
    }

    #[test]
    fn cart_persists_across_store_instances() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("allora").join("cart.json");

        {
            let cart = CartStore::new(Arc::new(crate::cart::storage::FileStorage::new(&path)));

            cart.add_item(item(1, 2, 2, dec!(20.00)))?;
        }

        let reopened = CartStore::new(Arc::new(crate::cart::storage::FileStorage::new(&path)));

        assert_eq!(reopened.total_items(), 2);
        assert_eq!(reopened.total_price(), dec!(40.00));

        Ok(())
    }
}
