//! # Favorites
//!
//! Local favorited-product set with an optimistic toggle:
//!
//! 1. [`FavoriteSet::begin_toggle`] flips the flag immediately and returns a
//!    [`PendingToggle`] remembering the pre-click value.
//! 2. The caller issues `POST /products/{id}/favorite`.
//! 3. On success, [`FavoriteSet::confirm`] applies the server's boolean.
//!    On failure, [`FavoriteSet::revert`] restores the pre-click value.
//!
//! Rapid repeated toggles are not queued or coalesced; each one carries its
//! own pre-click snapshot.

use std::collections::HashSet;

use shared::Product;

/// Optimistic flip awaiting the server's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a pending toggle must be confirmed or reverted"]
pub struct PendingToggle {
    pub product_id: i64,
    /// Favorited state before the click
    pub previous: bool,
}

impl PendingToggle {
    /// State shown to the user while the request is in flight.
    pub fn optimistic(&self) -> bool {
        !self.previous
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<i64>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with the `is_favorite` flags of a product listing.
    pub fn seed<'a>(&mut self, products: impl IntoIterator<Item = &'a Product>) {
        self.ids = products
            .into_iter()
            .filter(|product| product.is_favorite)
            .map(|product| product.id)
            .collect();
    }

    /// Take one product's flag (details page) without touching the others.
    pub fn sync_product(&mut self, product: &Product) {
        self.set(product.id, product.is_favorite);
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flip the flag locally and remember the previous value.
    pub fn begin_toggle(&mut self, product_id: i64) -> PendingToggle {
        let previous = self.contains(product_id);
        self.set(product_id, !previous);
        PendingToggle {
            product_id,
            previous,
        }
    }

    /// Reconcile with the server's authoritative value.
    pub fn confirm(&mut self, pending: PendingToggle, is_favorite: bool) {
        if is_favorite != pending.optimistic() {
            tracing::debug!(
                product_id = pending.product_id,
                is_favorite,
                "Server favorite state differs from optimistic flip"
            );
        }
        self.set(pending.product_id, is_favorite);
    }

    /// Restore the pre-click value after a failed request.
    pub fn revert(&mut self, pending: PendingToggle) {
        self.set(pending.product_id, pending.previous);
    }

    fn set(&mut self, product_id: i64, favorite: bool) {
        if favorite {
            self.ids.insert(product_id);
        } else {
            self.ids.remove(&product_id);
        }
    }
}
