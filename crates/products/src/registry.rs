//! Registry store: the authoritative, insertion-ordered product collection.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use prodcat_core::{DomainError, DomainResult, IdSequence};

use crate::product::{Product, ProductId, ProductInput, ProductPatch};
use crate::store::{EntityStore, InMemoryEntityStore};

/// Source of creation timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Owns every product record; consumers only get shared borrows or clones.
///
/// Ids come from a monotonic [`IdSequence`], never from the clock, so rapid
/// successive creates cannot collide.
#[derive(Debug)]
pub struct ProductRegistry<S = InMemoryEntityStore<Product>>
where
    S: EntityStore<Product>,
{
    store: S,
    ids: IdSequence,
    clock: Clock,
    version: u64,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::from_parts(InMemoryEntityStore::new(), IdSequence::default())
    }

    /// Build a registry from an initial dataset (e.g. the seed source).
    ///
    /// Records keep their ids and timestamps; the id sequence is advanced past
    /// the largest one. Duplicate ids and `u64::MAX` are rejected.
    pub fn seeded(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut registry = Self::new();
        for product in products {
            let id = product.id_typed();
            if !registry.store.insert(product) {
                return Err(DomainError::conflict(format!("duplicate product id {id}")));
            }
            registry.ids.observe(id.get())?;
        }
        info!(products = registry.store.len(), "registry seeded");
        Ok(registry)
    }
}

impl Default for ProductRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ProductRegistry<S>
where
    S: EntityStore<Product>,
{
    /// Wrap an existing store. Ids already present are never re-issued.
    pub fn with_store(store: S) -> DomainResult<Self> {
        let mut ids = IdSequence::default();
        for product in store.list() {
            ids.observe(product.id_typed().get())?;
        }
        Ok(Self::from_parts(store, ids))
    }

    fn from_parts(store: S, ids: IdSequence) -> Self {
        Self {
            store,
            ids,
            clock: Utc::now,
            version: 0,
        }
    }

    /// Replace the timestamp source (tests use a fixed clock).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Mutation counter; changes on every successful create/update/delete.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Full snapshot in insertion order.
    pub fn list(&self) -> &[Product] {
        self.store.list()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.store.get(id)
    }

    /// Store a new product and return it.
    ///
    /// Fails with `Conflict` when the id sequence is exhausted or the store
    /// refuses the record.
    pub fn create(&mut self, input: ProductInput) -> DomainResult<Product> {
        // Collision check on top of the sequence.
        let mut id = ProductId::new(self.ids.next_id()?);
        while self.store.contains(id) {
            id = ProductId::new(self.ids.next_id()?);
        }

        let product = Product::from_input(id, (self.clock)(), input);
        if !self.store.insert(product.clone()) {
            return Err(DomainError::conflict(format!("store rejected product id {id}")));
        }
        self.version += 1;
        debug!(product_id = %id, name = product.name(), "product created");
        Ok(product)
    }

    /// Merge `patch` into the product with `id`.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let product = self.store.get_mut(id).ok_or_else(DomainError::not_found)?;
        product.apply_patch(patch);
        let updated = product.clone();
        self.version += 1;
        debug!(product_id = %id, "product updated");
        Ok(updated)
    }

    /// Remove the product with `id`; `false` if there was none.
    pub fn delete(&mut self, id: ProductId) -> bool {
        match self.store.remove(id) {
            Some(_) => {
                self.version += 1;
                debug!(product_id = %id, "product deleted");
                true
            }
            None => {
                debug!(product_id = %id, "delete ignored, no such product");
                false
            }
        }
    }
}
