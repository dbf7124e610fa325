use std::collections::HashMap;

use prodcat_core::Entity;

/// Insertion-ordered entity storage behind the registry.
///
/// This is the seam where a remote or persistent backend would sit; the
/// registry and the derived views only see this interface.
pub trait EntityStore<E: Entity> {
    fn get(&self, id: E::Id) -> Option<&E>;
    fn get_mut(&mut self, id: E::Id) -> Option<&mut E>;
    /// Append a record. Returns `false` (and stores nothing) if the id is taken.
    fn insert(&mut self, entity: E) -> bool;
    fn remove(&mut self, id: E::Id) -> Option<E>;
    /// All records, in insertion order.
    fn list(&self) -> &[E];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn contains(&self, id: E::Id) -> bool {
        self.get(id).is_some()
    }
}

/// In-memory store: a vector for order plus a position index for lookups.
#[derive(Debug, Clone)]
pub struct InMemoryEntityStore<E: Entity> {
    records: Vec<E>,
    positions: HashMap<E::Id, usize>,
}

impl<E: Entity> InMemoryEntityStore<E> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, record) in self.records.iter().enumerate().skip(start) {
            self.positions.insert(record.id(), pos);
        }
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for InMemoryEntityStore<E> {
    fn get(&self, id: E::Id) -> Option<&E> {
        self.positions.get(&id).map(|&pos| &self.records[pos])
    }

    fn get_mut(&mut self, id: E::Id) -> Option<&mut E> {
        let pos = *self.positions.get(&id)?;
        self.records.get_mut(pos)
    }

    fn insert(&mut self, entity: E) -> bool {
        let id = entity.id();
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.records.len());
        self.records.push(entity);
        true
    }

    fn remove(&mut self, id: E::Id) -> Option<E> {
        let pos = self.positions.remove(&id)?;
        let removed = self.records.remove(pos);
        self.reindex_from(pos);
        Some(removed)
    }

    fn list(&self) -> &[E] {
        &self.records
    }
}
