//! Lock-guarded repository handle for multi-writer use.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entity::InventoryEntity;
use crate::error::InventoryResult;
use crate::id::{ItemId, Quantity};
use crate::repository::Repository;

/// Cloneable, thread-safe handle to one category's [`Repository`].
///
/// Each category gets its own lock. Writers hold the write lock for the whole
/// check-then-mutate step; readers share the read lock and receive clones, so
/// no lock is held once a method returns.
#[derive(Debug)]
pub struct SharedRepository<T> {
    inner: Arc<RwLock<Repository<T>>>,
}

impl<T> Clone for SharedRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedRepository<T> {
    pub fn new() -> Self {
        Self::from_repository(Repository::new())
    }

    pub fn from_repository(repository: Repository<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repository)),
        }
    }

    // Repository operations are all-or-nothing: a poisoned lock still guards a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, Repository<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Repository<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<T: InventoryEntity + Clone> SharedRepository<T> {
    pub fn add(&self, item: T) -> InventoryResult<()> {
        self.write().add(item)
    }

    pub fn get_by_id(&self, id: ItemId) -> InventoryResult<T> {
        self.read().get_by_id(id).cloned()
    }

    pub fn remove(&self, id: ItemId) -> InventoryResult<T> {
        self.write().remove(id)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.read().iter().cloned().collect()
    }

    pub fn update_quantity(&self, id: ItemId, new_quantity: i64) -> InventoryResult<()> {
        self.write().update_quantity(id, new_quantity)
    }

    /// Read-modify-write of the stock level under a single write lock.
    ///
    /// Concurrent adjustments of the same item never lose updates. Returns the
    /// resulting quantity.
    pub fn adjust_quantity(&self, id: ItemId, delta: i64) -> InventoryResult<Quantity> {
        let mut repo = self.write();
        let requested = repo.get_by_id(id)?.quantity().offset(delta)?;
        repo.update_quantity(id, requested.get())?;
        Ok(requested)
    }
}
