use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory ordered store addressed by position.
///
/// Indices are not stable identifiers: removing index `i` shifts every later
/// element down by one. Every mutation performs its bounds check and its
/// write under the same guard.
#[derive(Clone)]
pub struct VecStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for VecStore<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T> VecStore<T>
where
    T: Clone + Send + Sync,
{
    /// Create a store seeded with `items` in the given order.
    pub fn new(items: Vec<T>) -> Self {
        Self { inner: Arc::new(RwLock::new(items)) }
    }

    /// Snapshot of all entries in storage order.
    pub async fn list(&self) -> Vec<T> {
        let items = self.inner.read().await;
        items.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Append at the end; returns the new length.
    pub async fn push(&self, value: T) -> usize {
        let mut items = self.inner.write().await;
        items.push(value);
        items.len()
    }

    /// Overwrite the entry at `index` wholesale.
    pub async fn replace(&self, index: usize, value: T) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        let len = items.len();
        let slot = items.get_mut(index).ok_or(ServiceError::out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Remove the entry at `index`, returning it.
    pub async fn remove(&self, index: usize) -> Result<T, ServiceError> {
        let mut items = self.inner.write().await;
        if index >= items.len() {
            return Err(ServiceError::out_of_range(index, items.len()));
        }
        Ok(items.remove(index))
    }
}
