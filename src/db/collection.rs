use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::error::StoreError;

/// A record kept in a [`Collection`]. The collection owns the id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular name used in not-found messages.
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

struct Inner<T> {
    next_id: u64,
    records: BTreeMap<u64, T>,
}

/// Ordered in-memory collection. Ids come from a counter that only moves
/// forward, so key order is insertion order.
pub struct Collection<T> {
    inner: RwLock<Inner<T>>,
}

// Canonical decimal only, so "01" or "+1" never alias record "1".
fn parse_key(id: &str) -> Option<u64> {
    id.parse::<u64>().ok().filter(|key| key.to_string() == id)
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let mut inner = Inner {
            next_id: 1,
            records: BTreeMap::new(),
        };
        for mut record in records {
            let key = inner.next_id;
            inner.next_id += 1;
            record.set_id(key.to_string());
            inner.records.insert(key, record);
        }
        Collection {
            inner: RwLock::new(inner),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Result<T, StoreError> {
        let inner = self.inner.read().await;
        parse_key(id)
            .and_then(|key| inner.records.get(&key))
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    pub async fn create(&self, mut record: T) -> T {
        let mut inner = self.inner.write().await;
        let key = inner.next_id;
        inner.next_id += 1;
        record.set_id(key.to_string());
        inner.records.insert(key, record.clone());
        record
    }

    /// Replaces the whole record, keeping the stored id.
    pub async fn update(&self, id: &str, record: T) -> Result<T, StoreError> {
        self.modify(id, move |slot| {
            let id = slot.id().map(str::to_owned);
            *slot = record;
            if let Some(id) = id {
                slot.set_id(id);
            }
        })
        .await
    }

    /// Applies `f` to the record in place and returns the result.
    pub async fn modify<F>(&self, id: &str, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write().await;
        let slot = parse_key(id)
            .and_then(|key| inner.records.get_mut(&key))
            .ok_or_else(|| not_found::<T>(id))?;
        f(slot);
        Ok(slot.clone())
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<T: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        collection: T::KIND,
        id: id.to_string(),
    }
}
