use super::store::{DocumentStore, StoreError, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime, Document};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local document store. Used for local runs without MongoDB and as
/// the store behind the test harness.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load curated records as-is, without stamping ids or timestamps.
    pub async fn seed(&self, collection: &str, records: impl IntoIterator<Item = Document>) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, collection: &str, mut record: Document) -> Result<Document, StoreError> {
        let now = BsonDateTime::now();
        record.insert(ID_FIELD, ObjectId::new());
        record.insert(CREATED_AT_FIELD, now);
        record.insert(UPDATED_AT_FIELD, now);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(records) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // Mongo treats a non-positive limit as "no limit".
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .unwrap_or(usize::MAX);

        Ok(records
            .iter()
            .filter(|record| matches(record, &filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
