use crate::models::CONTACT_COLLECTION;
use super::store::{DocumentStore, StoreError, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime, Document},
    options::{ClientOptions, FindOptions, IndexOptions},
    Client as MongoClient, Database, IndexModel,
};
use std::time::Duration;

/// MongoDB-backed document store.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Build a client for `uri`. The driver connects lazily, so an
    /// unreachable server surfaces on first use rather than here.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> Result<Self, StoreError> {
        tracing::info!(database = %database, "Configuring MongoDB client");

        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB URI: {}", e);
            StoreError::Unavailable(e.to_string())
        })?;
        options.app_name = Some("site-service".to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = MongoClient::with_options(options)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            db: client.database(database),
        })
    }

    pub async fn initialize_indexes(&self) -> Result<(), StoreError> {
        tracing::info!("Creating MongoDB indexes for site-service");

        let created_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_idx".to_string())
                    .build(),
            )
            .build();

        self.db
            .collection::<Document>(CONTACT_COLLECTION)
            .create_index(created_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create created_at index: {}", e);
                StoreError::Write(e.to_string())
            })?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, mut record: Document) -> Result<Document, StoreError> {
        let now = BsonDateTime::now();
        record.insert(CREATED_AT_FIELD, now);
        record.insert(UPDATED_AT_FIELD, now);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(&record, None)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        record.insert(ID_FIELD, result.inserted_id);
        Ok(record)
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::error!("MongoDB health check failed: {}", e);
            StoreError::Unavailable(e.to_string())
        })?;
        Ok(())
    }
}
