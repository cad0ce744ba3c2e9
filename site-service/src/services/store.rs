//! Document store boundary.
//!
//! Handlers and the catalog only see [`DocumentStore`]; MongoDB and the
//! in-memory store are interchangeable behind it.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use service_core::error::AppError;
use thiserror::Error;

/// Field holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";
/// Field holding the store-assigned creation timestamp.
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Malformed record: {0}")]
    Decode(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `record` in `collection`. The store stamps `_id`,
    /// `created_at` and `updated_at`; the stored document is returned.
    async fn insert(&self, collection: &str, record: Document) -> Result<Document, StoreError>;

    /// Return at most `limit` records matching `filter`, in the store's
    /// natural order.
    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Connectivity check.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// String form of a store identifier.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn object_ids_render_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
    }

    #[test]
    fn string_ids_are_kept_verbatim() {
        assert_eq!(id_to_string(&Bson::String("abc".into())), "abc");
    }
}
