//! Marketing content with a fallback to built-in defaults.
//!
//! Every content kind is read the same way: ask the store for up to
//! [`CONTENT_QUERY_LIMIT`] records and map them, or serve the kind's default
//! set when the store is empty or fails. Reads never error and never return
//! an empty list.

mod defaults;
mod kinds;

pub use defaults::{DEFAULT_SERVICES, DEFAULT_TEAM, DEFAULT_TESTIMONIALS};

use crate::models::{Service, TeamMember, Testimonial};
use crate::services::{record_content_fallback, DocumentStore};
use mongodb::bson::Document;
use serde::Serialize;
use std::sync::Arc;

pub const CONTENT_QUERY_LIMIT: i64 = 100;

/// A content kind served through the catalog.
pub trait ContentKind: Serialize + Clone + Send + Sync + 'static {
    /// Store collection holding curated records of this kind.
    const COLLECTION: &'static str;

    /// Non-empty set returned when the store has nothing usable.
    fn defaults() -> &'static [Self];

    /// Map a stored record, filling missing fields with defaults and
    /// ignoring fields the kind doesn't have.
    fn from_record(record: &Document) -> Self;
}

#[derive(Clone)]
pub struct ContentCatalog {
    store: Arc<dyn DocumentStore>,
}

impl ContentCatalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list<K: ContentKind>(&self) -> Vec<K> {
        match self
            .store
            .query(K::COLLECTION, Document::new(), CONTENT_QUERY_LIMIT)
            .await
        {
            Ok(records) if !records.is_empty() => records.iter().map(K::from_record).collect(),
            Ok(_) => {
                tracing::debug!(kind = K::COLLECTION, "No curated content, serving defaults");
                record_content_fallback(K::COLLECTION, "empty");
                K::defaults().to_vec()
            }
            Err(e) => {
                tracing::warn!(
                    kind = K::COLLECTION,
                    error = %e,
                    "Content read failed, serving defaults"
                );
                record_content_fallback(K::COLLECTION, "store_error");
                K::defaults().to_vec()
            }
        }
    }

    pub async fn services(&self) -> Vec<Service> {
        self.list().await
    }

    pub async fn team(&self) -> Vec<TeamMember> {
        self.list().await
    }

    pub async fn testimonials(&self) -> Vec<Testimonial> {
        self.list().await
    }
}
