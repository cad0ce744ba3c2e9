use mongodb::bson;
use service_core::error::AppError;
use std::sync::Arc;

use super::metrics::record_contact_submission;
use super::store::{id_to_string, DocumentStore, StoreError};
use crate::dtos::{ContactRequest, ContactResponse};
use crate::models::{ContactRecord, CONTACT_COLLECTION};

/// Validates and persists inbound leads.
///
/// Unlike content reads, a failed write is reported to the caller: a lead
/// must never be dropped silently.
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn DocumentStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<ContactResponse, AppError> {
        let contact = request.validated().map_err(|e| {
            record_contact_submission("invalid");
            AppError::from(e)
        })?;

        let record = bson::to_document(&contact)
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to encode contact: {}", e)))?;

        let stored = self
            .store
            .insert(CONTACT_COLLECTION, record)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to persist contact submission");
                record_contact_submission("store_error");
                AppError::from(e)
            })?;

        let stored: ContactRecord = bson::from_document(stored).map_err(|e| {
            tracing::error!(error = %e, "Store returned a malformed contact record");
            AppError::from(StoreError::Decode(e.to_string()))
        })?;

        tracing::info!(
            contact_id = %id_to_string(&stored.id),
            has_company = stored.company.is_some(),
            "Contact submission stored"
        );
        record_contact_submission("stored");

        Ok(ContactResponse::from(stored))
    }
}
