use mongodb::bson::{Bson, DateTime};
use serde::{Deserialize, Serialize};

pub const CONTACT_COLLECTION: &str = "contact";

/// A validated submission, ready to hand to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
}

/// A submission as persisted, including the store-assigned fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
    #[serde(default)]
    pub preferred_time: Option<String>,
    pub created_at: DateTime,
}
