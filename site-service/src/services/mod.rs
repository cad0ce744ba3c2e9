pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;
pub mod submissions;

pub use database::MongoStore;
pub use memory::InMemoryStore;
pub use self::metrics::{
    get_metrics, init_metrics, record_contact_submission, record_content_fallback,
};
pub use store::{id_to_string, DocumentStore, StoreError};
pub use submissions::SubmissionService;
