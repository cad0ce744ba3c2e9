pub mod contact;
pub mod content;

pub use contact::{ContactRecord, NewContact, CONTACT_COLLECTION};
pub use content::{Service, TeamMember, Testimonial};
