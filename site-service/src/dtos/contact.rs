use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{ContactRecord, NewContact};
use crate::services::id_to_string;

/// Inbound lead. Required fields are optional here so that a missing field
/// is reported as a validation error naming it, not as a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 2, max = 120, message = "Name must be between 2 and 120 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: Option<String>,
    pub company: Option<String>,
    #[validate(
        required(message = "Message is required"),
        length(min = 5, max = 5000, message = "Message must be between 5 and 5000 characters")
    )]
    pub message: Option<String>,
    pub preferred_time: Option<String>,
}

impl ContactRequest {
    /// Check every constraint and produce the record to persist. Values are
    /// kept exactly as submitted.
    pub fn validated(self) -> Result<NewContact, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        if !errors.field_errors().contains_key("email") {
            if let Some(email) = &self.email {
                if let Err(e) = validate_email_domain(email) {
                    errors.add("email", e);
                }
            }
        }

        if !errors.field_errors().is_empty() {
            return Err(errors);
        }

        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) => Ok(NewContact {
                name,
                email,
                company: self.company,
                message,
                preferred_time: self.preferred_time,
            }),
            // `required` has already rejected any missing field.
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Rejects addresses the `email` rule lets through but that are not
/// deliverable on the public internet: dotless domains such as `a@localhost`
/// and bracketed IP literals.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map_or("", |(_, domain)| domain);

    let reject = |message: &'static str| {
        let mut error = ValidationError::new("email_domain");
        error.message = Some(message.into());
        Err(error)
    };

    if domain.starts_with('[') {
        return reject("Email domain must be a name, not an IP address literal");
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return reject("Email domain must contain a period");
    }
    Ok(())
}

/// Persisted submission as returned to the caller. `preferred_time` is
/// stored but not echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactRecord> for ContactResponse {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: id_to_string(&record.id),
            name: record.name,
            email: record.email,
            company: record.company,
            message: record.message,
            created_at: record.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn failing_fields(request: ContactRequest) -> Vec<String> {
        let errors = request.validated().expect_err("expected validation failure");
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn name_length_boundaries() {
        assert_eq!(failing_fields(request("J", "a@b.com", "Hello")), vec!["name"]);
        assert!(request("Jo", "a@b.com", "Hello").validated().is_ok());
        assert!(request(&"n".repeat(120), "a@b.com", "Hello").validated().is_ok());
        assert_eq!(
            failing_fields(request(&"n".repeat(121), "a@b.com", "Hello")),
            vec!["name"]
        );
    }

    #[test]
    fn message_length_boundaries() {
        assert_eq!(failing_fields(request("Jo", "a@b.com", "Hell")), vec!["message"]);
        assert!(request("Jo", "a@b.com", "Hello").validated().is_ok());
        assert!(request("Jo", "a@b.com", &"m".repeat(5000)).validated().is_ok());
        assert_eq!(
            failing_fields(request("Jo", "a@b.com", &"m".repeat(5001))),
            vec!["message"]
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 2 characters, 4 bytes.
        assert!(request("Zé", "a@b.com", "Hello").validated().is_ok());
    }

    #[test]
    fn email_syntax_is_checked() {
        assert_eq!(failing_fields(request("Jo", "not-an-email", "Hello")), vec!["email"]);
        assert!(request("Jo", "a@b.com", "Hello").validated().is_ok());
    }

    #[test]
    fn email_domain_needs_a_period_and_a_name() {
        for email in ["a@b", "a@localhost", "a@[127.0.0.1]", "a@b.", "a@.com"] {
            assert_eq!(
                failing_fields(request("Jo", email, "Hello")),
                vec!["email"],
                "{} should be rejected",
                email
            );
        }
        for email in ["a@b.com", "jo@x.com", "first.last@mail.example.org"] {
            assert!(request("Jo", email, "Hello").validated().is_ok(), "{} should be accepted", email);
        }
    }

    #[test]
    fn domain_errors_are_not_reported_twice() {
        let errors = request("Jo", "not-an-email", "Hello").validated().unwrap_err();
        assert_eq!(errors.field_errors()["email"].len(), 1);
    }

    #[test]
    fn missing_and_empty_required_fields_are_all_reported() {
        assert_eq!(
            failing_fields(ContactRequest::default()),
            vec!["email", "message", "name"]
        );
        assert_eq!(
            failing_fields(request("", "", "")),
            vec!["email", "message", "name"]
        );
    }

    #[test]
    fn accepted_values_are_kept_verbatim() {
        let contact = ContactRequest {
            name: Some("  Jo  ".to_string()),
            email: Some("Jo@X.com".to_string()),
            company: Some("Acme".to_string()),
            message: Some("Hello there".to_string()),
            preferred_time: None,
        }
        .validated()
        .unwrap();

        assert_eq!(contact.name, "  Jo  ");
        assert_eq!(contact.email, "Jo@X.com");
        assert_eq!(contact.company.as_deref(), Some("Acme"));
        assert_eq!(contact.preferred_time, None);
    }
}
