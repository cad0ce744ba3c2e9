use super::defaults::{DEFAULT_SERVICES, DEFAULT_TEAM, DEFAULT_TESTIMONIALS};
use super::ContentKind;
use crate::models::{Service, TeamMember, Testimonial};
use mongodb::bson::Document;

/// String attribute of a record. Absent, null and non-string values all
/// read as `None`.
fn text(record: &Document, key: &str) -> Option<String> {
    record.get_str(key).ok().map(str::to_string)
}

fn text_or(record: &Document, key: &str, default: &str) -> String {
    text(record, key).unwrap_or_else(|| default.to_string())
}

impl ContentKind for Service {
    const COLLECTION: &'static str = "service";

    fn defaults() -> &'static [Self] {
        &DEFAULT_SERVICES
    }

    fn from_record(record: &Document) -> Self {
        Service {
            key: text_or(record, "key", "service"),
            title: text_or(record, "title", "Service"),
            subtitle: text(record, "subtitle"),
            description: text_or(record, "description", ""),
            icon: text(record, "icon"),
        }
    }
}

impl ContentKind for TeamMember {
    const COLLECTION: &'static str = "teammember";

    fn defaults() -> &'static [Self] {
        &DEFAULT_TEAM
    }

    fn from_record(record: &Document) -> Self {
        TeamMember {
            name: text_or(record, "name", ""),
            role: text_or(record, "role", ""),
            bio: text_or(record, "bio", ""),
            photo: text(record, "photo"),
            linkedin: text(record, "linkedin"),
            twitter: text(record, "twitter"),
        }
    }
}

impl ContentKind for Testimonial {
    const COLLECTION: &'static str = "testimonial";

    fn defaults() -> &'static [Self] {
        &DEFAULT_TESTIMONIALS
    }

    fn from_record(record: &Document) -> Self {
        Testimonial {
            author: text_or(record, "author", ""),
            role: text(record, "role"),
            company: text(record, "company"),
            quote: text_or(record, "quote", ""),
            logo: text(record, "logo"),
        }
    }
}
