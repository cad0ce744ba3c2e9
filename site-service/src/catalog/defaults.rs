//! Built-in content served whenever the store has nothing to offer.

use crate::models::{Service, TeamMember, Testimonial};
use once_cell::sync::Lazy;

const LINKEDIN: &str = "https://www.linkedin.com/";

fn service(key: &str, title: &str, subtitle: &str, description: &str, icon: &str) -> Service {
    Service {
        key: key.to_string(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        description: description.to_string(),
        icon: Some(icon.to_string()),
    }
}

fn team_member(name: &str, role: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        photo: None,
        linkedin: Some(LINKEDIN.to_string()),
        twitter: None,
    }
}

fn testimonial(author: &str, role: &str, company: &str, quote: &str) -> Testimonial {
    Testimonial {
        author: author.to_string(),
        role: Some(role.to_string()),
        company: Some(company.to_string()),
        quote: quote.to_string(),
        logo: None,
    }
}

pub static DEFAULT_SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        service(
            "corporate-benefits",
            "Corporate Benefits Packages",
            "Custom plans for every team",
            "Design comprehensive, scalable health plans for organizations of any size, optimized for cost, coverage, and employee satisfaction.",
            "Building",
        ),
        service(
            "wellness-programs",
            "Employee Wellness Programs",
            "Holistic wellbeing at work",
            "From fitness and nutrition to mental health, empower your workforce with programs that measurably improve wellbeing.",
            "HeartPulse",
        ),
        service(
            "telemedicine",
            "Telemedicine & Digital Health",
            "Care, anywhere",
            "Remote consultations, virtual primary care, and digital tools that bring healthcare to your people wherever they are.",
            "Smartphone",
        ),
        service(
            "claims-management",
            "Insurance & Claims Management",
            "End-to-end support",
            "Streamlined administration for benefits, eligibility, and claims — with transparency and compliance built-in.",
            "ShieldCheck",
        ),
    ]
});

pub static DEFAULT_TEAM: Lazy<Vec<TeamMember>> = Lazy::new(|| {
    vec![
        team_member(
            "Ava Thompson, MPH",
            "Chief Executive Officer",
            "Leader in value-based care and benefits innovation with 15+ years building equitable health ecosystems.",
        ),
        team_member(
            "Daniel Kim, FSA",
            "Chief Actuary",
            "Actuarial strategist focused on cost containment and data-driven plan design for modern workforces.",
        ),
        team_member(
            "Priya Nair, RN MSN",
            "VP, Clinical Programs",
            "Nurse leader bringing human-centered care pathways to digital-first populations.",
        ),
        team_member(
            "Miguel Alvarez",
            "Director, Digital Health",
            "Builder of telehealth and engagement platforms connecting patients to the right care at the right time.",
        ),
    ]
});

pub static DEFAULT_TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    vec![
        testimonial(
            "Lena M.",
            "VP People",
            "Atlas Robotics",
            "Their benefits redesign cut our costs by 12% while boosting engagement — the best decision we made this year.",
        ),
        testimonial(
            "Craig P.",
            "Head of Total Rewards",
            "Northwind Logistics",
            "Implementation was seamless and our employees love the telehealth access and mental health support.",
        ),
        testimonial(
            "Dr. Sofia R.",
            "Medical Director",
            "CareWorks Clinic",
            "Thoughtful, data-driven partners who truly understand the clinical and financial sides of health benefits.",
        ),
    ]
});
