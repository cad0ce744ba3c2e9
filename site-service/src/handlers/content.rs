//! Content reads. These always answer 200; see [`crate::catalog`].

use axum::{extract::State, Json};

use crate::models::{Service, TeamMember, Testimonial};
use crate::startup::AppState;

pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.catalog.services().await)
}

pub async fn list_team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.catalog.team().await)
}

pub async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.catalog.testimonials().await)
}
