//! DTOs for search link endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};
use validator::Validate;

use crate::domain::entities::ShapeKind;

/// Request to build a search query for a single platform.
///
/// Unknown criterion ids are ignored; an unknown platform yields `url: null`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    pub shape: ShapeKind,

    #[serde(default)]
    #[validate(length(max = 32))]
    pub criteria: Vec<String>,

    #[validate(length(min = 1, max = 64))]
    pub platform: String,
}

/// Built query and destination.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub platform: String,
    pub query: String,

    /// `null` when the platform has no URL template; do not navigate.
    pub url: Option<String>,
}

/// Query string of `GET /go/{platform}`.
///
/// `criteria` is a comma-separated list: `?shape=cube&criteria=lid_base,eco`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ReferenceParams {
    #[serde(default)]
    pub shape: ShapeKind,

    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(default)]
    #[validate(length(max = 32))]
    pub criteria: Vec<String>,
}
