//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for request size limits. Dimension values are not range-checked.

pub mod catalog;
pub mod cut_list;
pub mod health;
pub mod plan;
pub mod search;
