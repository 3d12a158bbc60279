//! Application layer services implementing the planner rules.
//!
//! Services receive the [`Catalog`](crate::domain::Catalog) at construction
//! and expose pure functions over form snapshots. HTTP handlers, the web page
//! and the CLI all go through these services.
//!
//! # Available Services
//!
//! - [`services::geometry_service::GeometryService`] - Cut lists and lid clearance
//! - [`services::query_service::QueryService`] - Search queries and destination URLs
//! - [`services::plan_service::PlanService`] - Full plan for a form snapshot

pub mod services;
