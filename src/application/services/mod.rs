//! Business logic services for the application layer.

pub mod geometry_service;
pub mod plan_service;
pub mod query_service;

pub use geometry_service::{GeometryService, LID_CLEARANCE_MM};
pub use plan_service::{BoxPlan, PlanService};
pub use query_service::{QueryService, ReferenceLink, SearchQuery};
