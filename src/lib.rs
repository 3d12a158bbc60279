//! # Gift Box Assistant
//!
//! Helps design a gift box: derives the cut list for the chosen shape (with a
//! fixed lid clearance), and builds search links to image and tutorial sites
//! for dielines matching the selected criteria.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Value entities and the injected catalog tables
//! - **Application Layer** ([`application`]) - Geometry, query and plan services
//! - **Infrastructure Layer** ([`infrastructure`]) - Catalog file loading
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered planner page
//!
//! The geometry and query services are pure: they never perform I/O and
//! never fail. Navigation to a generated URL is left to the caller (a browser
//! link, an HTTP redirect, or the `giftbox` CLI output).
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on the default address
//! cargo run
//!
//! # Print the cut list and search links for a cube with a separate lid
//! cargo run --bin giftbox -- plan --shape cube --side 80 --criteria lid_base
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BoxPlan, GeometryService, LID_CLEARANCE_MM, PlanService, QueryService, ReferenceLink,
        SearchQuery,
    };
    pub use crate::domain::Catalog;
    pub use crate::domain::entities::{
        CutDimension, DimensionField, DimensionSet, GiftForm, SelectedCriteria, ShapeKind,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
