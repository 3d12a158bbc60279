//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod catalog;
pub mod cut_list;
pub mod health;
pub mod plan;
pub mod redirect;
pub mod search;

pub use catalog::catalog_handler;
pub use cut_list::cut_list_handler;
pub use health::health_handler;
pub use plan::plan_handler;
pub use redirect::reference_redirect_handler;
pub use search::search_handler;
