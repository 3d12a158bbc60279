//! HTML template rendering handlers for the planner page.

mod planner;

pub use planner::planner_handler;
