//! Web layer for the browser-based planner.
//!
//! Renders the planner form with its cut lists and reference links.
//! Uses Askama templates for server-side rendering; no client-side script is
//! required.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Web route configuration

pub mod handlers;
pub mod routes;
