//! RCA Tree: Topic Drill-Down Engine
//!
//! Builds an n-ary topic tree from a flat, depth-path-encoded grievance
//! feed and resolves drill-down navigation (descend, breadcrumb jump,
//! reset) into views for chart and record-list rendering.

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod path;
pub mod tooling;
pub mod tree;
pub mod types;
