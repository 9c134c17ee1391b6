//! # u-covering
//!
//! Weighted set covering heuristics: select a minimum-cost set of items such
//! that every requirement is satisfied by at least one selected item.
//!
//! ## Modules
//!
//! - [`models`] — Incidence model (items, requirements, costs) and solution type
//! - [`constructive`] — GRASP construction and greedy repair
//! - [`local_search`] — Drop, one-for-one and two-for-one exchange neighborhoods
//! - [`runner`] — Multi-start GRASP driver with per-trial records
//! - [`config`] — Runner parameters
//! - [`error`] — Error type shared by all entry points

pub mod config;
pub mod constructive;
pub mod error;
pub mod local_search;
pub mod models;
pub mod runner;
