//! Domain model types for set covering problems.
//!
//! Provides the incidence structure between items and requirements and the
//! solution type the heuristics build and refine.

mod incidence;
mod solution;

pub use incidence::Incidence;
pub use solution::Solution;
