//! Constructive heuristics for building feasible covers.
//!
//! - [`grasp_construct`] — Semi-greedy randomized construction (Feo & Resende, 1995)
//! - [`greedy_repair`] — Completes a partial selection with the same threshold rule

mod coverage;
mod grasp;
mod repair;

pub use grasp::grasp_construct;
pub use repair::greedy_repair;

pub(crate) use coverage::check_parameters;
