//! Line searches and multivariate descent solvers.
//!
//! The crate is organized in three layers, each solver consuming an
//! [`Objective`](descent_core::Objective) supplied by the caller:
//!
//! - [`scalar`] — exact 1-D searches that narrow a bracket around a minimizer
//! - [`inexact`] — step-acceptance rules that scale a trial step until it is
//!   acceptable
//! - [`descent`] — multivariate solvers that pick a direction, run a 1-D
//!   search along it, and repeat until the gradient is small
//!
//! None of the solvers impose an iteration ceiling unless one is configured.

pub mod descent;
pub mod inexact;
pub mod scalar;
