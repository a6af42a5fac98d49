//! Multivariate descent solvers.
//!
//! Every solver follows the same skeleton: evaluate the gradient, stop if its
//! norm is below `tolerance`, otherwise pick a direction, choose a step along
//! it, update the point and any solver-specific state, and repeat.
//!
//! # Solvers
//!
//! - [`dfp`] — quasi-Newton with a rank-2 update of the inverse Hessian
//! - [`bfgs`] — quasi-Newton with a rank-2 update of the Hessian itself
//! - [`fletcher_reeves`] — nonlinear conjugate gradient
//! - [`momentum`] — gradient descent on an exponential moving average of the gradient
//! - [`rmsprop`] — gradient descent normalized by a moving average of squared gradients
//!
//! The quasi-Newton and conjugate-gradient solvers choose their step by
//! bisecting on the directional derivative over `[0, 1]`.
//!
//! # Iteration counts
//!
//! [`dfp`] and [`bfgs`] count updates, so a converged start reports zero
//! iterations. The other solvers count the convergence check itself, so a
//! converged start reports one. With `max_iters = Some(m)` no solver performs
//! more than `m` updates. Convergence is checked before the limit, so a
//! converged point is never reported as [`Status::MaxIters`].
//!
//! # Numerical failure
//!
//! The rank-2 updates divide by curvature inner products. If one of those is
//! not strictly positive, the solver stops with
//! [`Error::CurvatureBreakdown`] instead of producing a corrupted matrix. A
//! point or gradient that becomes NaN or infinite stops the solver with
//! [`Error::NonFiniteIterate`].

mod action;
mod config;
mod curvature;
mod error;
mod event;
mod eval;
mod solution;

pub mod bfgs;
pub mod dfp;
pub mod fletcher_reeves;
pub mod momentum;
pub mod rmsprop;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

/// A square curvature matrix: the inverse-Hessian approximation for [`dfp`]
/// and the Hessian approximation for [`bfgs`].
pub type Matrix<const N: usize> = nalgebra::SMatrix<f64, N, N>;
