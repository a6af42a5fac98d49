//! Exact line searches over a bracketing interval.
//!
//! Each search narrows a bracket `[a0, b0]` assumed to contain a single local
//! minimizer of the objective, stopping once the bracket is narrower than the
//! configured tolerance and reporting its midpoint.
//!
//! # Searches
//!
//! - [`bisection`] — halves the bracket using the sign of the derivative
//! - [`golden_section`] — two probes at golden-ratio fractions, one reused per step
//! - [`fibonacci`] — probe fractions taken from a growing Fibonacci sequence
//! - [`dichotomous`] — two probes straddling the midpoint
//!
//! # Preconditions
//!
//! Unimodality is assumed, not checked. On a function with several minima in
//! the bracket a search may settle on any of them.
//!
//! # Observer Events
//!
//! Every search emits one [`Event`] per iteration, after the bracket has been
//! narrowed. A dichotomous iteration that ends in [`Status::Degenerate`] leaves
//! the bracket as it was and emits nothing. Observers can return
//! [`Action::StopEarly`] to halt immediately.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod search;
mod solution;

pub mod bisection;
pub mod dichotomous;
pub mod fibonacci;
pub mod golden_section;


pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
