//! Inexact line searches: step-acceptance rules.
//!
//! Given the restriction `φ(a) = f(x + a·d)` of an objective along a descent
//! direction `d`, these searches start from a trial step and repeatedly scale
//! it up or down until the step satisfies an acceptance test. They do not
//! locate the minimizer of `φ`; they only find a step that decreases the
//! objective by a reasonable amount.
//!
//! # Sign convention
//!
//! `d` is already the negated gradient (or some other descent direction), so
//! the origin slope `g0 = φ'(0)` is negative. Both bounds used by the tests
//! below, `ρ·g0·a` and `(1 − ρ)·g0·a`, are therefore negative decreases, with
//! `(1 − ρ)·g0·a` the more demanding of the two.
//!
//! # Rules
//!
//! - [`goldstein`] — accepts when `(1 − ρ)·g0·a ≤ φ(a) − φ(0) ≤ ρ·g0·a`
//! - [`wolfe_powell`] — accepts when `φ(a) − φ(0) ≤ ρ·g0·a` and `φ'(a) ≥ σ·g0`
//!
//! A step that decreases too little is contracted; one that is too timid is
//! expanded. Neither rule bounds its own iteration count, so a direction that
//! is not a descent direction can loop until `max_iters` is reached.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;

pub mod goldstein;
pub mod wolfe_powell;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
