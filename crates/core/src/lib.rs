//! Core traits and types for the descent solvers.
//!
//! This crate defines the shared abstractions that line searches and
//! multivariate solvers build on:
//!
//! - [`Objective`] — a differentiable scalar function of `N` variables
//! - [`FnObjective`], [`ScalarFn`] — closure adapters implementing [`Objective`]
//! - [`Restriction`] — the 1-D restriction of an objective along a direction
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`linalg`] — fixed-dimension vector primitives

pub mod linalg;

mod objective;
mod observer;

pub use objective::{FnObjective, Objective, Restriction, ScalarFn};
pub use observer::Observer;
