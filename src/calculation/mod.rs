//! Calculation logic for the pay calculation engine.
//!
//! This module contains the interval-intersection algorithm and the
//! per-week payment accumulation built on top of it.

mod intersection;
mod payment;

pub use intersection::intersect;
pub use payment::compute_payment;
