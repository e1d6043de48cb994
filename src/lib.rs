//! Weekly pay calculation engine.
//!
//! This crate computes weekly pay for employees from two inputs: a file of
//! worked time intervals per employee per day, and a rate table mapping
//! day-of-week and time-of-day intervals to hourly rates. The core is the
//! time-interval intersection in [`calculation`]; parsing and printing
//! live behind the single-method traits in [`input`] and [`output`].

#![warn(missing_docs)]

pub mod calculation;
pub mod company;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
