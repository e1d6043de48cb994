//! Core data models for the pay calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod interval;
mod rate_table;
mod worked_week;

pub use employee::Employee;
pub use interval::{
    END_OF_DAY_MINUTES, IntervalEnd, RateInterval, TimeInterval, WorkedInterval,
    minutes_from_midnight,
};
pub use rate_table::RateTable;
pub use worked_week::WorkedWeek;
