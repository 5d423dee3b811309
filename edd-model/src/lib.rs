//! Probability tables and snapshot assembly for delivery-date estimates.
//!
//! This crate turns a cohort's population-level weekly delivery weights
//! into forward-looking weekly and daily probability tables, renormalized
//! against a moving analysis date.

pub mod daily;
pub mod digest;
pub mod snapshot;
pub mod week;
pub mod weekly;
