pub mod cohort;
pub mod dataset;
