//! Configuration for the rating calculator
//!
//! The free functions in [`crate::rating`] take their parameters per call;
//! this module only bundles the defaults a host application wants to keep
//! in one place, loadable from TOML. It is read by
//! [`crate::rating::EloRatingCalculator`] alone; no free function consults it.

pub mod rating;

// Re-export commonly used types
pub use rating::RatingConfig;
