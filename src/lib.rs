//! Hourcast library
//!
//! Resolves a free-text place name to coordinates, fetches the hourly
//! forecast for them, and derives a current-conditions snapshot plus the
//! full hourly series for presentation consumers.

pub mod app;
pub mod cli;
pub mod data;
