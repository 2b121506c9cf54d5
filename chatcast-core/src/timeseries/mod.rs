//! Time-series utilities for the chatcast workflow.
//!
//! Modules include:
//! - `calendar`: generate the complete 15-minute business-day grid for a span
//! - `prepare`: align raw observations onto the grid, impute gaps, and apply
//!   the log transform

/// Business-day calendar grid generation.
pub mod calendar;
/// Series preparation: CSV ingestion, grid alignment, imputation, transform.
pub mod prepare;
