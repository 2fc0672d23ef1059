//! Payroll decomposition and demographic aggregation engine for HR analytics
//!
//! This crate turns per-period compensation records and workforce rosters into
//! payroll and demographic snapshots, decomposes payroll variation between two
//! snapshots into Price and Volume effects, and derives advisory alerts and
//! insights from the results.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
