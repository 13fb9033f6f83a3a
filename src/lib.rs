//! Attendance metrics engine for punch-based time tracking.
//!
//! This crate turns a raw punch-in/punch-out timestamp pair plus an employee
//! work schedule into structured attendance metrics (total worked time,
//! regular hours, overtime, night differential, lateness, undertime), and
//! reduces collections of those metrics into daily and weekly aggregates.
//!
//! The engine owns no state: every calculation is a pure function of its
//! arguments, so recomputation and retries are always safe. Storage,
//! identity, and the one-open-punch-per-employee rule belong to the
//! surrounding persistence layer; the engine assumes its inputs respect
//! them and never enforces them itself.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
