//! Telematics risk dashboard core.
//!
//! The view model behind a driver-behavior dashboard: it holds the current
//! [`domain::driver::DriverStats`] snapshot, mediates asynchronous risk score
//! requests against an external scoring service, and exposes the historical
//! score/premium series to whatever rendering layer hosts it.
//!
//! # Modules
//!
//! - [`domain`]: Driver stats, score request lifecycle, history, display models
//! - [`application`]: The [`application::risk_dashboard::RiskDashboard`] view
//!   model and the [`application::scoring_service::ScoringService`] port
//! - [`infrastructure`]: HTTP scoring adapter and configuration
//! - [`presentation`]: Terminal rendering for the demo shell

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
