// Application layer - Use cases and ports
pub mod risk_dashboard;
pub mod scoring_service;
