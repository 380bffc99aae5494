pub mod auth;
pub mod chart;
