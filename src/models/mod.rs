//! Database models for the trademark registry.

#[cfg(feature = "server")]
pub mod config;
pub mod trademark;
