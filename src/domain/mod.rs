//! Domain records and search predicates of the trademark registry.

pub mod filter;
pub mod search;
pub mod trademark;
pub mod types;
