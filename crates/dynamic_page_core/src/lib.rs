//! Shared dynamic page primitives.
//!
//! This crate owns page rendering, configuration lookup, response contracts
//! and the handler error taxonomy. It excludes AWS SDK and Lambda runtime
//! concerns, which live in `dynamic_page_lambda`.

pub mod contract;
pub mod error;
pub mod render;
pub mod settings;
