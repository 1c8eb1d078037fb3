//! AWS-oriented adapters and handlers for the dynamic page functions.
//!
//! Handler logic is written against the `ParameterStore` and `PageStore`
//! seams so it runs without AWS in tests; the binaries wire in the SSM and
//! S3 implementations.

pub mod adapters;
pub mod handlers;
pub mod telemetry;
