//! Shared Fibonacci service domain primitives.
//!
//! This crate owns the request/response contract (input extraction and
//! validation rules) and the sequence generator. It intentionally excludes
//! AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod sequence;
