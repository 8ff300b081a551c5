//! AWS-oriented handler for the Fibonacci sequence service.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! API Gateway response envelope, and structured request logging) on top of
//! the contract and generator primitives in `fib_service_core`.

pub mod handlers;
