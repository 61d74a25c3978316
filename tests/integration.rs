//! Integration tests for StayScout.
//!
//! These tests exercise the core modules together: seeding the filter
//! draft, encoding and decoding query mappings, and the submission flow
//! against the in-app router.

mod constants_validation;
mod error_types;
mod query_roundtrip;
mod submit_flow;
