//! Core domain modules for StayScout.
//!
//! Contains the filter state model, the query-parameter mapping, and the
//! in-app router. Everything here is pure and UI-free.

pub mod filter;
pub mod query;
pub mod router;
