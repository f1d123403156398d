//! Member Types - Pure type definitions for the member service
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, shared between the server and any future clients.

pub mod member;

pub use member::*;
