//! HTTP handlers

pub mod health;
pub mod members;

pub use health::hello;
