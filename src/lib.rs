//! Submarine - Release-title parsing service
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod server;
