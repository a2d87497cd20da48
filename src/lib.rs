//! Core library for the `rangebench` CLI.
//!
//! This crate provides the building blocks used by the binary: config
//! loading, range planning, work distribution, instrumented request
//! execution, and per-request metrics records. The primary user-facing
//! interface is the `rangebench` command-line application; library APIs may
//! evolve with it.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod plan;
pub mod sinks;
pub mod work;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
