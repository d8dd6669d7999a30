//! Core library for the `httpfs-bench` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, the unbiased content generator, the
//! sequential upload/download driver, and latency reporting. The primary
//! user-facing interface is the `httpfs-bench` command-line application.
pub mod args;
pub mod bench;
pub mod config;
pub mod content;
pub mod error;
pub mod metrics;
