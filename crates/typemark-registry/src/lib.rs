//! Typemark Registry - Shared label bookkeeping
//!
//! This crate implements the label registry:
//! - Cross-call duplicate detection
//! - Atomic check-then-insert registration batches
//! - The process-wide registry instance and its reset

pub mod registry;

pub use registry::*;
