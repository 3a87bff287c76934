//! Typemark Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout typemark:
//! - Labels and the loosely-typed inputs they are built from
//! - Enforcement modes (strict and relaxed) and how they are selected
//! - The error taxonomy shared by the registry and the factory

pub mod label;
pub mod mode;
pub mod error;

pub use label::*;
pub use mode::*;
pub use error::*;
