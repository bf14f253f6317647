//! Core components of the `av-align` pipeline.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type.
//! - The [`PipelineConfig`] context threaded through every component.
//! - Internal networking and deduplication helpers.

/// The main client (`AvClient`), builder, and endpoint defaults.
pub mod client;
/// The explicit pipeline configuration (`PipelineConfig`).
pub mod config;
/// The primary error type (`AvError`) for the crate.
pub mod error;

pub(crate) mod dedup;
pub(crate) mod net;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use config::PipelineConfig;
pub use error::AvError;
