//! filmscope-rs: headless cross-filtering engine for tabular film data.
//!
//! This crate provides a Rust-idiomatic core for two linked views over one
//! dataset: a static scatter with hover detail and an interactive dashboard
//! (metric selector, director filter, year range, brush selection, result
//! table). Drawing is delegated to pluggable [`render::Renderer`] backends;
//! everything else is deterministic and testable without a display surface.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DashboardEngine, DashboardEvent};
pub use error::{FilmscopeError, FilmscopeResult};
