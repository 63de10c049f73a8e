// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Prabogo App
//!
//! Minimal HTTP service with a health check and a home endpoint.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `app`: listener binding and serving
//! - `config`: configuration management
//! - `error`: error types

mod api;
mod app;
mod config;
mod error;

/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP router and the fixed response bodies it serves
pub use api::create_router;
pub use api::handlers::{HEALTH_BODY, HEALTH_PREFIX, HOME_BODY};

/// Bound server
pub use app::App;
