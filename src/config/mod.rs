// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Prabogo service
//!
//! Loads the listen address from the environment (and an optional `.env` file).

use std::net::SocketAddr;

use crate::error::Result;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const BIND_HOST: &str = "0.0.0.0";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        Config { server_addr }
    }

    /// Parses the configured listen address.
    ///
    /// A bare `:PORT` binds every interface, so `:8080` means `0.0.0.0:8080`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = self.server_addr.trim();
        let addr = match addr.strip_prefix(':') {
            Some(port) => format!("{}:{}", defaults::BIND_HOST, port),
            None => addr.to_string(),
        };

        addr.parse::<SocketAddr>().map_err(|e| {
            tracing::error!("Invalid server address '{}': {}", self.server_addr, e);
            e.into()
        })
    }
}
