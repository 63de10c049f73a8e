// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Server lifecycle: bind the listener, then serve the router until it fails.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::api::create_router;
use crate::error::Result;

/// A bound HTTP server that has not started serving yet
pub struct App {
    listener: TcpListener,
    router: Router,
}

impl App {
    /// Builds the router and binds the listening socket.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let router = create_router();

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind address {}: {}", addr, e);
            e
        })?;

        Ok(App { listener, router })
    }

    /// Address the listener is actually bound to (resolves port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until the listener fails.
    ///
    /// Each connection is handled on its own task by `axum::serve`; handlers
    /// share nothing, so no further coordination happens here.
    pub async fn run(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .await
            .map_err(|e| {
                tracing::error!("Server error: {}", e);
                e
            })?;

        Ok(())
    }
}
