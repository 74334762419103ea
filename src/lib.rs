use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;

pub mod config;
pub mod mcp;
pub mod openverse;

use crate::config::{ServerConfig, Transport};
use crate::mcp::tools::ToolRegistry;
use crate::mcp::{McpService, McpState};
use crate::openverse::OpenverseClient;

/// Wires the Openverse client into a ready-to-serve MCP service.
pub fn build_service(config: &ServerConfig) -> anyhow::Result<McpService> {
    let client = OpenverseClient::new(config.api_base.clone(), config.request_timeout)
        .context("failed to build Openverse HTTP client")?;
    Ok(McpService::new(ToolRegistry::new(Arc::new(client))))
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let service = build_service(&config)?;
    log::info!("Using Openverse API at {}", config.api_base);

    match config.transport {
        Transport::Stdio => mcp::stdio::serve_stdio(service)
            .await
            .context("stdio transport failed"),
        Transport::Http => serve_http(service, &config.host, config.port).await,
    }
}

pub async fn serve_http(service: McpService, host: &str, port: u16) -> anyhow::Result<()> {
    let state = web::Data::new(McpState::new(service));

    log::info!("Starting MCP server at http://{}:{}/mcp", host, port);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(mcp::config))
        .bind((host, port))
        .with_context(|| format!("failed to bind {host}:{port}"))?
        .run()
        .await
        .context("HTTP transport failed")
}
