//! MCP Stateless HTTP Handlers for Actix-Web.
//!
//! Each POST carries one JSON-RPC message; no session is kept between requests.

use actix_web::{web, HttpResponse, Responder};

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// MCP State for Actix-Web
pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(state: web::Data<McpState>, body: web::Bytes) -> impl Responder {
    let request: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("Rejected malformed MCP request: {}", err);
            return HttpResponse::Ok().json(OutboundResponse::parse_error(err.to_string()));
        }
    };

    log::info!("Received MCP request: {}", request.method);

    match state.service.handle_request(request).await {
        Some(response) => HttpResponse::Ok().json(response),
        // Notifications return 202 Accepted
        None => HttpResponse::Accepted().finish(),
    }
}

/// Configure MCP routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));
}
