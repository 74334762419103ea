//! Integration tests for the MCP HTTP endpoint.

mod common;

use actix_web::{test, web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openverse_mcp_server::config::ServerConfig;
use openverse_mcp_server::mcp::{self, McpService, McpState};

use common::{stub_service, StubCatalog};

async fn post_json(service: McpService, payload: Value) -> (u16, Option<Value>) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(McpState::new(service)))
            .configure(mcp::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body).unwrap())
    };
    (status, json)
}

#[actix_web::test]
async fn test_tools_list_over_http() {
    let (status, body) = post_json(
        stub_service(StubCatalog::new()),
        json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }),
    )
    .await;

    assert_eq!(status, 200);
    let body = body.unwrap();
    let names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["search", "fetch"]);
}

#[actix_web::test]
async fn test_notification_is_accepted() {
    let (status, body) = post_json(
        stub_service(StubCatalog::new()),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    )
    .await;

    assert_eq!(status, 202);
    assert!(body.is_none());
}

#[actix_web::test]
async fn test_malformed_body_is_parse_error() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(McpState::new(stub_service(StubCatalog::new()))))
            .configure(mcp::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/mcp")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ malformed json ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32700);
    assert!(body["id"].is_null());
}

#[actix_web::test]
async fn test_fetch_not_found_is_tool_error() {
    let (_, body) = post_json(
        stub_service(StubCatalog::new()),
        json!({
            "jsonrpc": "2.0",
            "id": "req-9",
            "method": "tools/call",
            "params": { "name": "fetch", "arguments": { "id": "xyz" } }
        }),
    )
    .await;

    let body = body.unwrap();
    assert_eq!(body["id"], "req-9");
    assert_eq!(body["result"]["isError"], true);
    assert_eq!(
        body["result"]["content"][0]["text"],
        "API request failed: 404 Not Found"
    );
}

#[actix_web::test]
async fn test_search_end_to_end_against_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images"))
        .and(query_param("q", "cat"))
        .and(query_param("page_size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "id": "abc", "title": "Cat", "url": "u", "thumbnail": "t", "width": 100, "height": 200 }
            ]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let config = ServerConfig::from_vars(
        &[("OPENVERSE_API_BASE".to_string(), format!("{}/v1", upstream.uri()))]
            .into_iter()
            .collect(),
    )
    .unwrap();
    let service = openverse_mcp_server::build_service(&config).unwrap();

    let (_, body) = post_json(
        service,
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": { "name": "search", "arguments": { "query": "cat" } }
        }),
    )
    .await;

    let body = body.unwrap();
    assert_eq!(body["result"]["isError"], false);
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    let items: Value = serde_json::from_str(text).unwrap();
    assert_eq!(
        items,
        json!([{ "id": "abc", "title": "Cat", "url": "u", "thumbnail": "t", "width": 100, "height": 200 }])
    );
}

#[actix_web::test]
async fn test_search_missing_query_is_invalid_params() {
    let (_, body) = post_json(
        stub_service(StubCatalog::new()),
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": { "name": "search", "arguments": { "page": 1 } }
        }),
    )
    .await;

    assert_eq!(body.unwrap()["error"]["code"], -32602);
}
