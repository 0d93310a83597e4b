use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use law_query::api::{ApiError, LawsClient, QueryService};
use law_query::page::{Page, GENERIC_ERROR};
use serde_json::json;

/// Stand-in for the law query service, echoing the decoded query back
async fn answer(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let query = params.get("query").cloned().unwrap_or_default();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({
        "query": query,
        "response": format!("content-type was {content_type}"),
        "citations": [
            {"source": "1. Theft", "text": "Theft is punishable by hanging"},
            {"source": "7. Sacred places", "text": "Whoever steals from a sept loses a hand."},
            {"source": null, "text": "Untitled law"}
        ]
    }))
}

async fn start(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> LawsClient {
    LawsClient::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn test_query_is_encoded_and_response_parsed_in_order() {
    let addr = start(Router::new().route("/query", get(answer))).await;

    let question = "What happens if I steal from the Sept? 50% & more #1";
    let response = client(addr).query_laws(question).await.unwrap();

    assert_eq!(response.query, question);
    assert_eq!(response.response, "content-type was application/json");
    let sources: Vec<_> = response.citations.iter().map(|c| c.source.as_str()).collect();
    assert_eq!(sources, vec!["1. Theft", "7. Sacred places", ""]);
    assert_eq!(response.citations[2].text, "Untitled law");
}

#[tokio::test]
async fn test_non_success_status_carries_code_and_body() {
    let router = Router::new().route(
        "/query",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "index not loaded") }),
    );
    let addr = start(router).await;

    let err = client(addr).query_laws("theft").await.unwrap_err();
    match &err {
        ApiError::Status { status, body } => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "index not loaded");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("API request failed: 500"));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let router = Router::new().route("/query", get(|| async { "<html>oops</html>" }));
    let addr = start(router).await;

    let err = client(addr).query_laws("theft").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr).query_laws("theft").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_page_maps_failures_to_generic_message() {
    let router = Router::new().route(
        "/query",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
    );
    let addr = start(router).await;
    let client = client(addr);

    let mut page = Page::new();
    page.set_query("what happens if I steal?");
    assert!(page.submit(&client).await);

    assert!(!page.is_loading());
    assert_eq!(page.error(), GENERIC_ERROR);
    assert!(page.result().is_none());
}

#[tokio::test]
async fn test_page_renders_successful_answer() {
    let addr = start(Router::new().route("/query", get(answer))).await;
    let client = client(addr);

    let mut page = Page::new();
    page.set_query("theft");
    assert!(page.submit(&client).await);

    let view = page.view();
    assert_eq!(view.error, None);
    assert!(!view.loading);
    assert_eq!(view.result.map(|r| r.citations.len()), Some(3));
}
