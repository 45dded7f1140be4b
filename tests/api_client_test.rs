use anyhow::Result;
use geoengine_client::core::ApiClient;
use geoengine_client::models::IdResponse;
use geoengine_client::{ClientError, Configuration};
use httpmock::prelude::*;
use reqwest::Method;
use std::sync::Arc;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(Arc::new(
        Configuration::new(server.url("/api"))
            .with_user_agent("geoengine-tests/1.0")
            .with_session_token("token-123"),
    ))
}

#[tokio::test]
async fn test_custom_user_agent_and_bearer_token() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/available")
                .header("user-agent", "geoengine-tests/1.0")
                .header("authorization", "Bearer token-123");
            then.status(204);
        })
        .await;

    let client = api_client(&server);
    let request = client.request(Method::GET, &["available"])?;
    client.send_empty(request).await?;
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_plain_error_body_is_unexpected_status() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/info");
            then.status(502).body("Bad Gateway");
        })
        .await;

    let client = api_client(&server);
    let request = client.request(Method::GET, &["info"]).unwrap();
    let err = client.send_text(request).await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_serialization_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/info");
            then.status(200).body("{not json");
        })
        .await;

    let client = api_client(&server);
    let request = client.request(Method::GET, &["info"]).unwrap();
    let result: geoengine_client::Result<IdResponse> = client.send_json(request).await;
    assert!(matches!(result, Err(ClientError::SerializationError(_))));
}

#[tokio::test]
async fn test_empty_json_body_is_serialization_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/workflow");
            then.status(200).body("");
        })
        .await;

    let client = api_client(&server);
    let request = client.request(Method::POST, &["workflow"]).unwrap();
    let result: geoengine_client::Result<IdResponse> = client.send_json(request).await;
    assert!(matches!(result, Err(ClientError::SerializationError(_))));
}
