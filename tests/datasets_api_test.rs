use anyhow::Result;
use geoengine_client::models::OrderBy;
use geoengine_client::{ClientError, Configuration, GeoEngineClient, ListDatasetsParams};
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> GeoEngineClient {
    GeoEngineClient::new(Configuration::new(server.url("/api")).with_session_token("token"))
}

#[tokio::test]
async fn test_list_datasets_sends_paging_query() -> Result<()> {
    let server = MockServer::start_async().await;

    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/datasets")
                .query_param("order", "NameDesc")
                .query_param("offset", "0")
                .query_param("limit", "5")
                .query_param("filter", "ports");
            then.status(200).json_body(json!([{
                "id": "0e3c9f4d-6a1b-4c2d-8e3f-4a5b6c7d8e9f",
                "name": "ne_10m_ports",
                "displayName": "Natural Earth 10m Ports",
                "description": "Ports from Natural Earth",
                "tags": ["natural-earth"],
                "sourceOperator": "OgrSource",
                "resultDescriptor": {"type": "vector", "dataType": "MultiPoint"}
            }]));
        })
        .await;

    let params = ListDatasetsParams {
        order: OrderBy::NameDesc,
        limit: 5,
        filter: Some("ports".to_string()),
        ..Default::default()
    };
    let datasets = client(&server).datasets().list(&params).await?;

    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].name, "ne_10m_ports");
    assert_eq!(datasets[0].tags, vec!["natural-earth"]);
    list.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_delete_dataset() -> Result<()> {
    let server = MockServer::start_async().await;

    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/dataset/ne_10m_ports");
            then.status(200);
        })
        .await;

    client(&server).datasets().delete("ne_10m_ports").await?;
    delete.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_dataset_is_api_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dataset/unknown");
            then.status(400).json_body(json!({
                "error": "UnknownDatasetName",
                "message": "Dataset name 'unknown' does not exist"
            }));
        })
        .await;

    let err = client(&server).datasets().get("unknown").await.unwrap_err();
    match err {
        ClientError::ApiError {
            status,
            error,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(error, "UnknownDatasetName");
            assert_eq!(message, "Dataset name 'unknown' does not exist");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_list_volumes() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dataset/volumes");
            then.status(200)
                .json_body(json!([{"name": "test_data", "path": "test_data/"}]));
        })
        .await;

    let volumes = client(&server).datasets().list_volumes().await?;
    assert_eq!(volumes.len(), 1);
    assert_eq!(volumes[0].name, "test_data");
    Ok(())
}
