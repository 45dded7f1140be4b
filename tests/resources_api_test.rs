use anyhow::Result;
use geoengine_client::models::{
    CollectionItem, LayerUpdate, Permission, PermissionRequest, ProjectUpdateToken, Resource,
    UpdateProject,
};
use geoengine_client::{
    CollectionPage, Configuration, GeoEngineClient, ListProjectsParams, PlotQueryParams,
    UploadFile,
};
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;
use uuid::Uuid;

const PROVIDER: &str = "ce5e84db-cbf9-48a2-9a32-d4b7cc56ea74";
const PROJECT: &str = "9e1b7a2c-1d3f-4e5a-8b6c-7d8e9f0a1b2c";
const ROLE: &str = "d5328854-6190-4af9-ad69-4e74b0961ac9";

fn client(server: &MockServer) -> GeoEngineClient {
    GeoEngineClient::new(Configuration::new(server.url("/api")).with_session_token("token"))
}

#[tokio::test]
async fn test_layer_collection_items() -> Result<()> {
    let server = MockServer::start_async().await;

    let collection = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/api/layers/collections/{}/root", PROVIDER))
                .query_param("offset", "0")
                .query_param("limit", "20");
            then.status(200).json_body(json!({
                "id": {"providerId": PROVIDER, "collectionId": "root"},
                "name": "Layers",
                "description": "All layers",
                "items": [
                    {
                        "type": "collection",
                        "id": {"providerId": PROVIDER, "collectionId": "ndvi"},
                        "name": "NDVI",
                        "description": "Vegetation"
                    },
                    {
                        "type": "layer",
                        "id": {"providerId": PROVIDER, "layerId": "ports"},
                        "name": "Ports",
                        "description": "Natural Earth ports"
                    }
                ]
            }));
        })
        .await;

    let root = client(&server)
        .layers()
        .collection(PROVIDER.parse()?, "root", CollectionPage::default())
        .await?;

    assert_eq!(root.items.len(), 2);
    assert!(matches!(&root.items[0], CollectionItem::Collection(c) if c.name == "NDVI"));
    assert!(matches!(&root.items[1], CollectionItem::Layer(l) if l.id.layer_id == "ports"));
    collection.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_project_list_and_update() -> Result<()> {
    let server = MockServer::start_async().await;

    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/projects")
                .query_param("order", "DateDesc")
                .query_param("limit", "20");
            then.status(200).json_body(json!([{
                "id": PROJECT,
                "name": "Vegetation",
                "description": "NDVI over Europe",
                "layerNames": ["NDVI"],
                "plotNames": [],
                "changed": "2026-01-05T10:00:00Z"
            }]));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(format!("/api/project/{}", PROJECT))
                .json_body(json!({"id": PROJECT, "name": "Renamed", "layers": ["none", "delete"]}));
            then.status(200);
        })
        .await;

    let api = client(&server).projects();
    let projects = api.list(ListProjectsParams::default()).await?;
    assert_eq!(projects[0].layer_names, vec!["NDVI"]);

    let mut changes = UpdateProject::new(PROJECT.parse()?);
    changes.name = Some("Renamed".to_string());
    changes.layers = Some(vec![
        LayerUpdate::Token(ProjectUpdateToken::None),
        LayerUpdate::Token(ProjectUpdateToken::Delete),
    ]);
    api.update(&changes).await?;

    list.assert_async().await;
    update.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_add_permission() -> Result<()> {
    let server = MockServer::start_async().await;

    let add = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/permissions").json_body(json!({
                "resource": {"type": "dataset", "id": "ne_10m_ports"},
                "roleId": ROLE,
                "permission": "Read"
            }));
            then.status(200);
        })
        .await;

    let request = PermissionRequest {
        resource: Resource::Dataset("ne_10m_ports".to_string()),
        role_id: ROLE.parse()?,
        permission: Permission::Read,
    };
    client(&server).permissions().add(&request).await?;
    add.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_user_quota_and_roles() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/quota");
            then.status(200).json_body(json!({"available": 9000, "used": 1000}));
        })
        .await;
    let role_by_name = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/roles/byName/analysts");
            then.status(200).json_body(json!({"id": ROLE}));
        })
        .await;

    let api = client(&server).user();
    let quota = api.quota().await?;
    assert_eq!(quota.available, 9000);
    assert_eq!(quota.used, 1000);

    let role = api.role_by_name("analysts").await?;
    assert_eq!(role.id, ROLE.parse::<Uuid>()?);
    role_by_name.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_upload_and_list_files() -> Result<()> {
    let server = MockServer::start_async().await;
    let upload_id = "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d";

    let upload = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/upload")
                .header_exists("content-type")
                .body_contains("ports.csv")
                .body_contains("id,name");
            then.status(200).json_body(json!({"id": upload_id}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/api/uploads/{}/files", upload_id));
            then.status(200).json_body(json!({"files": ["ports.csv"]}));
        })
        .await;

    let api = client(&server).uploads();
    let created = api
        .upload(vec![UploadFile::new("ports.csv", b"id,name\n1,Hamburg".to_vec())])
        .await?;
    assert_eq!(created.id.to_string(), upload_id);

    let files = api.files(created.id).await?;
    assert_eq!(files.files, vec!["ports.csv"]);
    upload.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_spatial_reference_and_plot() -> Result<()> {
    let server = MockServer::start_async().await;
    let workflow = "6f7e8d9c-0b1a-4c2d-9e3f-5a6b7c8d9e0f";

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/spatialReferenceSpecification/EPSG:4326");
            then.status(200).json_body(json!({
                "name": "WGS84",
                "spatialReference": "EPSG:4326",
                "projString": "+proj=longlat +datum=WGS84 +no_defs +type=crs",
                "extent": {
                    "lowerLeftCoordinate": {"x": -180.0, "y": -90.0},
                    "upperRightCoordinate": {"x": 180.0, "y": 90.0}
                },
                "axisLabels": ["longitude", "latitude"],
                "axisOrder": "northEast"
            }));
        })
        .await;
    let plot = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/api/plot/{}", workflow))
                .query_param("bbox", "-180,-90,180,90")
                .query_param("spatialResolution", "0.1,0.1");
            then.status(200).json_body(json!({
                "outputFormat": "JsonVega",
                "plotType": "Histogram",
                "data": {"vegaString": "{}"}
            }));
        })
        .await;

    let geoengine = client(&server);
    let srs = geoengine
        .spatial_references()
        .specification("EPSG:4326")
        .await?;
    assert_eq!(srs.name, "WGS84");

    let params = PlotQueryParams {
        bbox: "-180,-90,180,90".to_string(),
        crs: None,
        time: "2014-01-01T00:00:00Z".to_string(),
        spatial_resolution: "0.1,0.1".to_string(),
    };
    let output = geoengine.plots().plot(workflow.parse()?, &params).await?;
    assert_eq!(output.plot_type, "Histogram");
    plot.assert_async().await;
    Ok(())
}
