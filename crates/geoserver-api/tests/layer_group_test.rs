#![allow(clippy::unwrap_used)]
// Integration tests for layer groups and styles.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geoserver_api::{
    Credentials, ErrorKind, GeoServer, LayerGroupMode, SLD_CONTENT_TYPE,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, GeoServer) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = GeoServer::with_client(
        reqwest::Client::new(),
        base_url,
        Credentials::new("admin", SecretString::from("geoserver".to_owned())),
    );
    (server, client)
}

const SLD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<StyledLayerDescriptor version="1.0.0"><NamedLayer><Name>line</Name></NamedLayer></StyledLayerDescriptor>"#;

// ── Layer groups ────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_root_group_with_workspace_layers() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/geoserver/rest/layergroups"))
        .and(body_json(json!({
            "layerGroup": {
                "name": "basemap",
                "mode": "NAMED",
                "title": "Base map",
                "publishables": { "published": [
                    { "@type": "layer", "name": "PLAYGROUND:roads" },
                    { "@type": "layer", "name": "topp:states" }
                ]},
                "styles": { "style": [
                    "",
                    { "name": "population" }
                ]}
            }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .layer_groups()
        .builder("basemap")
        .mode(LayerGroupMode::Named)
        .title("Base map")
        .layer_in("PLAYGROUND", "roads")
        .styled_layer("topp:states", "population")
        .create()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_workspace_group_path() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/geoserver/rest/workspaces/PLAYGROUND/layergroups"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .layer_groups()
        .builder("local")
        .layer("roads")
        .create()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["layerGroup"]["workspace"]["name"], "PLAYGROUND");
    assert_eq!(
        body["layerGroup"]["publishables"]["published"][0]["name"],
        "PLAYGROUND:roads"
    );
}

#[tokio::test]
async fn test_mismatched_group_is_rejected_locally() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut group = client
        .layer_groups()
        .builder("basemap")
        .layer("roads")
        .layer("rivers")
        .build()
        .unwrap();
    group.styles.style.pop();

    let err = client.layer_groups().create(&group).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(
        err.to_string(),
        "layer group basemap has 2 publishables but 1 styles"
    );
}

#[tokio::test]
async fn test_get_group_with_single_member() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/layergroups/basemap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "layerGroup": {
                "name": "basemap",
                "mode": "SINGLE",
                "publishables": {
                    "published": { "@type": "layer", "name": "topp:states", "href": "http://x" }
                },
                "styles": { "style": "" },
                "keywords": { "string": "base" }
            }
        })))
        .mount(&server)
        .await;

    let group = client.layer_groups().get("basemap").await.unwrap();
    assert_eq!(group.published().len(), 1);
    assert_eq!(group.styles().len(), 1);
    assert_eq!(group.keywords.unwrap().values, ["base"]);
}

#[tokio::test]
async fn test_delete_missing_group() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/geoserver/rest/layergroups/gone"))
        .and(query_param("recurse", "false"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.layer_groups().delete("gone", false).await.unwrap_err();
    assert_eq!(err.to_string(), "layergroup gone not found");
}

#[tokio::test]
async fn test_delete_group_recursively() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/geoserver/rest/workspaces/PLAYGROUND/layergroups/basemap"))
        .and(query_param("recurse", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .layer_groups()
        .delete("basemap", true)
        .await
        .unwrap();
}

// ── Styles ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_style_from_sld() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/geoserver/rest/workspaces/PLAYGROUND/styles"))
        .and(query_param("name", "line"))
        .and(header("content-type", SLD_CONTENT_TYPE))
        .and(body_string(SLD))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .styles()
        .create("line", SLD)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fetch_style_and_sld() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/styles/line"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "style": {
                "name": "line",
                "format": "sld",
                "languageVersion": { "version": "1.0.0" },
                "filename": "line.sld"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/geoserver/rest/styles/line.sld"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SLD))
        .mount(&server)
        .await;

    let styles = client.styles();
    let style = styles.get("line").await.unwrap();
    assert_eq!(style.filename.as_deref(), Some("line.sld"));
    assert_eq!(style.language_version.unwrap().version, "1.0.0");
    assert_eq!(styles.sld("line").await.unwrap(), SLD);
}

#[tokio::test]
async fn test_update_and_delete_style() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/geoserver/rest/styles/line"))
        .and(header("content-type", SLD_CONTENT_TYPE))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/geoserver/rest/styles/line"))
        .and(query_param("purge", "true"))
        .and(query_param("recurse", "false"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let styles = client.styles();
    styles.update("line", SLD).await.unwrap();
    styles.delete("line", true, false).await.unwrap();
}

#[tokio::test]
async fn test_list_no_styles() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/styles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "styles": "" })))
        .mount(&server)
        .await;

    assert!(client.styles().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_style_with_blank_body_sends_nothing() {
    let (server, client) = setup().await;

    let err = client.styles().update("line", "  \n").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(err.to_string(), "style body cannot be empty");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sld_of_relative_name_sends_nothing() {
    let (server, client) = setup().await;

    for name in ["", ".."] {
        let err = client.styles().sld(name).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input, "{name:?}");
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}
