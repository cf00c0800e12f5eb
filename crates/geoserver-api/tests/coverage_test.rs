#![allow(clippy::unwrap_used)]
// Integration tests for coverage stores and coverages.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geoserver_api::{Credentials, ErrorKind, GeoServer, Purge, ResourceOption, StoreOption};

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

const STORES: &str = "/geoserver/rest/workspaces/PLAYGROUND/coveragestores";

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_geotiff_store() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(STORES))
        .and(body_json(json!({
            "coverageStore": {
                "name": "dem",
                "description": "elevation",
                "type": "GeoTIFF",
                "enabled": true,
                "workspace": { "name": "PLAYGROUND" },
                "url": "file:data/dem.tif"
            }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .coverage_stores()
        .create("dem", [StoreOption::Description("elevation".into())])
        .geotiff("data/dem.tif")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_image_mosaic_takes_a_directory() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(STORES))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .coverage_stores()
        .create("mosaic", [])
        .image_mosaic("/data/granules")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["coverageStore"]["type"], "ImageMosaic");
    assert_eq!(body["coverageStore"]["url"], "file:/data/granules");
}

#[tokio::test]
async fn test_declined_and_invalid_formats_send_nothing() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let stores = client.workspace("PLAYGROUND").coverage_stores();

    let err = stores
        .create("pyramid", [])
        .image_pyramid("/data/pyramid")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotImplemented);

    let err = stores
        .create("gtopo", [])
        .gtopo30("/data/W020N90.DEM")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotImplemented);

    let err = stores
        .create("dem", [])
        .geotiff("data/dem.png")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let err = stores
        .create("grid", [])
        .arcgrid("data/grid.tif")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let err = stores
        .create("mosaic", [])
        .image_mosaic("")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

// ── Read / delete ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_and_get_coverage_stores() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(STORES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "coverageStores": "" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{STORES}/dem")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "coverageStore": {
                "name": "dem",
                "type": "GeoTIFF",
                "url": "file:data/dem.tif",
                "coverages": "http://x/coverages.json"
            }
        })))
        .mount(&server)
        .await;

    let stores = client.workspace("PLAYGROUND").coverage_stores();
    assert!(stores.get_all().await.unwrap().is_empty());

    let dem = stores.get("dem").await.unwrap();
    assert_eq!(dem.store_type.as_deref(), Some("GeoTIFF"));
    assert_eq!(dem.url.as_deref(), Some("file:data/dem.tif"));
}

#[tokio::test]
async fn test_delete_coverage_store_with_metadata_purge() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{STORES}/dem")))
        .and(query_param("recurse", "false"))
        .and(query_param("purge", "metadata"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .coverage_stores()
        .delete_with_purge("dem", false, Purge::Metadata)
        .await
        .unwrap();
}

// ── Coverages ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_publish_coverage() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORES}/dem")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "coverageStore": { "name": "dem" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{STORES}/dem/coverages")))
        .and(body_json(json!({
            "coverage": {
                "name": "dem",
                "nativeName": "dem",
                "keywords": { "string": ["elevation", "srtm"] }
            }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .coverage_stores()
        .select("dem")
        .publish(
            "dem",
            [
                ResourceOption::NativeName("dem".into()),
                ResourceOption::Keywords(vec!["elevation".into(), "srtm".into()]),
            ],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_missing_coverage() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORES}/dem/coverages/slope")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .workspace("PLAYGROUND")
        .coverage_stores()
        .select("dem")
        .coverages()
        .get("slope")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "coverage slope not found");
}

#[tokio::test]
async fn test_list_coverages_in_missing_store() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORES}/gone/coverages")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .workspace("PLAYGROUND")
        .coverage_stores()
        .select("gone")
        .coverages()
        .get_all()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "coveragestore gone not found");
}
