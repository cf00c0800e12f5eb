#![allow(clippy::unwrap_used)]
// Integration tests for server singletons, tile seeding and WMS.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geoserver_api::{
    Credentials, ErrorKind, GeoServer, KillScope, LoggingConfig, MapRequest, SeedRequest,
    SeedType, TaskStatus, WmsVersion,
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

// ── Logging / fonts / about ─────────────────────────────────────────

#[tokio::test]
async fn test_logging_round_trip() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/logging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logging": {
                "level": "DEFAULT_LOGGING",
                "location": "logs/geoserver.log",
                "stdOutLogging": true
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/geoserver/rest/logging"))
        .and(body_json(json!({
            "logging": {
                "level": "VERBOSE_LOGGING",
                "location": "logs/geoserver.log",
                "stdOutLogging": true
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let logging = client.logging();
    let mut config = logging.get().await.unwrap();
    assert_eq!(config.level, "DEFAULT_LOGGING");
    assert!(config.std_out_logging);

    config.level = "VERBOSE_LOGGING".into();
    logging.update(&config).await.unwrap();

    let err = logging
        .update(&LoggingConfig {
            level: String::new(),
            location: None,
            std_out_logging: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[tokio::test]
async fn test_fonts() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/fonts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fonts": ["DejaVu Sans", "Liberation Serif"]
        })))
        .mount(&server)
        .await;

    let fonts = client.fonts().get_all().await.unwrap();
    assert_eq!(fonts, ["DejaVu Sans", "Liberation Serif"]);
}

#[tokio::test]
async fn test_about_version() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/about/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "about": { "resource": [
                { "@name": "GeoServer", "Version": "2.24.1", "Build-Timestamp": "05-Dec-2023 12:00" },
                { "@name": "GeoTools", "Version": "30.1" }
            ]}
        })))
        .mount(&server)
        .await;

    let versions = client.about().version().await.unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].name, "GeoServer");
    assert_eq!(versions[0].version.as_deref(), Some("2.24.1"));
}

#[tokio::test]
async fn test_about_status_single_module() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/rest/about/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statuss": { "status": {
                "module": "gs-main",
                "name": "GeoServer Main",
                "isEnabled": true,
                "isAvailable": true
            }}
        })))
        .mount(&server)
        .await;

    let status = client.about().status().await.unwrap();
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].module, "gs-main");
    assert!(status[0].is_available);
}

// ── GeoWebCache ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_seed_qualifies_layer_in_workspace() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/geoserver/gwc/rest/seed/PLAYGROUND:roads.json"))
        .and(body_json(json!({
            "seedRequest": {
                "name": "PLAYGROUND:roads",
                "zoomStart": 0,
                "zoomStop": 8,
                "format": "image/png",
                "type": "seed",
                "threadCount": 2
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .workspace("PLAYGROUND")
        .geo_web_cache()
        .seed(&SeedRequest::new("roads", SeedType::Seed, 0, 8).threads(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_seed_rejects_inverted_zoom_range() {
    let (_server, client) = setup().await;

    let err = client
        .geo_web_cache()
        .seed(&SeedRequest::new("topp:states", SeedType::Truncate, 10, 2))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[tokio::test]
async fn test_seed_tasks() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/geoserver/gwc/rest/seed/topp:states.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "long-array-array": [[17888, 44_739_250, 18319, 1, 1], [0, -1, -2, 2, 0]]
        })))
        .mount(&server)
        .await;

    let tasks = client.geo_web_cache().tasks("topp:states").await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].status, TaskStatus::Running);
    assert_eq!(tasks[1].status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_task_lookup_for_blank_layer_sends_nothing() {
    let (server, client) = setup().await;

    let gwc = client.geo_web_cache();
    assert_eq!(gwc.tasks("").await.unwrap_err().kind(), ErrorKind::Input);
    assert_eq!(
        gwc.terminate("..", KillScope::All).await.unwrap_err().kind(),
        ErrorKind::Input
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_terminate_tasks() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/geoserver/gwc/rest/seed/topp:states"))
        .and(body_string("kill_all=running"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .geo_web_cache()
        .terminate("topp:states", KillScope::Running)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_seed_unknown_layer() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/geoserver/gwc/rest/seed/topp:nope.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .geo_web_cache()
        .seed(&SeedRequest::new("topp:nope", SeedType::Reseed, 0, 4))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "tile layer topp:nope not found");
}

// ── WMS ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_capabilities() {
    let (server, client) = setup().await;

    let caps = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMT_MS_Capabilities version="1.1.1">
  <Service><Name>OGC:WMS</Name><Title>PLAYGROUND WMS</Title></Service>
  <Capability>
    <Layer>
      <Title>PLAYGROUND</Title>
      <Layer queryable="1"><Name>roads</Name><Title>Roads</Title></Layer>
    </Layer>
  </Capability>
</WMT_MS_Capabilities>"#;

    Mock::given(method("GET"))
        .and(path("/geoserver/PLAYGROUND/wms"))
        .and(query_param("REQUEST", "GetCapabilities"))
        .and(query_param("VERSION", "1.1.1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(caps, "application/vnd.ogc.wms_xml"))
        .mount(&server)
        .await;

    let caps = client
        .workspace("PLAYGROUND")
        .wms()
        .get_capabilities(WmsVersion::V1_1_1)
        .await
        .unwrap();
    assert_eq!(caps.version, "1.1.1");
    assert_eq!(caps.title, "PLAYGROUND WMS");
    assert_eq!(caps.layers.len(), 1);
    assert_eq!(caps.layers[0].name, "roads");
}

#[tokio::test]
async fn test_get_map_returns_raw_image() {
    let (server, client) = setup().await;

    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    Mock::given(method("GET"))
        .and(path("/geoserver/wms"))
        .and(query_param("REQUEST", "GetMap"))
        .and(query_param("LAYERS", "topp:states"))
        .and(query_param("CRS", "EPSG:4326"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .mount(&server)
        .await;

    let image = client
        .wms()
        .get_map(&MapRequest::new(["topp:states"], [-124.0, 22.0, -66.0, 50.0], 256, 256))
        .await
        .unwrap();
    assert_eq!(image.content_type, "image/png");
    assert_eq!(image.bytes, png);
    assert_eq!(image.decode().unwrap_err().kind(), ErrorKind::Unsupported);
}

#[tokio::test]
async fn test_get_map_service_exception() {
    let (server, client) = setup().await;

    let exception = r#"<ServiceExceptionReport version="1.3.0"><ServiceException code="LayerNotDefined">Could not find layer topp:nope</ServiceException></ServiceExceptionReport>"#;
    Mock::given(method("GET"))
        .and(path("/geoserver/wms"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(exception, "application/vnd.ogc.se_xml"),
        )
        .mount(&server)
        .await;

    let err = client
        .wms()
        .get_map(&MapRequest::new(["topp:nope"], [0.0, 0.0, 1.0, 1.0], 64, 64))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Geoserver);
    assert!(err.to_string().contains("Could not find layer topp:nope"));
}

#[tokio::test]
async fn test_get_map_unsupported_format_sends_nothing() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .wms()
        .get_map(
            &MapRequest::new(["topp:states"], [0.0, 0.0, 1.0, 1.0], 64, 64).format("image/webp"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}
