// WMS GetCapabilities / GetMap
//
// OGC endpoints answer errors with HTTP 200 and an XML service exception,
// so replies are inspected before they are trusted.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::context::ConnectionContext;
use crate::error::Error;
use crate::kind::{Operation, ResourceKind};
use crate::models::{Capabilities, CapabilityLayer, MapImage, MapRequest, WmsVersion};
use crate::requester::Requester;

/// `/geoserver/wms`, or `/geoserver/{ws}/wms` inside a workspace scope.
#[derive(Debug, Clone)]
pub struct Wms {
    requester: Requester,
}

impl Wms {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        Self {
            requester: Requester::root(ctx, ResourceKind::Wms),
        }
    }

    pub async fn get_capabilities(&self, version: WmsVersion) -> Result<Capabilities, Error> {
        let url = self.requester.context().service_url("wms")?;
        debug!("GET {url} REQUEST=GetCapabilities");

        let request = self.requester.context().http().get(url).query(&[
            ("SERVICE", "WMS"),
            ("VERSION", version.as_str()),
            ("REQUEST", "GetCapabilities"),
        ]);
        let resp = self
            .requester
            .execute(Operation::Get, "GetCapabilities", request)
            .await?;
        let server = resp.url().origin().ascii_serialization();
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        if is_service_exception(&body) {
            warn!(status, "capabilities request answered with a service exception");
            return Err(Error::geoserver(status, server, body));
        }
        parse_capabilities(&body)
    }

    /// Render a map. The image is returned undecoded.
    pub async fn get_map(&self, map: &MapRequest) -> Result<MapImage, Error> {
        map.validate()?;

        let url = self.requester.context().service_url("wms")?;
        debug!(layers = %map.layers.join(","), "GET {url} REQUEST=GetMap");

        let request = self.requester.context().http().get(url).query(&map.query());
        let resp = self
            .requester
            .execute(Operation::Get, &map.layers.join(","), request)
            .await?;

        let server = resp.url().origin().ascii_serialization();
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if content_type.contains("xml") {
            let body = resp.text().await?;
            warn!(status, %content_type, "GetMap answered with a service exception");
            return Err(Error::geoserver(status, server, body));
        }

        let bytes = resp.bytes().await?;
        Ok(MapImage {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

fn is_service_exception(body: &str) -> bool {
    body.contains("ServiceExceptionReport")
}

// ── Capabilities parsing ────────────────────────────────────────────

#[derive(Default)]
struct LayerFrame {
    name: Option<String>,
    title: Option<String>,
    queryable: bool,
}

/// Reduce a capabilities document to its title, version and named layers.
pub(crate) fn parse_capabilities(xml: &str) -> Result<Capabilities, Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut caps = Capabilities::default();
    let mut path: Vec<String> = Vec::new();
    let mut layers: Vec<LayerFrame> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = local_name(&e);
                if !seen_root {
                    seen_root = true;
                    if !name.ends_with("Capabilities") {
                        return Err(Error::Xml(format!(
                            "expected a WMS capabilities document, found <{name}>"
                        )));
                    }
                    caps.version = attribute(&e, "version")?.unwrap_or_default();
                }
                if name == "Layer" {
                    let queryable = attribute(&e, "queryable")?
                        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
                    layers.push(LayerFrame {
                        queryable,
                        ..LayerFrame::default()
                    });
                }
                path.push(name);
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::Xml(e.to_string()))?
                    .into_owned();
                let parent = path.len().checked_sub(2).map(|i| path[i].as_str());
                match (parent, path.last().map(String::as_str)) {
                    (Some("Service"), Some("Title")) => caps.title = text,
                    (Some("Layer"), Some("Name")) => {
                        if let Some(frame) = layers.last_mut() {
                            frame.name = Some(text);
                        }
                    }
                    (Some("Layer"), Some("Title")) => {
                        if let Some(frame) = layers.last_mut() {
                            frame.title = Some(text);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) => {
                if path.pop().as_deref() == Some("Layer") {
                    if let Some(LayerFrame {
                        name: Some(name),
                        title,
                        queryable,
                    }) = layers.pop()
                    {
                        caps.layers.push(CapabilityLayer {
                            name,
                            title,
                            queryable,
                        });
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::Xml("empty capabilities document".into()));
    }
    Ok(caps)
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, Error> {
    let attr = e
        .try_get_attribute(key)
        .map_err(|err| Error::Xml(err.to_string()))?;
    attr.map(|a| {
        a.unescape_value()
            .map(|v| v.into_owned())
            .map_err(|err| Error::Xml(err.to_string()))
    })
    .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const CAPS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0" xmlns="http://www.opengis.net/wms">
  <Service>
    <Name>WMS</Name>
    <Title>GeoServer Web Map Service</Title>
  </Service>
  <Capability>
    <Layer>
      <Title>GeoServer Web Map Service</Title>
      <Layer queryable="1">
        <Name>topp:states</Name>
        <Title>USA Population &amp; Area</Title>
      </Layer>
      <Layer queryable="0">
        <Name>nurc:mosaic</Name>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>"#;

    #[test]
    fn parses_named_layers() {
        let caps = parse_capabilities(CAPS).unwrap();
        assert_eq!(caps.version, "1.3.0");
        assert_eq!(caps.title, "GeoServer Web Map Service");
        assert_eq!(caps.layers.len(), 2);

        let states = caps.layer("topp:states").unwrap();
        assert!(states.queryable);
        assert_eq!(states.title.as_deref(), Some("USA Population & Area"));
        assert!(!caps.layer("nurc:mosaic").unwrap().queryable);
    }

    #[test]
    fn rejects_other_documents() {
        let err = parse_capabilities("<ServiceExceptionReport/>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Xml);
        let err = parse_capabilities("<html><body>oops</body></html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Xml);
    }
}
