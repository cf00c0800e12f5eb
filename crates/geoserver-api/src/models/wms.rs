// WMS request and response types
//
// Only GetCapabilities and GetMap are modelled. Capabilities are reduced
// to the service title and the named layers.

use std::fmt;

use crate::error::Error;

/// Image formats GetMap may ask for.
pub const MAP_FORMATS: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/tiff"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WmsVersion {
    V1_1_1,
    #[default]
    V1_3_0,
}

impl WmsVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_1_1 => "1.1.1",
            Self::V1_3_0 => "1.3.0",
        }
    }

    /// 1.3.0 renamed `SRS` to `CRS`.
    pub(crate) fn crs_param(self) -> &'static str {
        match self {
            Self::V1_1_1 => "SRS",
            Self::V1_3_0 => "CRS",
        }
    }
}

impl fmt::Display for WmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a capabilities document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub version: String,
    /// `Service/Title`.
    pub title: String,
    /// Named layers, in document order (children before their parent).
    pub layers: Vec<CapabilityLayer>,
}

impl Capabilities {
    pub fn layer(&self, name: &str) -> Option<&CapabilityLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityLayer {
    pub name: String,
    pub title: Option<String>,
    pub queryable: bool,
}

/// Parameters of a GetMap request.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    pub version: WmsVersion,
    pub layers: Vec<String>,
    /// Empty entries use the layer default.
    pub styles: Vec<String>,
    /// `[minx, miny, maxx, maxy]` in `crs` axis order.
    pub bbox: [f64; 4],
    pub crs: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub transparent: bool,
}

impl MapRequest {
    pub fn new(
        layers: impl IntoIterator<Item = impl Into<String>>,
        bbox: [f64; 4],
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            version: WmsVersion::default(),
            layers: layers.into_iter().map(Into::into).collect(),
            styles: Vec::new(),
            bbox,
            crs: "EPSG:4326".into(),
            width,
            height,
            format: "image/png".into(),
            transparent: false,
        }
    }

    pub fn version(mut self, version: WmsVersion) -> Self {
        self.version = version;
        self
    }

    pub fn crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = crs.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn styles(mut self, styles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Reject requests the server would answer with an exception.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !MAP_FORMATS.contains(&self.format.as_str()) {
            return Err(Error::unsupported(format!(
                "map format {} is not supported (expected one of: {})",
                self.format,
                MAP_FORMATS.join(", ")
            )));
        }
        if self.layers.is_empty() {
            return Err(Error::input("GetMap needs at least one layer"));
        }
        if !self.styles.is_empty() && self.styles.len() != self.layers.len() {
            return Err(Error::input("GetMap styles must match layers one to one"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::input("GetMap width and height must be positive"));
        }
        Ok(())
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let [minx, miny, maxx, maxy] = self.bbox;
        vec![
            ("SERVICE", "WMS".into()),
            ("VERSION", self.version.as_str().into()),
            ("REQUEST", "GetMap".into()),
            ("LAYERS", self.layers.join(",")),
            ("STYLES", self.styles.join(",")),
            (self.version.crs_param(), self.crs.clone()),
            ("BBOX", format!("{minx},{miny},{maxx},{maxy}")),
            ("WIDTH", self.width.to_string()),
            ("HEIGHT", self.height.to_string()),
            ("FORMAT", self.format.clone()),
            ("TRANSPARENT", self.transparent.to_string().to_uppercase()),
        ]
    }
}

/// Raw GetMap reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MapImage {
    /// Pixel decoding is left to the caller's imaging library.
    pub fn decode(&self) -> Result<(), Error> {
        Err(Error::unsupported(format!(
            "decoding {} map images is not supported; use the raw bytes",
            self.content_type
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn version_picks_crs_parameter() {
        let req = MapRequest::new(["topp:states"], [-124.0, 22.0, -66.0, 50.0], 256, 256)
            .version(WmsVersion::V1_1_1);
        let query = req.query();
        assert!(query.iter().any(|(k, v)| *k == "SRS" && v == "EPSG:4326"));
        assert!(query.iter().any(|(k, v)| *k == "BBOX" && v == "-124,22,-66,50"));
        assert!(query.iter().any(|(k, v)| *k == "TRANSPARENT" && v == "FALSE"));
    }

    #[test]
    fn unknown_format_is_unsupported() {
        let req = MapRequest::new(["a"], [0.0, 0.0, 1.0, 1.0], 10, 10).format("image/webp");
        assert_eq!(req.validate().err().map(|e| e.kind()), Some(ErrorKind::Unsupported));
    }

    #[test]
    fn styles_must_line_up() {
        let req = MapRequest::new(["a", "b"], [0.0, 0.0, 1.0, 1.0], 10, 10).styles(["line"]);
        assert_eq!(req.validate().err().map(|e| e.kind()), Some(ErrorKind::Input));
    }

    #[test]
    fn decoding_is_declined() {
        let image = MapImage {
            content_type: "image/png".into(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        assert_eq!(image.decode().err().map(|e| e.kind()), Some(ErrorKind::Unsupported));
    }
}
