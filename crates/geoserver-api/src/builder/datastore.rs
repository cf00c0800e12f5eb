// Data store formats
//
// Each terminal method seeds the connection parameters the format needs,
// applies its options in order and creates the store. Parameter keys are
// the GeoTools factory keys and are case-sensitive.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use super::{StoreOption, StoreSettings, file_url};
use crate::error::Error;
use crate::models::{ConnectionParameters, DataStore, ResourceRef};
use crate::requester::Requester;
use crate::validate::{
    validate_csv, validate_directory, validate_geopackage, validate_name, validate_shapefile,
};

/// Pending data store creation. Consumed by the format method.
#[derive(Debug)]
pub struct DataStoreBuilder {
    requester: Requester,
    workspace: String,
    name: String,
    settings: StoreSettings,
}

impl DataStoreBuilder {
    pub(crate) fn new(
        requester: Requester,
        workspace: &str,
        name: &str,
        options: impl IntoIterator<Item = StoreOption>,
    ) -> Self {
        Self {
            requester,
            workspace: workspace.to_owned(),
            name: name.to_owned(),
            settings: StoreSettings::from_options(options),
        }
    }

    // ── Formats ──────────────────────────────────────────────────────

    /// PostgreSQL / PostGIS database.
    pub async fn postgis(
        self,
        connection: &PostGisConnection,
        options: impl IntoIterator<Item = PostGisOption>,
    ) -> Result<(), Error> {
        let store = self.postgis_store(connection, options)?;
        self.send(store).await
    }

    /// A single `.shp` file.
    pub async fn shapefile(
        self,
        path: &str,
        options: impl IntoIterator<Item = ShapefileOption>,
    ) -> Result<(), Error> {
        let store = self.shapefile_store(path, options)?;
        self.send(store).await
    }

    /// Every shapefile in a server-side directory.
    pub async fn shapefile_directory(
        self,
        path: &str,
        options: impl IntoIterator<Item = ShapefileOption>,
    ) -> Result<(), Error> {
        validate_directory(path)?;
        let mut store = self.store("Directory of spatial files (shapefiles)")?;
        let params = &mut store.connection_parameters;
        params.insert("url", file_url(path));
        params.insert("fstype", "shape");
        for option in options {
            option.apply(params);
        }
        self.send(store).await
    }

    pub async fn geopackage(
        self,
        path: &str,
        options: impl IntoIterator<Item = GeoPackageOption>,
    ) -> Result<(), Error> {
        let store = self.geopackage_store(path, options)?;
        self.send(store).await
    }

    pub async fn csv(self, path: &str, strategy: CsvStrategy) -> Result<(), Error> {
        let store = self.csv_store(path, strategy)?;
        self.send(store).await
    }

    /// Cascade a remote WFS, given its GetCapabilities URL.
    pub async fn web_feature_service(
        self,
        capabilities_url: &str,
        options: impl IntoIterator<Item = WfsOption>,
    ) -> Result<(), Error> {
        let store = self.wfs_store(capabilities_url, options)?;
        self.send(store).await
    }

    // ── Payloads ─────────────────────────────────────────────────────

    pub(crate) fn postgis_store(
        &self,
        connection: &PostGisConnection,
        options: impl IntoIterator<Item = PostGisOption>,
    ) -> Result<DataStore, Error> {
        connection.validate()?;
        let mut store = self.store("PostGIS")?;
        let params = &mut store.connection_parameters;
        params.insert("host", connection.host.as_str());
        params.insert("port", connection.port.to_string());
        params.insert("database", connection.database.as_str());
        params.insert("user", connection.user.as_str());
        params.insert("passwd", connection.password.expose_secret());
        params.insert("SSL mode", connection.ssl.as_str());
        params.insert("dbtype", "postgis");
        for option in options {
            option.apply(params);
        }
        Ok(store)
    }

    pub(crate) fn shapefile_store(
        &self,
        path: &str,
        options: impl IntoIterator<Item = ShapefileOption>,
    ) -> Result<DataStore, Error> {
        validate_shapefile(path)?;
        let mut store = self.store("Shapefile")?;
        let params = &mut store.connection_parameters;
        params.insert("url", file_url(path));
        params.insert("filetype", "shapefile");
        for option in options {
            option.apply(params);
        }
        Ok(store)
    }

    pub(crate) fn geopackage_store(
        &self,
        path: &str,
        options: impl IntoIterator<Item = GeoPackageOption>,
    ) -> Result<DataStore, Error> {
        validate_geopackage(path)?;
        let mut store = self.store("GeoPackage")?;
        let params = &mut store.connection_parameters;
        params.insert("database", file_url(path));
        params.insert("dbtype", "geopkg");
        for option in options {
            option.apply(params);
        }
        Ok(store)
    }

    pub(crate) fn csv_store(&self, path: &str, strategy: CsvStrategy) -> Result<DataStore, Error> {
        validate_csv(path)?;
        let mut store = self.store("CSV")?;
        let params = &mut store.connection_parameters;
        params.insert("file", file_url(path));
        strategy.apply(params)?;
        Ok(store)
    }

    pub(crate) fn wfs_store(
        &self,
        capabilities_url: &str,
        options: impl IntoIterator<Item = WfsOption>,
    ) -> Result<DataStore, Error> {
        let url = Url::parse(capabilities_url.trim()).map_err(Error::wrap_input)?;
        let mut store = self.store("Web Feature Server (NG)")?;
        let params = &mut store.connection_parameters;
        params.insert("WFSDataStoreFactory:GET_CAPABILITIES_URL", url.as_str());
        for option in options {
            option.apply(params);
        }
        Ok(store)
    }

    /// Store skeleton with the general options applied.
    fn store(&self, store_type: &str) -> Result<DataStore, Error> {
        validate_name(&self.name)?;
        Ok(DataStore {
            description: self.settings.description.clone(),
            store_type: Some(store_type.to_owned()),
            enabled: Some(self.settings.enabled),
            workspace: Some(ResourceRef::new(self.workspace.as_str())),
            disable_on_conn_failure: self.settings.disable_on_conn_failure,
            ..DataStore::new(self.name.as_str())
        })
    }

    async fn send(self, store: DataStore) -> Result<(), Error> {
        debug!(
            workspace = %self.workspace,
            name = %self.name,
            store_type = store.store_type.as_deref().unwrap_or_default(),
            params = store.connection_parameters.len(),
            "creating data store"
        );
        self.requester.create(&self.name, &store, &[]).await
    }
}

// ── PostGIS ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "DISABLE",
            Self::Allow => "ALLOW",
            Self::Prefer => "PREFER",
            Self::Require => "REQUIRE",
            Self::VerifyCa => "VERIFY_CA",
            Self::VerifyFull => "VERIFY_FULL",
        }
    }
}

/// Database coordinates of a PostGIS store.
#[derive(Debug, Clone)]
pub struct PostGisConnection {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: SecretString,
    pub ssl: SslMode,
}

impl PostGisConnection {
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            host: host.into(),
            port: 5432,
            database: database.into(),
            user: user.into(),
            password,
            ssl: SslMode::default(),
        }
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn ssl(mut self, ssl: SslMode) -> Self {
        self.ssl = ssl;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("host", &self.host),
            ("database", &self.database),
            ("user", &self.user),
        ] {
            if value.trim().is_empty() {
                return Err(Error::input(format!("PostGIS {field} cannot be empty")));
            }
        }
        if self.port == 0 {
            return Err(Error::input("PostGIS port cannot be 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostGisOption {
    /// Check pooled connections before handing them out.
    ValidateConnections,
    Schema(String),
    MaxConnections(u32),
    MinConnections(u32),
    ExposePrimaryKeys,
    /// Filter on bounding boxes only, skipping exact geometry tests.
    LooseBbox,
    FetchSize(u32),
    /// Seconds to wait for a pooled connection.
    ConnectionTimeout(u32),
    EstimatedExtends(bool),
}

impl PostGisOption {
    fn apply(self, params: &mut ConnectionParameters) {
        match self {
            Self::ValidateConnections => params.insert("validate connections", "true"),
            Self::Schema(schema) => params.insert("schema", schema),
            Self::MaxConnections(n) => params.insert("max connections", n.to_string()),
            Self::MinConnections(n) => params.insert("min connections", n.to_string()),
            Self::ExposePrimaryKeys => params.insert("Expose primary keys", "true"),
            Self::LooseBbox => params.insert("Loose bbox", "true"),
            Self::FetchSize(n) => params.insert("fetch size", n.to_string()),
            Self::ConnectionTimeout(secs) => params.insert("Connection timeout", secs.to_string()),
            Self::EstimatedExtends(flag) => params.insert("Estimated extends", flag.to_string()),
        };
    }
}

// ── Shapefile ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapefileOption {
    /// DBF character set, e.g. `UTF-8`, `ISO-8859-1`.
    Charset(String),
    CreateSpatialIndex(bool),
    MemoryMappedBuffer(bool),
    CacheAndReuseMemoryMaps(bool),
}

impl ShapefileOption {
    fn apply(self, params: &mut ConnectionParameters) {
        match self {
            Self::Charset(charset) => params.insert("charset", charset),
            Self::CreateSpatialIndex(flag) => {
                params.insert("create spatial index", flag.to_string())
            }
            Self::MemoryMappedBuffer(flag) => {
                params.insert("memory mapped buffer", flag.to_string())
            }
            Self::CacheAndReuseMemoryMaps(flag) => {
                params.insert("cache and reuse memory maps", flag.to_string())
            }
        };
    }
}

// ── GeoPackage ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoPackageOption {
    ValidateConnections,
    MaxConnections(u32),
    ReadOnly(bool),
}

impl GeoPackageOption {
    fn apply(self, params: &mut ConnectionParameters) {
        match self {
            Self::ValidateConnections => params.insert("validate connections", "true"),
            Self::MaxConnections(n) => params.insert("max connections", n.to_string()),
            Self::ReadOnly(flag) => params.insert("read_only", flag.to_string()),
        };
    }
}

// ── CSV ─────────────────────────────────────────────────────────────

/// How the CSV store builds geometries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvStrategy {
    /// No geometry; every column is an attribute.
    AttributesOnly,
    /// Point geometry from two numeric columns.
    LatLon { lat: String, lng: String },
    /// Geometry from a WKT column.
    Wkt { field: String },
}

impl CsvStrategy {
    fn apply(self, params: &mut ConnectionParameters) -> Result<(), Error> {
        match self {
            Self::AttributesOnly => {
                params.insert("strategy", "AttributesOnly");
            }
            Self::LatLon { lat, lng } => {
                if lat.trim().is_empty() || lng.trim().is_empty() {
                    return Err(Error::input("CSV latitude and longitude fields are required"));
                }
                params.insert("strategy", "LatLon");
                params.insert("latField", lat);
                params.insert("lngField", lng);
            }
            Self::Wkt { field } => {
                if field.trim().is_empty() {
                    return Err(Error::input("CSV WKT field is required"));
                }
                params.insert("strategy", "WKT");
                params.insert("wktField", field);
            }
        }
        Ok(())
    }
}

// ── WFS ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum WfsOption {
    Username(String),
    Password(SecretString),
    /// Request timeout in milliseconds.
    Timeout(u32),
    MaxFeatures(u32),
    Encoding(String),
    /// `true` sends requests as HTTP POST instead of GET.
    UseHttpPost(bool),
    /// Ask the remote for GML 3 output instead of its default.
    UseGml3(bool),
}

impl WfsOption {
    fn apply(self, params: &mut ConnectionParameters) {
        match self {
            Self::Username(user) => params.insert("WFSDataStoreFactory:USERNAME", user),
            Self::Password(password) => {
                params.insert("WFSDataStoreFactory:PASSWORD", password.expose_secret())
            }
            Self::Timeout(ms) => params.insert("WFSDataStoreFactory:TIMEOUT", ms.to_string()),
            Self::MaxFeatures(n) => params.insert("WFSDataStoreFactory:MAXFEATURES", n.to_string()),
            Self::Encoding(encoding) => params.insert("WFSDataStoreFactory:ENCODING", encoding),
            Self::UseHttpPost(flag) => {
                params.insert("WFSDataStoreFactory:PROTOCOL", flag.to_string())
            }
            Self::UseGml3(flag) => {
                let strategy = if flag { "geoserver" } else { "auto" };
                params.insert("WFSDataStoreFactory:WFS_STRATEGY", strategy)
            }
        };
    }
}
