use thiserror::Error;

use crate::kind::{Operation, ResourceKind};

/// Boxed cause carried by errors that wrap another error.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for the `geoserver-api` crate.
///
/// The first six variants are the classified kinds: local validation
/// failures, and HTTP-level failures reported by the server. The rest are
/// raw failures (transport, URL, decoding) that are passed through
/// unclassified so callers can tell a refused connection from a 404.
#[derive(Debug, Error)]
pub enum Error {
    // ── Local validation ────────────────────────────────────────────
    /// Precondition failed before any request was sent.
    #[error("{message}")]
    Input {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    // ── Classified server responses ─────────────────────────────────
    /// Server answered 404 for the target resource.
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Server answered 409 for the target resource.
    #[error("{message}")]
    Conflict {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Any other non-success status. `body` is the raw response text.
    #[error("received status code {status} from {server}: {body}")]
    Geoserver {
        status: u16,
        server: String,
        body: String,
        #[source]
        source: Option<Cause>,
    },

    // ── Declined operations ─────────────────────────────────────────
    /// Operation the client does not implement.
    #[error("{message}")]
    NotImplemented {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Operation or input the client refuses to handle.
    #[error("{message}")]
    Unsupported {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    // ── Unclassified ────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Response body did not match the expected JSON shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Response body was not the XML document we expected.
    #[error("Invalid XML document: {0}")]
    Xml(String),

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),
}

/// Fieldless discriminant of [`Error`], handy for matching and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    NotFound,
    Conflict,
    Geoserver,
    NotImplemented,
    Unsupported,
    Transport,
    InvalidUrl,
    Decode,
    Xml,
    Tls,
}

impl Error {
    // ── Constructors ────────────────────────────────────────────────
    //
    // `<kind>(message)` builds from a string; `wrap_<kind>(err)` copies the
    // message of `err` and keeps it as the source.

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap_input<E: Into<Cause>>(err: E) -> Self {
        let (message, source) = split(err);
        Self::Input { message, source }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap_not_found<E: Into<Cause>>(err: E) -> Self {
        let (message, source) = split(err);
        Self::NotFound { message, source }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap_conflict<E: Into<Cause>>(err: E) -> Self {
        let (message, source) = split(err);
        Self::Conflict { message, source }
    }

    pub fn geoserver(status: u16, server: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Geoserver {
            status,
            server: server.into(),
            body: body.into(),
            source: None,
        }
    }

    /// `Geoserver` error whose body is the message of `err`.
    pub fn wrap_geoserver<E: Into<Cause>>(status: u16, server: impl Into<String>, err: E) -> Self {
        let (body, source) = split(err);
        Self::Geoserver {
            status,
            server: server.into(),
            body,
            source,
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap_not_implemented<E: Into<Cause>>(err: E) -> Self {
        let (message, source) = split(err);
        Self::NotImplemented { message, source }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap_unsupported<E: Into<Cause>>(err: E) -> Self {
        let (message, source) = split(err);
        Self::Unsupported { message, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input { .. } => ErrorKind::Input,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Geoserver { .. } => ErrorKind::Geoserver,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::Transport(_) => ErrorKind::Transport,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Xml(_) => ErrorKind::Xml,
            Self::Tls(_) => ErrorKind::Tls,
        }
    }

    /// Returns `true` for the taxonomy kinds, `false` for raw pass-through errors.
    pub fn is_classified(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Input
                | ErrorKind::NotFound
                | ErrorKind::Conflict
                | ErrorKind::Geoserver
                | ErrorKind::NotImplemented
                | ErrorKind::Unsupported
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// HTTP status of a [`Error::Geoserver`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Geoserver { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ── Classification ──────────────────────────────────────────────────

/// What a request was aimed at, used to phrase classified errors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Target<'a> {
    pub kind: ResourceKind,
    pub name: &'a str,
    /// Enclosing resource for collection-level calls (create / list).
    pub parent: Option<(ResourceKind, &'a str)>,
}

/// Map a rejected response to an error kind.
///
/// - 404 on an item call is `NotFound` for the item; on a collection call it
///   is `NotFound` for the enclosing resource, when there is one.
/// - 409 is `Conflict`. GeoServer only sends it from a few create endpoints
///   (workspaces); everything else reports duplicates as a 500.
/// - Everything else is `Geoserver` with the raw body. 500 bodies are never
///   pattern-matched into conflicts.
pub(crate) fn classify(
    op: Operation,
    target: &Target<'_>,
    status: u16,
    server: &str,
    body: String,
) -> Error {
    match status {
        404 if op.is_item() => {
            Error::not_found(format!("{} {} not found", target.kind, target.name))
        }
        404 => match target.parent {
            Some((kind, name)) => Error::not_found(format!("{kind} {name} not found")),
            None => Error::geoserver(status, server, body),
        },
        409 => Error::conflict(format!("{} {} already exists", target.kind, target.name)),
        _ => Error::geoserver(status, server, body),
    }
}

fn split<E: Into<Cause>>(err: E) -> (String, Option<Cause>) {
    let cause = err.into();
    (cause.to_string(), Some(cause))
}
