// Per-kind request layer
//
// A `Requester` knows one resource kind and the collection path it lives
// under. It builds the URL, attaches credentials and headers, wraps or
// unwraps the JSON envelope and classifies every rejected response. Each
// operation is exactly one HTTP round trip: nothing is retried or cached.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::context::ConnectionContext;
use crate::envelope;
use crate::error::{Error, Target, classify};
use crate::kind::{Operation, ResourceKind};
use crate::models::ResourceRef;

pub(crate) const JSON: &str = "application/json";

/// Query pairs appended to a request.
pub(crate) type Query<'a> = &'a [(&'a str, String)];

#[derive(Debug, Clone)]
pub(crate) struct Requester {
    ctx: ConnectionContext,
    kind: ResourceKind,
    /// Segments below `/rest`, e.g. `["workspaces", "WS", "datastores"]`.
    collection: Vec<String>,
    /// Innermost enclosing resource, named in 404s on collection calls.
    parent: Option<(ResourceKind, String)>,
}

impl Requester {
    /// Requester for a root-level collection (`/rest/{kind}`).
    pub(crate) fn root(ctx: ConnectionContext, kind: ResourceKind) -> Self {
        Self::nested(ctx, kind, &[])
    }

    /// Requester for a collection nested under `parents`, outermost first:
    /// `[(Workspace, "WS"), (DataStore, "DS")]` gives
    /// `/rest/workspaces/WS/datastores/DS/{kind}`.
    pub(crate) fn nested(
        ctx: ConnectionContext,
        kind: ResourceKind,
        parents: &[(ResourceKind, &str)],
    ) -> Self {
        let mut collection = Vec::with_capacity(parents.len() * 2 + 1);
        for (parent_kind, name) in parents {
            collection.push(parent_kind.path_segment().to_owned());
            collection.push((*name).to_owned());
        }
        collection.push(kind.path_segment().to_owned());

        Self {
            ctx,
            kind,
            collection,
            parent: parents
                .last()
                .map(|(parent_kind, name)| (*parent_kind, (*name).to_owned())),
        }
    }

    pub(crate) fn context(&self) -> &ConnectionContext {
        &self.ctx
    }

    // ── URL builders ─────────────────────────────────────────────────

    pub(crate) fn collection_url(&self) -> Result<Url, Error> {
        let segments: Vec<&str> = self.collection.iter().map(String::as_str).collect();
        self.ctx.rest_url(&segments)
    }

    /// `{collection}/{name}[/{suffix...}]`
    pub(crate) fn item_url(&self, name: &str, suffix: &[&str]) -> Result<Url, Error> {
        let mut segments: Vec<&str> = self.collection.iter().map(String::as_str).collect();
        segments.push(name);
        segments.extend_from_slice(suffix);
        self.ctx.rest_url(&segments)
    }

    fn target<'a>(&'a self, name: &'a str) -> Target<'a> {
        Target {
            kind: self.kind,
            name,
            parent: self
                .parent
                .as_ref()
                .map(|(kind, parent)| (*kind, parent.as_str())),
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Attach credentials, send, and classify. Returns the response only
    /// when `op` accepts its status; transport errors pass through raw.
    pub(crate) async fn execute(
        &self,
        op: Operation,
        name: &str,
        request: RequestBuilder,
    ) -> Result<Response, Error> {
        let resp = self.ctx.authorize(request).send().await?;
        let status = resp.status();
        if op.accepts(status) {
            return Ok(resp);
        }

        let server = resp.url().origin().ascii_serialization();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, status = status.as_u16(), "failed to read error body");
                String::new()
            }
        };
        warn!(
            kind = %self.kind,
            name,
            status = status.as_u16(),
            ?op,
            "request rejected by server"
        );
        Err(classify(op, &self.target(name), status.as_u16(), &server, body))
    }

    pub(crate) async fn execute_text(
        &self,
        op: Operation,
        name: &str,
        request: RequestBuilder,
    ) -> Result<String, Error> {
        let resp = self.execute(op, name, request).await?;
        Ok(resp.text().await?)
    }

    // ── Operations ───────────────────────────────────────────────────

    /// `POST {collection}` with `{item_key: body}`.
    pub(crate) async fn create<B: Serialize + ?Sized>(
        &self,
        name: &str,
        body: &B,
        query: Query<'_>,
    ) -> Result<(), Error> {
        let url = self.collection_url()?;
        debug!("POST {url}");

        let payload = envelope::wrap(self.kind.item_key(), body)?;
        let request = self.ctx.http().post(url).query(query).json(&payload);
        self.execute(Operation::Create, name, request).await?;
        Ok(())
    }

    /// `POST {collection}` with a non-JSON body (SLD documents).
    pub(crate) async fn create_raw(
        &self,
        name: &str,
        content_type: &str,
        body: String,
        query: Query<'_>,
    ) -> Result<(), Error> {
        let url = self.collection_url()?;
        debug!("POST {url}");

        let request = self
            .ctx
            .http()
            .post(url)
            .query(query)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.execute(Operation::Create, name, request).await?;
        Ok(())
    }

    /// `GET {collection}/{name}`, unwrapping `{item_key: {...}}`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        let url = self.item_url(name, &[])?;
        debug!("GET {url}");

        let request = self.ctx.http().get(url).header(ACCEPT, JSON);
        let body = self.execute_text(Operation::Get, name, request).await?;
        envelope::decode_item(&body, self.kind.item_key())
    }

    /// `GET {collection}`. An empty listing decodes to an empty vec.
    pub(crate) async fn get_all(&self) -> Result<Vec<ResourceRef>, Error> {
        self.list(&[], self.kind.collection_key(), self.kind.item_key())
            .await
    }

    /// `GET {collection}?{query}` decoding `{plural: {singular: [...]}}`.
    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        query: Query<'_>,
        plural: &str,
        singular: &str,
    ) -> Result<Vec<T>, Error> {
        let url = self.collection_url()?;
        debug!("GET {url}");

        let request = self.ctx.http().get(url).query(query).header(ACCEPT, JSON);
        let body = self
            .execute_text(Operation::List, self.kind.collection_key(), request)
            .await?;
        envelope::decode_collection(&body, plural, singular)
    }

    /// `PUT {collection}/{name}` with `{item_key: body}`.
    pub(crate) async fn update<B: Serialize + ?Sized>(
        &self,
        name: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.item_url(name, &[])?;
        debug!("PUT {url}");

        let payload = envelope::wrap(self.kind.item_key(), body)?;
        let request = self.ctx.http().put(url).json(&payload);
        self.execute(Operation::Update, name, request).await?;
        Ok(())
    }

    /// `PUT {collection}/{name}` with a non-JSON body.
    pub(crate) async fn update_raw(
        &self,
        name: &str,
        content_type: &str,
        body: String,
    ) -> Result<(), Error> {
        let url = self.item_url(name, &[])?;
        debug!("PUT {url}");

        let request = self
            .ctx
            .http()
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.execute(Operation::Update, name, request).await?;
        Ok(())
    }

    /// `DELETE {collection}/{name}?{query}`
    pub(crate) async fn delete(&self, name: &str, query: Query<'_>) -> Result<(), Error> {
        let url = self.item_url(name, &[])?;
        debug!("DELETE {url} params={query:?}");

        let request = self.ctx.http().delete(url).query(query);
        self.execute(Operation::Delete, name, request).await?;
        Ok(())
    }

    /// `PUT {collection}/{name}/reset`: drop cached state for the resource.
    pub(crate) async fn reset(&self, name: &str) -> Result<(), Error> {
        let url = self.item_url(name, &["reset"])?;
        debug!("PUT {url}");

        let request = self.ctx.http().put(url);
        self.execute(Operation::Reset, name, request).await?;
        Ok(())
    }

    // ── Singletons ───────────────────────────────────────────────────

    /// `GET /rest/{segments}` for resources with no collection
    /// (`/logging`, `/fonts`, `/about/version`).
    pub(crate) async fn get_singleton_text(&self, segments: &[&str]) -> Result<String, Error> {
        let url = self.ctx.rest_url(segments)?;
        debug!("GET {url}");

        let request = self.ctx.http().get(url).header(ACCEPT, JSON);
        self.execute_text(Operation::Get, self.kind.label(), request)
            .await
    }

    /// `PUT /rest/{segments}` with `{item_key: body}`.
    pub(crate) async fn update_singleton<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<(), Error> {
        let url = self.ctx.rest_url(segments)?;
        debug!("PUT {url}");

        let payload = envelope::wrap(self.kind.item_key(), body)?;
        let request = self.ctx.http().put(url).json(&payload);
        self.execute(Operation::Update, self.kind.label(), request)
            .await?;
        Ok(())
    }
}
