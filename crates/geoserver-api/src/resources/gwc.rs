// GeoWebCache seeding
//
// Lives under `/geoserver/gwc/rest`, outside the main REST tree. Layers
// are addressed by qualified name (`ws:layer`); inside a workspace scope
// bare names are qualified automatically.

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::context::ConnectionContext;
use crate::envelope;
use crate::error::Error;
use crate::kind::{Operation, ResourceKind};
use crate::models::gwc::TaskArrays;
use crate::models::{KillScope, SeedRequest, SeedTask};
use crate::requester::{JSON, Requester};
use crate::validate::validate_segment;

#[derive(Debug, Clone)]
pub struct GeoWebCache {
    requester: Requester,
}

impl GeoWebCache {
    pub(crate) fn new(ctx: ConnectionContext) -> Self {
        Self {
            requester: Requester::root(ctx, ResourceKind::Seed),
        }
    }

    /// `layer` as GeoWebCache names it.
    pub fn qualify(&self, layer: &str) -> String {
        match self.requester.context().workspace() {
            Some(ws) if !layer.contains(':') => format!("{ws}:{layer}"),
            _ => layer.to_owned(),
        }
    }

    /// Queue a seed, reseed or truncate job. Returns once the job is
    /// accepted, not when it finishes.
    pub async fn seed(&self, request: &SeedRequest) -> Result<(), Error> {
        if request.name.trim().is_empty() {
            return Err(Error::input("layer name cannot be empty"));
        }
        if request.zoom_start > request.zoom_stop {
            return Err(Error::input(format!(
                "zoom start {} is above zoom stop {}",
                request.zoom_start, request.zoom_stop
            )));
        }

        let layer = self.qualify(&request.name);
        let mut request = request.clone();
        request.name.clone_from(&layer);

        let ctx = self.requester.context();
        let url = ctx.gwc_url(&["seed", &format!("{layer}.json")])?;
        debug!(layer = %layer, seed_type = ?request.seed_type, "POST {url}");

        let payload = envelope::wrap(ResourceKind::Seed.item_key(), &request)?;
        let http = ctx.http().post(url).json(&payload);
        self.requester.execute(Operation::Update, &layer, http).await?;
        Ok(())
    }

    /// Running and pending tasks for `layer`.
    pub async fn tasks(&self, layer: &str) -> Result<Vec<SeedTask>, Error> {
        validate_segment(layer)?;
        let layer = self.qualify(layer);
        let url = self
            .requester
            .context()
            .gwc_url(&["seed", &format!("{layer}.json")])?;
        self.fetch_tasks(&layer, url).await
    }

    /// Running and pending tasks for every layer.
    pub async fn all_tasks(&self) -> Result<Vec<SeedTask>, Error> {
        let url = self.requester.context().gwc_url(&["seed.json"])?;
        self.fetch_tasks("*", url).await
    }

    /// Kill tasks for `layer`.
    pub async fn terminate(&self, layer: &str, scope: KillScope) -> Result<(), Error> {
        let layer = self.qualify(layer);
        let ctx = self.requester.context();
        let url = ctx.gwc_url(&["seed", &layer])?;
        debug!(scope = scope.as_str(), "POST {url}");

        let http = ctx.http().post(url).form(&[("kill_all", scope.as_str())]);
        self.requester.execute(Operation::Update, &layer, http).await?;
        Ok(())
    }

    async fn fetch_tasks(&self, layer: &str, url: url::Url) -> Result<Vec<SeedTask>, Error> {
        debug!("GET {url}");
        let http = self.requester.context().http().get(url).header(ACCEPT, JSON);
        let body = self.requester.execute_text(Operation::Get, layer, http).await?;
        let arrays: TaskArrays = serde_json::from_str(&body)?;
        Ok(arrays.into_tasks())
    }
}
