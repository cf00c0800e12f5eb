// GeoWebCache seeding types
//
// Seed requests go out as `{"seedRequest": {...}}`. Running tasks come
// back as a bare array of five-number arrays under `long-array-array`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedType {
    #[default]
    Seed,
    Reseed,
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Srs {
    /// EPSG code.
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedBounds {
    pub coords: SeedCoords,
}

/// `[minx, miny, maxx, maxy]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedCoords {
    pub double: [f64; 4],
}

/// Body of `POST /gwc/rest/seed/{layer}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRequest {
    /// Qualified layer name (`ws:layer`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs: Option<Srs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<SeedBounds>,
    pub zoom_start: u32,
    pub zoom_stop: u32,
    pub format: String,
    #[serde(rename = "type")]
    pub seed_type: SeedType,
    pub thread_count: u32,
}

impl SeedRequest {
    pub fn new(
        layer: impl Into<String>,
        seed_type: SeedType,
        zoom_start: u32,
        zoom_stop: u32,
    ) -> Self {
        Self {
            name: layer.into(),
            grid_set_id: None,
            srs: None,
            bounds: None,
            zoom_start,
            zoom_stop,
            format: "image/png".into(),
            seed_type,
            thread_count: 1,
        }
    }

    pub fn grid_set(mut self, grid_set_id: impl Into<String>) -> Self {
        self.grid_set_id = Some(grid_set_id.into());
        self
    }

    pub fn srs(mut self, epsg: u32) -> Self {
        self.srs = Some(Srs { number: epsg });
        self
    }

    pub fn bounds(mut self, minx: f64, miny: f64, maxx: f64, maxy: f64) -> Self {
        self.bounds = Some(SeedBounds {
            coords: SeedCoords {
                double: [minx, miny, maxx, maxy],
            },
        });
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn threads(mut self, thread_count: u32) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// State code reported for each task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Aborted,
    Pending,
    Running,
    Done,
    Unknown(i64),
}

impl From<i64> for TaskStatus {
    fn from(code: i64) -> Self {
        match code {
            -1 => Self::Aborted,
            0 => Self::Pending,
            1 => Self::Running,
            2 => Self::Done,
            other => Self::Unknown(other),
        }
    }
}

/// One running or queued seed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTask {
    pub tiles_processed: i64,
    /// `-1` while the total is still being computed.
    pub total_tiles: i64,
    pub remaining_secs: i64,
    pub task_id: i64,
    pub status: TaskStatus,
}

/// `{"long-array-array": [[processed, total, remaining, id, status], ...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct TaskArrays {
    #[serde(rename = "long-array-array", default)]
    pub tasks: Vec<[i64; 5]>,
}

impl TaskArrays {
    pub(crate) fn into_tasks(self) -> Vec<SeedTask> {
        self.tasks
            .into_iter()
            .map(
                |[tiles_processed, total_tiles, remaining_secs, task_id, status]| SeedTask {
                    tiles_processed,
                    total_tiles,
                    remaining_secs,
                    task_id,
                    status: TaskStatus::from(status),
                },
            )
            .collect()
    }
}

/// Which tasks a terminate call kills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KillScope {
    Running,
    Pending,
    #[default]
    All,
}

impl KillScope {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Pending => "pending",
            Self::All => "all",
        }
    }
}
