//! DataForSEO wire types.

use serde::{Deserialize, Serialize};

/// Search engine location: United States.
pub const LOCATION_CODE: u32 = 2840;
pub const LANGUAGE_CODE: &str = "en";
pub const DEVICE: &str = "desktop";

/// Request or task completed successfully.
pub const STATUS_OK: u32 = 20000;
/// Task accepted for processing.
pub const STATUS_TASK_CREATED: u32 = 20100;
/// Task handed to a worker, results pending.
pub const STATUS_TASK_HANDED: u32 = 40601;
/// Task queued, results pending.
pub const STATUS_TASK_IN_QUEUE: u32 = 40602;

/// One entry of the `task_post` body array.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPostInput<'a> {
    pub keyword: &'a str,
    pub location_code: u32,
    pub language_code: &'a str,
    pub device: &'a str,
}

impl<'a> TaskPostInput<'a> {
    pub fn new(keyword: &'a str) -> Self {
        Self {
            keyword,
            location_code: LOCATION_CODE,
            language_code: LANGUAGE_CODE,
            device: DEVICE,
        }
    }
}

/// Envelope shared by every DataForSEO response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status_code: u32,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "Vec::new")]
    pub tasks: Vec<Task<T>>,
}

/// A single task inside a response.
#[derive(Debug, Clone, Deserialize)]
pub struct Task<T> {
    pub id: String,
    pub status_code: u32,
    #[serde(default)]
    pub status_message: String,
    pub result: Option<Vec<T>>,
}

impl<T> Task<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self.status_code, STATUS_TASK_HANDED | STATUS_TASK_IN_QUEUE)
    }
}

/// Result set of an organic SERP task.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    pub items: Option<Vec<OrganicItem>>,
}

/// One SERP item. Only organic items carry a domain reliably.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicItem {
    pub domain: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}
