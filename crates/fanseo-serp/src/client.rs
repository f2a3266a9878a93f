//! DataForSEO HTTP client.
//!
//! Uses the Google organic SERP task API with a fixed locale
//! (United States, English, desktop). Every call carries the same
//! basic-auth credential pair.

use std::time::Duration;

use async_trait::async_trait;
use fanseo_core::{Credentials, SearchProvider, SearchResultItem, SerpListing, SerpSettings};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{SerpError, SerpResult};
use crate::types::{
    ApiResponse, OrganicItem, OrganicResult, Task, TaskPostInput, STATUS_OK, STATUS_TASK_CREATED,
};

/// DataForSEO organic search client.
#[derive(Clone)]
pub struct DataForSeoClient {
    base_url: String,
    credentials: Credentials,
    initial_wait: Duration,
    poll_attempts: u32,
    client: reqwest::Client,
}

/// Outcome of a single `task_get`.
enum TaskState {
    Ready(SerpListing),
    Pending,
}

impl DataForSeoClient {
    /// Create a client with explicit credentials.
    pub fn new(credentials: Credentials, settings: &SerpSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .unwrap_or_default();

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials,
            initial_wait: settings.initial_wait,
            poll_attempts: settings.poll_attempts.max(1),
            client,
        }
    }

    /// Create a client if both credential halves are configured.
    pub fn from_settings(settings: &SerpSettings) -> Option<Self> {
        settings
            .credentials()
            .map(|credentials| Self::new(credentials, settings))
    }

    /// Submit a search task, wait, and collect its organic results.
    pub async fn search_organic(&self, keyword: &str) -> SerpResult<SerpListing> {
        let task_id = self.submit_task(keyword).await?;
        info!(keyword, task_id = %task_id, "DataForSEO task submitted");

        let listing = self.wait_for_task(&task_id).await?;
        info!(
            keyword,
            task_id = %task_id,
            items = listing.items.len(),
            cost = listing.cost,
            "DataForSEO results fetched"
        );

        Ok(listing)
    }

    /// Post a task. Returns the task id when the provider accepts it.
    pub async fn submit_task(&self, keyword: &str) -> SerpResult<String> {
        let body = [TaskPostInput::new(keyword)];

        let response = self
            .client
            .post(format!("{}/serp/google/organic/task_post", self.base_url))
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .json(&body)
            .send()
            .await?;

        let api: ApiResponse<serde_json::Value> = parse_response(response).await?;
        let task = first_task(api)?;

        if task.status_code != STATUS_TASK_CREATED && task.status_code != STATUS_OK {
            return Err(SerpError::Provider {
                code: task.status_code,
                message: task.status_message,
            });
        }

        Ok(task.id)
    }

    /// Sleep, then retrieve; repeat while the task is pending and attempts remain.
    async fn wait_for_task(&self, task_id: &str) -> SerpResult<SerpListing> {
        for attempt in 1..=self.poll_attempts {
            tokio::time::sleep(self.initial_wait).await;

            match self.fetch_task(task_id).await? {
                TaskState::Ready(listing) => return Ok(listing),
                TaskState::Pending => {
                    debug!(task_id, attempt, "DataForSEO task still pending");
                }
            }
        }

        Err(SerpError::NotReady(task_id.to_string()))
    }

    async fn fetch_task(&self, task_id: &str) -> SerpResult<TaskState> {
        let response = self
            .client
            .get(format!(
                "{}/serp/google/organic/task_get/{}",
                self.base_url, task_id
            ))
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .send()
            .await?;

        let api: ApiResponse<OrganicResult> = parse_response(response).await?;
        let cost = api.cost;
        let task = first_task(api)?;

        if task.is_pending() {
            return Ok(TaskState::Pending);
        }
        if task.status_code != STATUS_OK {
            return Err(SerpError::Provider {
                code: task.status_code,
                message: task.status_message,
            });
        }

        let items: Vec<SearchResultItem> = task
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.items)
            .unwrap_or_default()
            .into_iter()
            .map(to_result_item)
            .collect();

        if items.is_empty() {
            return Err(SerpError::NoResults(task_id.to_string()));
        }

        Ok(TaskState::Ready(SerpListing { items, cost }))
    }
}

#[async_trait]
impl SearchProvider for DataForSeoClient {
    async fn organic_results(&self, keyword: &str) -> Option<SerpListing> {
        match self.search_organic(keyword).await {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!(keyword, error = %e, "DataForSEO lookup failed");
                None
            }
        }
    }
}

/// Check HTTP and provider-level status, then decode.
async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> SerpResult<ApiResponse<T>> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SerpError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let api: ApiResponse<T> = response.json().await?;
    if api.status_code != STATUS_OK {
        return Err(SerpError::Provider {
            code: api.status_code,
            message: api.status_message,
        });
    }

    Ok(api)
}

fn first_task<T>(api: ApiResponse<T>) -> SerpResult<Task<T>> {
    api.tasks.into_iter().next().ok_or(SerpError::NoTask)
}

fn to_result_item(item: OrganicItem) -> SearchResultItem {
    SearchResultItem {
        domain: item.domain,
        title: item.title,
        url: item.url,
    }
}
