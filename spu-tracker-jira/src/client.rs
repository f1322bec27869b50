//! An authenticated connection to one Jira instance.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use spu_core::config::InstanceConfig;
use spu_core::tracker::{Board, Filter, Issue, Sprint, Tracker};
use spu_core::{SpuError, SpuResult};
use url::Url;

use crate::api;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct JiraClient {
    http: reqwest::Client,
    base: Url,
    username: String,
    password: String,
}

impl JiraClient {
    pub fn new(instance: &InstanceConfig) -> Result<Self> {
        let mut base = Url::parse(&instance.server)
            .with_context(|| format!("Invalid Jira server URL: {}", instance.server))?;

        // Without the trailing slash `join` would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!instance.verify)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(JiraClient {
            http,
            base,
            username: instance.username.clone(),
            password: instance.password.clone(),
        })
    }

    pub fn server(&self) -> &Url {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base
            .join(path)
            .with_context(|| format!("Invalid API path: {}", path))?;

        Ok(self
            .http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json"))
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!("{} {}", method, path);

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send {} {}", method, path))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} {} returned {}: {}", method, path, status, body);
        }

        Ok(response)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.request(Method::GET, path)?.query(query);
        let response = self.send(Method::GET, path, request).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response of GET {}", path))
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::POST, path)?.json(body);
        let response = self.send(Method::POST, path, request).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response of POST {}", path))
    }

    /// PUT whose response body is not needed.
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::PUT, path)?.json(body);
        self.send(Method::PUT, path, request).await?;
        Ok(())
    }
}

fn tracker_error(e: anyhow::Error) -> SpuError {
    SpuError::Tracker(format!("{:#}", e))
}

impl Tracker for JiraClient {
    async fn list_boards(&self) -> SpuResult<BTreeMap<String, u64>> {
        api::list_boards(self).await.map_err(tracker_error)
    }

    async fn list_favorite_filters(&self) -> SpuResult<Vec<Filter>> {
        api::list_favorite_filters(self).await.map_err(tracker_error)
    }

    async fn create_filter(&self, name: &str, jql: &str, favorite: bool) -> SpuResult<Filter> {
        api::create_filter(self, name, jql, favorite)
            .await
            .map_err(tracker_error)
    }

    async fn update_filter(&self, filter_id: u64, name: &str, jql: &str) -> SpuResult<()> {
        api::update_filter(self, filter_id, name, jql)
            .await
            .map_err(tracker_error)
    }

    async fn create_board(
        &self,
        name: &str,
        project: Option<&str>,
        filter_id: u64,
    ) -> SpuResult<Board> {
        api::create_board(self, name, project, filter_id)
            .await
            .map_err(tracker_error)
    }

    async fn create_sprint(&self, board_id: u64, name: &str) -> SpuResult<Sprint> {
        api::create_sprint(self, board_id, name)
            .await
            .map_err(tracker_error)
    }

    async fn create_issue(
        &self,
        project: &str,
        summary: &str,
        labels: &[String],
        issue_type: &str,
    ) -> SpuResult<Issue> {
        api::create_issue(self, project, summary, labels, issue_type)
            .await
            .map_err(tracker_error)
    }
}
