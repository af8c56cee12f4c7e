use std::collections::HashSet;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use tracing::{debug, error};
use url::Url;

use crate::creds::AccessToken;
use crate::error::{status_hint, ApiError};
use crate::exercise::{Exercise, ExerciseEntry};
use crate::services::api_service::ApiRequest;
use crate::services::http_service::{self, http_client, HttpService};
use crate::submission::{Submission, SubmissionSummary};
use crate::types::Page;

/// Connects to the real API over HTTP.
pub fn client(token: AccessToken, api_url: Url) -> Result<Client<impl HttpService + Clone>> {
    let service = http_service::service(http_client()?);
    Ok(Client::new(service, token, api_url))
}

#[derive(Debug, Clone)]
pub struct Client<S> {
    service: S,
    token: AccessToken,
    api_url: Url,
    forced_query: Vec<(String, String)>,
}

impl<S> Client<S> {
    pub fn new(service: S, token: AccessToken, api_url: Url) -> Self {
        Self {
            service,
            token,
            api_url,
            forced_query: Vec::new(),
        }
    }

    /// Adds a query parameter to every request this client sends, including followed pages.
    pub fn with_forced_query(mut self, key: &str, value: &str) -> Self {
        self.forced_query.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn forced_query(&self) -> &[(String, String)] {
        &self.forced_query
    }
}

impl<S: HttpService + Clone> Client<S> {
    /// Anything but `200 OK` is an [`ApiError::Status`].
    #[tracing::instrument(level = "debug", skip(self, request), fields(url = %request.url()))]
    pub async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let http_request = request.http_request(&self.token, &self.forced_query)?;
        let requested = http_request.url().clone();
        debug!(url = %requested, "sending API request");

        let response = self
            .service
            .clone()
            .oneshot(http_request)
            .await
            .with_context(|| format!("API request to {requested} failed"))?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(
                url = %requested,
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or("unknown"),
                hint = status_hint(status).unwrap_or(""),
                "API responded with an error"
            );
            return Err(ApiError::Status {
                url: requested,
                status,
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("could not decode JSON from {requested}"))
    }

    /// Follows `next` links until it is null, concatenating `results` in page order.
    pub async fn get_paginated<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<T>> {
        let mut results = Vec::new();
        let mut fetched = HashSet::new();
        let mut next = Some(request);

        while let Some(request) = next {
            if !fetched.insert(request.url().clone()) {
                return Err(ApiError::PaginationLoop {
                    url: request.url().clone(),
                }
                .into());
            }

            let page: Page<T> = self.get_json(request.clone()).await?;
            debug!(url = %request.url(), count = page.results.len(), "fetched page");
            results.extend(page.results);
            next = page.next.map(|url| request.with_url(url));
        }

        Ok(results)
    }

    pub async fn get_exercise(&self, entry: &ExerciseEntry) -> Result<Exercise> {
        self.get_json(ApiRequest::new(entry.url().clone()))
            .await
            .with_context(|| format!("could not get exercise `{}`", entry.display_name()))
    }

    pub async fn get_submission_summaries(
        &self,
        exercise: &Exercise,
    ) -> Result<Vec<SubmissionSummary>> {
        self.get_paginated(ApiRequest::new(exercise.submissions().clone()))
            .await
            .with_context(|| {
                format!("could not list submissions of `{}`", exercise.display_name())
            })
    }

    pub async fn get_submission(&self, summary: &SubmissionSummary) -> Result<Submission> {
        self.get_json(ApiRequest::new(summary.url().clone()))
            .await
            .with_context(|| format!("could not get submission {}", summary.url()))
    }
}
