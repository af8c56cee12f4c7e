use anyhow::{Context, Result};
use aplus_api::course::CourseClient;
use aplus_api::pacing::Pacing;
use aplus_api::services::http_service::HttpService;
use chrono::{DateTime, Utc};
use tracing::debug;
use url::Url;

use crate::source::{InspectUrlStrategy, SubmissionSource};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub source: SubmissionSource,
    pub inspect_url: InspectUrlStrategy,
    pub pacing: Pacing,
    /// Submission ages are measured against this single instant.
    pub now: DateTime<Utc>,
}

impl ScanOptions {
    /// Without an explicit strategy, the source's own way of building inspect URLs is used.
    pub fn new(
        source: SubmissionSource,
        inspect_url: Option<InspectUrlStrategy>,
        pacing: Pacing,
    ) -> Result<Self> {
        let inspect_url = inspect_url.unwrap_or_else(|| source.default_inspect_url());
        source.check_inspect_url(inspect_url)?;

        Ok(Self {
            source,
            inspect_url,
            pacing,
            now: Utc::now(),
        })
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Walks rounds, exercises and submissions in listing order and collects the inspect URLs of
/// every submission that is neither ready nor rejected.
#[tracing::instrument(skip_all, fields(course_id = %course.course_id(), source = ?options.source))]
pub async fn find_stuck_submissions<S: HttpService + Clone>(
    course: &CourseClient<'_, S>,
    options: &ScanOptions,
) -> Result<Vec<Url>> {
    println!("Fetching the exercises index");
    let rounds = course
        .exercise_index()
        .await
        .context("could not fetch the exercises index")?;
    options.pacing.pause_after_index().await;

    let mut stuck_urls = Vec::new();
    for round in &rounds {
        println!("Scanning round: {}", round.display_name());
        for entry in round.exercises() {
            println!("  Scanning exercise: {}", entry.display_name());
            let urls = options
                .source
                .stuck_in_exercise(course, entry, options)
                .await?;
            debug!(exercise = entry.display_name(), stuck = urls.len(), "scanned exercise");
            stuck_urls.extend(urls);
        }
    }

    Ok(stuck_urls)
}
