use anyhow::{bail, Context, Result};
use aplus_api::course::CourseClient;
use aplus_api::exercise::ExerciseEntry;
use aplus_api::services::http_service::HttpService;
use aplus_api::submission::{SubmissionId, SubmissionStatus};
use clap::ValueEnum;
use tracing::{debug, info, trace};
use url::Url;

use crate::scan::ScanOptions;

/// Where the submissions of an exercise come from, and which of them are considered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionSource {
    /// Lists every submission, then fetches details of the ungraded ones younger than
    /// `since_days`.
    FullDetail { since_days: u32 },
    /// One bulk submission data request per exercise. No grade or age filtering.
    Flattened,
}

impl SubmissionSource {
    pub fn default_inspect_url(&self) -> InspectUrlStrategy {
        match self {
            Self::FullDetail { .. } => InspectUrlStrategy::SubmissionHtml,
            Self::Flattened => InspectUrlStrategy::ExerciseHtml,
        }
    }

    pub fn check_inspect_url(&self, strategy: InspectUrlStrategy) -> Result<()> {
        if *self == Self::Flattened && strategy == InspectUrlStrategy::SubmissionHtml {
            bail!("`submission-html` inspect URLs need submission details, which the flattened source never fetches");
        }
        Ok(())
    }

    /// Query parameter the client must send on every request for this source.
    pub fn forced_query(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::FullDetail { .. } => None,
            Self::Flattened => Some(("format", "json")),
        }
    }

    pub async fn stuck_in_exercise<S: HttpService + Clone>(
        &self,
        course: &CourseClient<'_, S>,
        entry: &ExerciseEntry,
        options: &ScanOptions,
    ) -> Result<Vec<Url>> {
        match *self {
            Self::FullDetail { since_days } => {
                full_detail(course, entry, since_days, options).await
            }
            Self::Flattened => flattened(course, entry, options).await,
        }
    }
}

async fn full_detail<S: HttpService + Clone>(
    course: &CourseClient<'_, S>,
    entry: &ExerciseEntry,
    since_days: u32,
    options: &ScanOptions,
) -> Result<Vec<Url>> {
    let aplus = course.aplus();
    let exercise = aplus.get_exercise(entry).await?;
    let summaries = aplus.get_submission_summaries(&exercise).await?;
    debug!(exercise = exercise.display_name(), count = summaries.len(), "got submissions");

    let mut stuck_urls = Vec::new();
    for summary in &summaries {
        if !summary.is_ungraded() {
            trace!(url = %summary.url(), grade = ?summary.grade(), "skipping graded submission");
            continue;
        }
        let age_days = summary.age_days(&options.now);
        if age_days >= i64::from(since_days) {
            trace!(url = %summary.url(), age_days, "skipping old submission");
            continue;
        }

        let submission = aplus.get_submission(summary).await?;
        options.pacing.pause_between_requests().await;

        if let Some(url) = stuck_url(
            options.inspect_url,
            exercise.html_url(),
            submission.id(),
            submission.status(),
            Some(submission.html_url()),
        )? {
            stuck_urls.push(url);
        }
    }

    Ok(stuck_urls)
}

async fn flattened<S: HttpService + Clone>(
    course: &CourseClient<'_, S>,
    entry: &ExerciseEntry,
    options: &ScanOptions,
) -> Result<Vec<Url>> {
    let rows = course
        .submission_data(entry.id())
        .await
        .with_context(|| format!("could not get submission data of `{}`", entry.display_name()))?;
    options.pacing.pause_between_requests().await;
    debug!(exercise = entry.display_name(), count = rows.len(), "got submission data");

    let mut stuck_urls = Vec::new();
    for row in &rows {
        if let Some(url) = stuck_url(
            options.inspect_url,
            entry.html_url(),
            row.id(),
            row.status(),
            None,
        )? {
            stuck_urls.push(url);
        }
    }

    Ok(stuck_urls)
}

fn stuck_url(
    strategy: InspectUrlStrategy,
    exercise_html_url: &str,
    submission_id: &SubmissionId,
    status: &SubmissionStatus,
    submission_html_url: Option<&str>,
) -> Result<Option<Url>> {
    if !status.is_stuck() {
        trace!(%submission_id, %status, "submission is settled");
        return Ok(None);
    }

    let url = strategy.inspect_url(exercise_html_url, submission_id, submission_html_url)?;
    info!(%submission_id, %status, %url, "found stuck submission");
    Ok(Some(url))
}

/// How the "inspect" page of a submission is located. The two ways come from different
/// endpoints and are not guaranteed to agree, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectUrlStrategy {
    /// The submission's own `html_url` followed by `inspect/`.
    SubmissionHtml,
    /// The exercise's `html_url`, the submission id, then `/inspect/`.
    ExerciseHtml,
}

impl InspectUrlStrategy {
    pub fn inspect_url(
        self,
        exercise_html_url: &str,
        submission_id: &SubmissionId,
        submission_html_url: Option<&str>,
    ) -> Result<Url> {
        let inspect_url = match self {
            Self::SubmissionHtml => {
                let html_url = submission_html_url
                    .with_context(|| format!("no HTML URL for submission {submission_id}"))?;
                format!("{html_url}inspect/")
            }
            Self::ExerciseHtml => format!("{exercise_html_url}{submission_id}/inspect/"),
        };
        Url::parse(&inspect_url).with_context(|| format!("invalid inspect URL `{inspect_url}`"))
    }
}
