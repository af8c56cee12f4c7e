use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Deserialize;
use serde_with::serde_as;
use url::Url;

use crate::types::id_as_int;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct SubmissionId {
    id: String,
}

impl SubmissionId {
    pub fn new(id: String) -> Self {
        Self { id }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.id.fmt(f)
    }
}

id_as_int!(pub(crate) SubmissionIdAsInt, SubmissionId);

/// Grading state of a submission. Anything the API adds later lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SubmissionStatus {
    Ready,
    Rejected,
    Initialized,
    Waiting,
    Error,
    Unofficial,
    Other(String),
}

impl SubmissionStatus {
    /// Neither fully processed nor explicitly failed.
    pub fn is_stuck(&self) -> bool {
        !matches!(self, Self::Ready | Self::Rejected)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "ready",
            Self::Rejected => "rejected",
            Self::Initialized => "initialized",
            Self::Waiting => "waiting",
            Self::Error => "error",
            Self::Unofficial => "unofficial",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for SubmissionStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "ready" => Self::Ready,
            "rejected" => Self::Rejected,
            "initialized" => Self::Initialized,
            "waiting" => Self::Waiting,
            "error" => Self::Error,
            "unofficial" => Self::Unofficial,
            _ => Self::Other(status),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of an exercise's submission listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionSummary {
    url: Url,
    #[serde(default)]
    grade: Option<f64>,
    submission_time: DateTime<FixedOffset>,
}

impl SubmissionSummary {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn grade(&self) -> Option<f64> {
        self.grade
    }

    pub fn submission_time(&self) -> DateTime<FixedOffset> {
        self.submission_time
    }

    pub fn is_ungraded(&self) -> bool {
        matches!(self.grade, Some(grade) if grade == 0.0)
    }

    /// Whole days elapsed at `now`, rounded down.
    pub fn age_days<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> i64 {
        now.clone()
            .signed_duration_since(self.submission_time)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
    }
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde_as(as = "SubmissionIdAsInt")]
    id: SubmissionId,
    html_url: String,
    status: SubmissionStatus,
}

impl Submission {
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }
}

/// A row of the flattened submission data endpoint.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionDataRow {
    #[serde(rename = "SubmissionID")]
    #[serde_as(as = "SubmissionIdAsInt")]
    id: SubmissionId,
    #[serde(rename = "Status")]
    status: SubmissionStatus,
}

impl SubmissionDataRow {
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }
}
