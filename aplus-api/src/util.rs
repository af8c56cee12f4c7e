use anyhow::{Context, Result};
use url::Url;

use crate::course::CourseId;

pub const EXERCISES_COURSE_PATH: &str = "/exercises";
pub const SUBMISSION_DATA_COURSE_PATH: &str = "/submissiondata/";

/// Joins by concatenation so a base like `https://host/api/v2` keeps its last segment.
pub fn api_endpoint(api_url: &Url, path: &str) -> Result<Url> {
    let endpoint = format!("{}{path}", api_url.as_str().trim_end_matches('/'));
    Url::parse(&endpoint).with_context(|| format!("invalid API endpoint `{endpoint}`"))
}

pub fn api_course_endpoint(api_url: &Url, course_id: &CourseId, path: &str) -> Result<Url> {
    api_endpoint(api_url, &format!("/courses/{course_id}{path}"))
}
