use std::path::Path;

use anyhow::Result;
use aplus_api::client::Client;
use aplus_api::course::{CourseClient, CourseId};
use aplus_api::services::http_service::HttpService;
use tracing::info;

use crate::report::{write_urls, Summary};
use crate::scan::{find_stuck_submissions, ScanOptions};

pub mod cli;
pub mod report;
pub mod scan;
pub mod source;

/// Scans the course and writes the stuck submissions' inspect URLs to `urls_file`. Nothing is
/// written if the scan fails.
pub async fn run<S: HttpService + Clone>(
    aplus: Client<S>,
    course_id: &CourseId,
    options: &ScanOptions,
    urls_file: &Path,
) -> Result<Summary> {
    let aplus = match options.source.forced_query() {
        Some((key, value)) => aplus.with_forced_query(key, value),
        None => aplus,
    };
    let course = CourseClient::new(&aplus, course_id);

    let stuck_urls = find_stuck_submissions(&course, options).await?;
    write_urls(urls_file, &stuck_urls).await?;
    info!(count = stuck_urls.len(), path = %urls_file.display(), "wrote stuck submission URLs");

    Ok(Summary::new(stuck_urls.len(), urls_file.to_owned()))
}
