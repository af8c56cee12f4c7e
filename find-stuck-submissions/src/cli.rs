use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use aplus_api::pacing::Pacing;
use clap::{Parser, ValueEnum};

use crate::scan::ScanOptions;
use crate::source::{InspectUrlStrategy, SubmissionSource};

#[derive(Parser, Debug)]
#[command(
    name = "find-stuck-submissions",
    version,
    about = "Find all recent submissions in an A+ course that are not \"ready\" or \"rejected\"."
)]
pub struct Cli {
    /// Only consider submissions that are less than S days old (full-detail source only)
    #[arg(long, value_name = "S", default_value_t = 1)]
    pub since: u32,

    /// The config YAML file with the API URL, the access token and the course id
    #[arg(long, value_name = "C", default_value = "find_stuck_submissions.yml")]
    pub config: PathBuf,

    /// The "inspect" URLs of the stuck submissions will be output in this file
    #[arg(long, value_name = "F", default_value = "stuck_submissions.txt")]
    pub urls_file: PathBuf,

    /// Where submissions are read from
    #[arg(long, value_enum, default_value_t = SourceKind::FullDetail)]
    pub source: SourceKind,

    /// How inspect URLs are built [default: submission-html for full-detail, exercise-html for flattened]
    #[arg(long, value_enum)]
    pub inspect_url: Option<InspectUrlStrategy>,

    /// Pause after fetching the exercise index, in seconds
    #[arg(long, value_name = "SECONDS", default_value = "1", value_parser = parse_delay)]
    pub index_delay: Duration,

    /// Pause after each submission request, in seconds
    #[arg(long, value_name = "SECONDS", default_value = "0.5", value_parser = parse_delay)]
    pub request_delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Fetch details of each recent, ungraded submission
    FullDetail,
    /// Read the bulk submission data of each exercise
    Flattened,
}

impl Cli {
    pub fn config(&self) -> &Path {
        &self.config
    }

    pub fn urls_file(&self) -> &Path {
        &self.urls_file
    }

    pub fn source(&self) -> SubmissionSource {
        match self.source {
            SourceKind::FullDetail => SubmissionSource::FullDetail {
                since_days: self.since,
            },
            SourceKind::Flattened => SubmissionSource::Flattened,
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::new(self.index_delay, self.request_delay)
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        ScanOptions::new(self.source(), self.inspect_url, self.pacing())
    }
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;
    Duration::try_from_secs_f64(seconds).map_err(|err| format!("`{value}`: {err}"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["find-stuck-submissions"]);

        assert_eq!(cli.config(), Path::new("find_stuck_submissions.yml"));
        assert_eq!(cli.urls_file(), Path::new("stuck_submissions.txt"));
        assert_eq!(cli.source(), SubmissionSource::FullDetail { since_days: 1 });
        assert_eq!(cli.inspect_url, None);
        assert_eq!(cli.pacing(), Pacing::default());
    }

    #[test]
    fn flattened_with_custom_delays() {
        let cli = Cli::parse_from([
            "find-stuck-submissions",
            "--source",
            "flattened",
            "--index-delay",
            "0",
            "--request-delay",
            "0.25",
            "--urls-file",
            "out.txt",
        ]);

        assert_eq!(cli.source(), SubmissionSource::Flattened);
        assert_eq!(
            cli.pacing(),
            Pacing::new(Duration::ZERO, Duration::from_millis(250))
        );
        let options = cli.scan_options().unwrap();
        assert_eq!(options.inspect_url, InspectUrlStrategy::ExerciseHtml);
    }

    #[test]
    fn since_must_be_an_integer() {
        assert!(Cli::try_parse_from(["find-stuck-submissions", "--since", "soon"]).is_err());
        assert!(Cli::try_parse_from(["find-stuck-submissions", "--since", "-1"]).is_err());
    }

    #[test]
    fn negative_delay_is_rejected() {
        assert!(Cli::try_parse_from(["find-stuck-submissions", "--request-delay", "-1"]).is_err());
    }

    #[test]
    fn flattened_with_submission_html_is_a_usage_error() {
        let cli = Cli::parse_from([
            "find-stuck-submissions",
            "--source",
            "flattened",
            "--inspect-url",
            "submission-html",
        ]);
        assert!(cli.scan_options().is_err());
    }
}
