use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Failures reported by the API itself, as opposed to transport or decoding failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("requested {url}: {status}{}", hint_suffix(.status))]
    Status { url: Url, status: StatusCode },

    #[error("pagination loops back to already fetched page {url}")]
    PaginationLoop { url: Url },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::PaginationLoop { .. } => None,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.status().and_then(status_hint)
    }
}

pub fn status_hint(status: StatusCode) -> Option<&'static str> {
    if status.is_redirection() {
        Some("Did you set the API URL correctly?")
    } else if status == StatusCode::UNAUTHORIZED {
        Some("Did you set the API access token correctly?")
    } else if status == StatusCode::NOT_FOUND {
        Some("Are the API URL and the course and exercise ids correct?")
    } else {
        None
    }
}

fn hint_suffix(status: &StatusCode) -> String {
    status_hint(*status)
        .map(|hint| format!(" ({hint})"))
        .unwrap_or_default()
}
