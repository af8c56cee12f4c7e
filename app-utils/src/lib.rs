use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use aplus_api::course::{CourseId, CourseIdAsInt};
use aplus_api::creds::AccessToken;
use dotenvy::dotenv;
use serde::Deserialize;
use serde_with::serde_as;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry, EnvFilter};
use url::Url;

/// Contents of the YAML config file: where the API is, who we are, and which course to scan.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    api_url: Url,
    access_token: AccessToken,
    #[serde_as(as = "CourseIdAsInt")]
    course_id: CourseId,
}

impl Config {
    pub fn new(api_url: Url, access_token: AccessToken, course_id: CourseId) -> Self {
        Self {
            api_url,
            access_token,
            course_id,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), api_url = %config.api_url, course_id = %config.course_id, "loaded config");
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }
}

/// Logs go to stderr so stdout stays readable progress output. `RUST_LOG` may come from `.env`.
pub fn init_tracing() {
    dotenv().ok();

    registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}
