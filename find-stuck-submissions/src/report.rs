use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use url::Url;

/// Replaces `path` with one URL per line.
pub async fn write_urls(path: &Path, urls: &[Url]) -> Result<()> {
    let contents: String = urls.iter().map(|url| format!("{url}\n")).collect();
    fs::write(path, contents)
        .await
        .with_context(|| format!("could not write URLs to {}", path.display()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    count: usize,
    urls_file: PathBuf,
}

impl Summary {
    pub fn new(count: usize, urls_file: PathBuf) -> Self {
        Self { count, urls_file }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn urls_file(&self) -> &Path {
        &self.urls_file
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let path = self.urls_file.display();
        write!(
            f,
            "Found {} possibly stuck submissions.\nTheir URLs are listed in \"{path}\".\nIn Linux systems, run\n  cat {path} | xargs firefox\nto launch Firefox with a tab for each of them.",
            self.count,
        )
    }
}
