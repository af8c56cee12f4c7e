use std::fmt;

use serde::Deserialize;
use serde_with::serde_as;
use url::Url;

use crate::types::id_as_int;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExerciseId {
    id: String,
}

impl ExerciseId {
    pub fn new(id: String) -> Self {
        Self { id }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.id.fmt(f)
    }
}

id_as_int!(pub(crate) ExerciseIdAsInt, ExerciseId);

/// A named group of exercises, as listed in the course exercise index.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRound {
    display_name: String,
    exercises: Vec<ExerciseEntry>,
}

impl ExerciseRound {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn exercises(&self) -> &[ExerciseEntry] {
        &self.exercises
    }
}

/// An exercise row of the index. `url` points at the API detail resource.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseEntry {
    #[serde_as(as = "ExerciseIdAsInt")]
    id: ExerciseId,
    url: Url,
    display_name: String,
    html_url: String,
}

impl ExerciseEntry {
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    #[serde_as(as = "ExerciseIdAsInt")]
    id: ExerciseId,
    display_name: String,
    html_url: String,
    submissions: Url,
}

impl Exercise {
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    pub fn submissions(&self) -> &Url {
        &self.submissions
    }
}
