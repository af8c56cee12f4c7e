use std::fmt;

use anyhow::Result;
use tracing::debug;

use crate::client::Client;
use crate::exercise::{ExerciseId, ExerciseRound};
use crate::services::api_service::ApiRequest;
use crate::services::http_service::HttpService;
use crate::submission::SubmissionDataRow;
use crate::types::id_as_int;
use crate::util::{api_course_endpoint, EXERCISES_COURSE_PATH, SUBMISSION_DATA_COURSE_PATH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseId {
    id: String,
}

impl CourseId {
    pub fn new(id: String) -> Self {
        Self { id }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.id.fmt(f)
    }
}

id_as_int!(pub CourseIdAsInt, CourseId);

/// Course-scoped endpoints.
#[derive(Debug, Clone)]
pub struct CourseClient<'a, S> {
    aplus: &'a Client<S>,
    course_id: &'a CourseId,
}

impl<'a, S: HttpService + Clone> CourseClient<'a, S> {
    pub fn new(aplus: &'a Client<S>, course_id: &'a CourseId) -> Self {
        Self { aplus, course_id }
    }

    pub fn aplus(&self) -> &'a Client<S> {
        self.aplus
    }

    pub fn course_id(&self) -> &'a CourseId {
        self.course_id
    }

    #[tracing::instrument(skip(self), fields(course_id = %self.course_id))]
    pub async fn exercise_index(&self) -> Result<Vec<ExerciseRound>> {
        let url =
            api_course_endpoint(self.aplus.api_url(), self.course_id, EXERCISES_COURSE_PATH)?;
        let rounds: Vec<ExerciseRound> = self.aplus.get_paginated(ApiRequest::new(url)).await?;
        debug!(rounds = rounds.len(), "got exercise index");
        Ok(rounds)
    }

    /// All submissions of one exercise as compact rows, not only the best per student.
    #[tracing::instrument(skip(self), fields(course_id = %self.course_id))]
    pub async fn submission_data(&self, exercise_id: &ExerciseId) -> Result<Vec<SubmissionDataRow>> {
        let url = api_course_endpoint(
            self.aplus.api_url(),
            self.course_id,
            SUBMISSION_DATA_COURSE_PATH,
        )?;
        let request = ApiRequest::new(url)
            .with_query("exercise_id", exercise_id.as_str())
            .with_query("best", "no");
        self.aplus.get_json(request).await
    }
}
