#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use aplus_api::client::Client;
use aplus_api::course::CourseId;
use aplus_api::creds::AccessToken;
use aplus_api::services::http_service::HttpService;
use reqwest::{Request, Response};
use serde_json::{json, Value};
use url::Url;
use uuid::Uuid;

pub const API: &str = "https://plus.example.org/api/v2";
pub const COURSE_ID: u64 = 7;
pub const TOKEN: &str = "s3cret-token";

/// Canned API responses keyed by URL. `format` query parameters are ignored when matching so
/// the same routes serve both submission sources.
#[derive(Clone, Default)]
pub struct MockApi {
    routes: Arc<Mutex<HashMap<String, (u16, Value)>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, url: &str, body: Value) -> &Self {
        self.route_status(url, 200, body)
    }

    pub fn route_status(&self, url: &str, status: u16, body: Value) -> &Self {
        let url = Url::parse(url).expect("route URL");
        self.routes
            .lock()
            .unwrap()
            .insert(route_key(&url), (status, body));
        self
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.url().clone())
            .collect()
    }

    pub fn requests<T>(&self, f: impl FnOnce(&[Request]) -> T) -> T {
        f(&self.requests.lock().unwrap())
    }

    pub fn service(&self) -> impl HttpService + Clone {
        let mock = self.clone();
        tower::service_fn(move |request: Request| {
            let mock = mock.clone();
            async move { mock.respond(request) }
        })
    }

    pub fn client(&self) -> Client<impl HttpService + Clone> {
        let token = AccessToken::new(TOKEN.to_owned()).unwrap();
        Client::new(self.service(), token, Url::parse(API).unwrap())
    }

    fn respond(&self, request: Request) -> anyhow::Result<Response> {
        let key = route_key(request.url());
        self.requests.lock().unwrap().push(request);

        let (status, body) = self
            .routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or((404, json!({ "detail": "Not found." })));
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())?;
        Ok(Response::from(response))
    }
}

fn route_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "format")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut key = url.clone();
    key.set_query(None);
    if !pairs.is_empty() {
        key.query_pairs_mut().extend_pairs(pairs);
    }
    key.to_string()
}

pub fn course_id() -> CourseId {
    CourseId::new(COURSE_ID.to_string())
}

pub fn index_url() -> String {
    format!("{API}/courses/{COURSE_ID}/exercises")
}

pub fn submission_data_url(exercise_id: u64) -> String {
    format!("{API}/courses/{COURSE_ID}/submissiondata/?exercise_id={exercise_id}&best=no")
}

pub fn exercise_html_url(exercise_id: u64) -> String {
    format!("https://plus.example.org/course/2024/round/ex{exercise_id}/")
}

pub fn submission_html_url(exercise_id: u64, submission_id: u64) -> String {
    format!("{}submissions/{submission_id}/", exercise_html_url(exercise_id))
}

pub fn page(results: Value, next: Option<&str>) -> Value {
    json!({ "count": results.as_array().map_or(0, Vec::len), "next": next, "previous": null, "results": results })
}

pub fn round(name: &str, exercises: &[(u64, &str)]) -> Value {
    let exercises: Vec<Value> = exercises
        .iter()
        .map(|(id, name)| {
            json!({
                "id": id,
                "url": format!("{API}/exercises/{id}/"),
                "html_url": exercise_html_url(*id),
                "display_name": name,
                "max_points": 10,
                "max_submissions": 0,
            })
        })
        .collect();
    json!({ "id": 1, "display_name": name, "is_open": true, "exercises": exercises })
}

/// One submission as seen by the full-detail source.
#[derive(Debug, Clone)]
pub struct Sub {
    pub id: u64,
    pub grade: Value,
    pub submission_time: &'static str,
    pub status: &'static str,
}

impl Sub {
    pub fn new(id: u64, status: &'static str) -> Self {
        Self {
            id,
            grade: json!(0),
            submission_time: RECENT,
            status,
        }
    }

    pub fn grade(mut self, grade: Value) -> Self {
        self.grade = grade;
        self
    }

    pub fn at(mut self, submission_time: &'static str) -> Self {
        self.submission_time = submission_time;
        self
    }
}

/// Fixed "now" of the scans in these tests.
pub const NOW: &str = "2024-03-10T12:00:00Z";
pub const RECENT: &str = "2024-03-10T09:30:00+02:00";
pub const YESTERDAY: &str = "2024-03-09T10:00:00+00:00";
pub const LAST_WEEK: &str = "2024-03-03T10:00:00+00:00";

/// Registers exercise detail, its submission listing and every submission detail.
pub fn add_full_detail_exercise(mock: &MockApi, exercise_id: u64, name: &str, subs: &[Sub]) {
    let submissions_url = format!("{API}/exercises/{exercise_id}/submissions/");
    mock.route(
        &format!("{API}/exercises/{exercise_id}/"),
        json!({
            "id": exercise_id,
            "url": format!("{API}/exercises/{exercise_id}/"),
            "html_url": exercise_html_url(exercise_id),
            "display_name": name,
            "submissions": submissions_url,
        }),
    );

    let summaries: Vec<Value> = subs
        .iter()
        .map(|sub| {
            json!({
                "id": sub.id,
                "url": format!("{API}/submissions/{}/", sub.id),
                "html_url": submission_html_url(exercise_id, sub.id),
                "grade": sub.grade,
                "submission_time": sub.submission_time,
            })
        })
        .collect();
    mock.route(&submissions_url, page(json!(summaries), None));

    for sub in subs {
        mock.route(
            &format!("{API}/submissions/{}/", sub.id),
            json!({
                "id": sub.id,
                "url": format!("{API}/submissions/{}/", sub.id),
                "html_url": submission_html_url(exercise_id, sub.id),
                "grade": sub.grade,
                "submission_time": sub.submission_time,
                "status": sub.status,
            }),
        );
    }
}

pub fn add_submission_data(mock: &MockApi, exercise_id: u64, rows: &[(u64, &str)]) {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(id, status)| {
            json!({
                "SubmissionID": id,
                "ExerciseID": exercise_id,
                "Status": status,
                "Grade": 0,
            })
        })
        .collect();
    mock.route(&submission_data_url(exercise_id), json!(rows));
}

pub fn temp_urls_file() -> PathBuf {
    env::temp_dir().join(format!("stuck-submissions-{}.txt", Uuid::new_v4()))
}
