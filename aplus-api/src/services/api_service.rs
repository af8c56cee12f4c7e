use anyhow::{Context, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request};
use url::Url;

use crate::creds::AccessToken;

/// An authenticated GET against the API, before it is turned into an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    url: Url,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Same query parameters, different resource. Used to follow `next` links.
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// `forced_query` comes first so client-wide parameters apply to every call.
    pub fn http_request(
        &self,
        token: &AccessToken,
        forced_query: &[(String, String)],
    ) -> Result<Request> {
        let mut url = self.url.clone();
        if !forced_query.is_empty() || !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in forced_query.iter().chain(&self.query) {
                pairs.append_pair(key, value);
            }
        }

        let mut request = Request::new(Method::GET, url);
        let headers = request.headers_mut();
        let authorization = HeaderValue::from_str(&token.header_value())
            .context("the access token is not a valid header value")?;
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(request)
    }
}
