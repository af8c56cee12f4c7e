use anyhow::Result;
use reqwest::{Client as HttpClient, Request, Response};
use tower::{Service, ServiceBuilder};

/// The transport every API call goes through. Executes one request at a time and nothing more;
/// authentication and status handling live a layer above, in [`crate::client::Client`].
pub fn service(http_client: HttpClient) -> impl HttpService + Clone {
    ServiceBuilder::new()
        .concurrency_limit(1)
        .map_err(anyhow::Error::from)
        .service_fn(move |request: Request| http_client.execute(request))
}

pub trait HttpService: Service<Request, Response = Response, Error = anyhow::Error> {}
impl<T: Service<Request, Response = Response, Error = anyhow::Error>> HttpService for T {}

/// No request timeout: a slow listing is waited out rather than aborting the scan.
pub fn http_client() -> Result<HttpClient> {
    let client = HttpClient::builder().build()?;

    Ok(client)
}
