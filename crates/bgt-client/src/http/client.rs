//! Mason HTTP client implementation.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::error::{ApiError, Error, HypermediaError};
use crate::mason::{Control, ErrorBody};
use crate::types::ApiUrl;

/// Response content type the server emits.
pub const MASON_JSON: &str = "application/vnd.mason+json";

/// Request content type the server accepts.
pub const PLAIN_JSON: &str = "application/json";

/// Outcome of a non-GET submission.
///
/// The interesting part of a create response is its `Location` header: the
/// URL of the resource the server just made. Edits and deletes come back
/// without one.
#[derive(Debug, Clone)]
pub struct Submission {
    /// HTTP status code of the success response.
    pub status: u16,
    /// `Location` header, when the server sent one.
    pub location: Option<String>,
}

/// HTTP client for Mason hypermedia exchanges.
///
/// One network call per invocation; no retry, no queueing, no cancellation.
#[derive(Debug, Clone)]
pub struct MasonClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl MasonClient {
    /// Create a new client anchored at the given API base URL.
    pub fn new(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bgt-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// GET a representation from an href (absolute or server-relative).
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn fetch<R>(&self, href: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.resolve(href)?;
        debug!(%url, "GET representation");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, MASON_JSON)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Follow a navigation control.
    ///
    /// # Errors
    ///
    /// Rejects controls that declare a method other than GET; following a
    /// state-changing control as a link would be a client bug.
    pub async fn follow<R>(&self, control: &Control) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        if !control.is_get() {
            return Err(HypermediaError::UnexpectedMethod {
                method: control.method().to_string(),
                expected: "GET".to_string(),
            }
            .into());
        }

        self.fetch(&control.href).await
    }

    /// Submit a JSON payload through a control, using its declared method.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn submit<B>(&self, control: &Control, body: &B) -> Result<Submission, Error>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.base.resolve(&control.href)?;
        let method = Method::from_bytes(control.method().as_bytes()).map_err(|_| {
            HypermediaError::UnusableMethod {
                method: control.method().to_string(),
            }
        })?;
        debug!(%url, method = %method, "submit payload");
        trace!(?body, "payload");

        let response = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, PLAIN_JSON)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "submit response");

        if status.is_success() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(String::from);

            Ok(Submission {
                status: status.as_u16(),
                location,
            })
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Submit through a control that takes no payload (e.g. delete).
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn submit_empty(&self, control: &Control) -> Result<Submission, Error> {
        let url = self.base.resolve(&control.href)?;
        let method = Method::from_bytes(control.method().as_bytes()).map_err(|_| {
            HypermediaError::UnusableMethod {
                method: control.method().to_string(),
            }
        })?;
        debug!(%url, method = %method, "submit (no payload)");

        let response = self.client.request(method, url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(Submission {
                status: status.as_u16(),
                location: None,
            })
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Handle a GET response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse a failure response's Mason error body.
    ///
    /// A body that does not match the `@error` shape degrades to a
    /// status-only error instead of failing a second time.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::new(status, Some(body.error.message), body.error.messages),
            Err(_) => ApiError::new(status, None, Vec::new()),
        }
    }
}
