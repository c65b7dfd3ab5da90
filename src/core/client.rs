use crate::config::main_config::DEFAULT_HTTP_REQUEST_TIMEOUT;
use crate::utils::error::{CliError, Result};
use reqwest::header::{ACCEPT, CONNECTION};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout_seconds: u64,
    pub insecure: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_HTTP_REQUEST_TIMEOUT,
            insecure: false,
        }
    }
}

/// HTTP client bound to one access token. Every request it sends carries
/// `Authorization: Bearer <token>`.
pub struct ApiClient {
    client: Client,
    access_token: String,
}

impl ApiClient {
    pub fn new(settings: HttpSettings, access_token: impl Into<String>) -> Result<Self> {
        if settings.insecure {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .danger_accept_invalid_certs(settings.insecure)
            .build()?;

        Ok(Self {
            client,
            access_token: access_token.into(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.access_token)
    }

    pub async fn get(
        &self,
        url: &str,
        accept: Option<&str>,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        tracing::debug!("GET {} {:?}", url, query);

        let mut request = self.authorized(self.client.get(url));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        self.send(url, request).await
    }

    pub async fn post_multipart(
        &self,
        url: &str,
        form: Form,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        tracing::debug!("POST {} {:?}", url, query);

        let mut request = self
            .authorized(self.client.post(url))
            .header(ACCEPT, "*/*")
            .header(CONNECTION, "keep-alive")
            .multipart(form);
        if !query.is_empty() {
            request = request.query(query);
        }

        self.send(url, request).await
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| CliError::ConnectionError {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("Response: {}", response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_get_sends_bearer_token_and_accept() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/resource")
                    .header("authorization", "Bearer token-123")
                    .header("accept", "application/zip")
                    .query_param("appId", "SampleApp");
                then.status(200).body("ok");
            })
            .await;

        let client = ApiClient::new(HttpSettings::default(), "token-123").unwrap();
        let response = client
            .get(
                &server.url("/resource"),
                Some("application/zip"),
                &[("appId", "SampleApp")],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_non_success_status_is_returned() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let client = ApiClient::new(HttpSettings::default(), "t").unwrap();
        let response = client.get(&server.url("/missing"), None, &[]).await.unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let client = ApiClient::new(
            HttpSettings {
                timeout_seconds: 2,
                insecure: false,
            },
            "t",
        )
        .unwrap();

        let err = client
            .get("http://127.0.0.1:1/applications", None, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ConnectionError { url, .. } if url == "http://127.0.0.1:1/applications"));
    }
}
