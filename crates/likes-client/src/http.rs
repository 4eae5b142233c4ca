//! reqwest implementation of the toggle endpoint

use async_trait::async_trait;
use likes_common::ApiConfig;
use likes_core::MessageId;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::api::{ToggleLikeApi, ToggleResponse};
use crate::endpoint::toggle_like_url;
use crate::error::{ClientError, ClientResult};

/// Toggle endpoint client over HTTP
#[derive(Debug, Clone)]
pub struct HttpToggleLikeApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpToggleLikeApi {
    /// Build a client from API configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Self::with_client(client, &config.base_url, config.token.clone())
    }

    /// Use an existing reqwest client
    pub fn with_client(
        client: Client,
        base_url: &str,
        token: Option<String>,
    ) -> ClientResult<Self> {
        let url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: "cannot be a base URL".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ToggleLikeApi for HttpToggleLikeApi {
    #[instrument(skip(self), fields(message_id = %message_id))]
    async fn toggle_like(&self, message_id: &MessageId) -> ClientResult<ToggleResponse> {
        let url = toggle_like_url(&self.base_url, message_id);

        let mut request = self.client.post(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let response = ToggleResponse::from_bytes(status, &bytes);

        debug!(
            status,
            message = ?response.message(),
            malformed = response.malformed,
            "Toggle endpoint responded"
        );

        Ok(response)
    }
}
