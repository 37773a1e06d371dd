use async_trait::async_trait;
use url::Url;

use crate::{
    db::models::api::{SendLinkRequest, SendLinkResponse},
    error::{AppError, AppResult},
    services::LinkIssuerService,
};

const SEND_LINK_PATH: &str = "/api/send-link";

/// Something that can issue a referral link for one request.
///
/// `Ok` carries the issuer's answer, including its own failures
/// (`success: false`). `Err` means the answer never arrived.
#[async_trait]
pub trait LinkIssuer: Send + Sync {
    async fn send_link(&self, req: &SendLinkRequest) -> AppResult<SendLinkResponse>;
}

/// Calls `POST /api/send-link` on a running server.
#[derive(Clone, Debug)]
pub struct HttpLinkIssuer {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpLinkIssuer {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(SEND_LINK_PATH))
            .map_err(|e| AppError::Config(format!("Invalid server URL {}: {}", base_url, e)))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LinkIssuer for HttpLinkIssuer {
    async fn send_link(&self, req: &SendLinkRequest) -> AppResult<SendLinkResponse> {
        // Error statuses still carry a {success:false, error} body
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(req)
            .send()
            .await?;
        let body = response.json::<SendLinkResponse>().await?;
        Ok(body)
    }
}

/// Issues links in-process, bypassing HTTP.
#[derive(Clone)]
pub struct LocalLinkIssuer {
    service: LinkIssuerService,
}

impl LocalLinkIssuer {
    pub fn new(service: LinkIssuerService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LinkIssuer for LocalLinkIssuer {
    async fn send_link(&self, req: &SendLinkRequest) -> AppResult<SendLinkResponse> {
        let response = match self.service.issue(req).await {
            Ok(issued) => SendLinkResponse::issued(issued.link),
            Err(err) => SendLinkResponse::failure(err.client_message()),
        };
        Ok(response)
    }
}
