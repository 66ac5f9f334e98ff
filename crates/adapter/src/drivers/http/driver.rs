use async_trait::async_trait;
use domain::{
    Account, BanStatus, Comment, GatewayError, LookupError, MutationError, TitleMetadata,
    Watchlist,
};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::traits::BackendGateway;

#[derive(Clone, Debug)]
pub struct HttpGatewayConfig {
    pub base_url: String,
    // 为空时不附带 Authorization 头
    pub token: Option<String>,
    pub timeout: Duration,
}

pub struct HttpGateway {
    client: Client,
    base: Url,
    config: HttpGatewayConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BanStatusRequest {
    ban_status: BanStatus,
}

impl HttpGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            GatewayError::Transport(format!("invalid base url {}: {}", config.base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(GatewayError::Transport(format!(
                "base url {} cannot carry a path",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base,
            config,
        })
    }

    // 每个 id 作为单独的 path segment 编码，`/`、`?`、`#` 都会被转义
    fn url(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(GatewayError::InvalidId(bad.to_string()));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Transport("base url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.config.token.as_deref() {
            Some(token) if !token.is_empty() => req.bearer_auth(token),
            _ => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, GatewayError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GatewayError> {
        let url = self.url(segments)?;
        debug!("GET {}", url);
        let resp = self.send(self.client.get(url)).await?;
        resp.json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn list_accounts(&self) -> Result<Vec<Account>, GatewayError> {
        self.get_json(&["users"]).await
    }

    async fn list_watchlists(&self) -> Result<Vec<Watchlist>, GatewayError> {
        self.get_json(&["watchlists", "admin"]).await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, GatewayError> {
        self.get_json(&["watchlists", "comments"]).await
    }

    async fn get_title_metadata(&self, title_id: &str) -> Result<TitleMetadata, LookupError> {
        self.get_json(&["watchmode", "title", title_id])
            .await
            .map_err(|source| LookupError {
                title_id: title_id.to_string(),
                source,
            })
    }

    async fn set_ban_status(&self, user_id: &str, status: BanStatus) -> Result<(), MutationError> {
        let to_error = |source: GatewayError| MutationError::BanStatus {
            user_id: user_id.to_string(),
            source,
        };
        let url = self.url(&["users", user_id, "ban"]).map_err(to_error)?;
        debug!("PUT {} ({})", url, status);
        let req = self
            .client
            .put(url)
            .json(&BanStatusRequest { ban_status: status });
        self.send(req).await.map(|_| ()).map_err(to_error)
    }

    async fn delete_comment(
        &self,
        watchlist_id: &str,
        comment_id: &str,
    ) -> Result<(), MutationError> {
        let to_error = |source: GatewayError| MutationError::DeleteComment {
            comment_id: comment_id.to_string(),
            source,
        };
        let url = self
            .url(&["watchlists", watchlist_id, "comments", comment_id])
            .map_err(to_error)?;
        debug!("DELETE {}", url);
        self.send(self.client.delete(url))
            .await
            .map(|_| ())
            .map_err(to_error)
    }
}
