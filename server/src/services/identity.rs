//! Identity-provider verification — bearer tokens to verified users.
//!
//! ARCHITECTURE
//! ============
//! The provider owns token issuance and the user directory; this module
//! only asks it whether a bearer token is currently valid. The trait seam
//! keeps the bridge testable without a live provider.

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verified identity attached to an RPC context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("provider api error: {0}")]
    Api(String),
}

/// Token verification seam. Implemented over HTTP in production and by
/// static fixtures in tests.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Resolve a bearer token to its user. `Ok(None)` means the token is
    /// invalid or expired.
    async fn verify(&self, token: &str) -> Result<Option<CurrentUser>, IdentityError>;
}

/// Identity provider configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_key: String,
}

impl ProviderConfig {
    /// Load from `IDENTITY_API_URL` and `IDENTITY_API_KEY`.
    /// Returns `None` if either is missing (verification will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_url = std::env::var("IDENTITY_API_URL").ok()?;
        let api_key = std::env::var("IDENTITY_API_KEY").ok()?;
        Some(Self { api_url, api_key })
    }

    pub(crate) fn verify_url(&self) -> String {
        format!("{}/v1/sessions/verify", self.api_url.trim_end_matches('/'))
    }
}

/// Shape of the provider's verification response.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    active: bool,
    user: Option<CurrentUser>,
}

impl VerifyResponse {
    fn into_user(self) -> Option<CurrentUser> {
        if self.active { self.user } else { None }
    }
}

/// HTTP-backed verifier calling the provider's session-verification
/// endpoint with the service API key.
pub struct HttpVerifier {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl HttpVerifier {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }

    /// Build from environment; `None` when the provider is unconfigured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        ProviderConfig::from_env().map(Self::new)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }
}

#[async_trait]
impl IdentityVerifier for HttpVerifier {
    async fn verify(&self, token: &str) -> Result<Option<CurrentUser>, IdentityError> {
        let resp = self
            .client
            .get(self.config.verify_url())
            .header("Authorization", format!("Bearer {token}"))
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        // The provider answers 401 for unknown/expired tokens; that is a
        // normal signed-out outcome, not a failure.
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(IdentityError::Api(format!("{status}: {body}")));
        }

        let body: VerifyResponse = resp.json().await.map_err(|e| IdentityError::Api(e.to_string()))?;
        Ok(body.into_user())
    }
}
