use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};

use crate::auth::application::domain::entities::fingerprint;
use crate::auth::application::ports::outgoing::TokenBlacklistRepository;
use crate::store::application::ports::outgoing::StoreError;

// ========================= Revoke Request =========================
#[derive(Debug, Clone)]
pub struct RevokeTokenRequest {
    access_token: String,
}

impl RevokeTokenRequest {
    pub fn new(access_token: impl Into<String>) -> Result<Self, RevokeTokenRequestError> {
        let access_token = access_token.into().trim().to_string();
        if access_token.is_empty() {
            return Err(RevokeTokenRequestError::MissingToken);
        }
        Ok(Self { access_token })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevokeTokenRequestError {
    #[error("Access token is required")]
    MissingToken,
}

impl<'de> Deserialize<'de> for RevokeTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RevokeTokenRequestHelper {
            access_token: String,
        }

        let helper = RevokeTokenRequestHelper::deserialize(deserializer)?;
        RevokeTokenRequest::new(helper.access_token).map_err(serde::de::Error::custom)
    }
}

// ====================== Revoke Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct RevokeTokenResponse {
    pub message: String,
}

// ====================== Revoke Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevokeTokenError {
    #[error("Token store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

impl From<StoreError> for RevokeTokenError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::StoreUnavailable(msg) => RevokeTokenError::StoreUnavailable(msg),
            other => RevokeTokenError::RevocationFailed(other.to_string()),
        }
    }
}

// ============================ Revoke Use Case =============================
/// Logout / explicit revocation: the token goes on the blacklist and every
/// later check rejects it.
#[async_trait]
pub trait IRevokeTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RevokeTokenRequest,
    ) -> Result<RevokeTokenResponse, RevokeTokenError>;
}

#[derive(Clone)]
pub struct RevokeTokenUseCase<R>
where
    R: TokenBlacklistRepository,
{
    blacklist: R,
}

impl<R> RevokeTokenUseCase<R>
where
    R: TokenBlacklistRepository,
{
    pub fn new(blacklist: R) -> Self {
        Self { blacklist }
    }
}

#[async_trait]
impl<R> IRevokeTokenUseCase for RevokeTokenUseCase<R>
where
    R: TokenBlacklistRepository,
{
    async fn execute(
        &self,
        request: RevokeTokenRequest,
    ) -> Result<RevokeTokenResponse, RevokeTokenError> {
        let token = request.access_token();

        if let Err(e) = self.blacklist.blacklist_token(token).await {
            error!(token = %fingerprint(token), error = %e, "Failed to revoke token");
            return Err(e.into());
        }

        info!(token = %fingerprint(token), "Access token revoked");
        Ok(RevokeTokenResponse {
            message: "Token revoked successfully".to_string(),
        })
    }
}
