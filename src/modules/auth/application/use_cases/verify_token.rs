use async_trait::async_trait;
use tracing::{error, warn};

use crate::auth::application::domain::entities::fingerprint;
use crate::auth::application::ports::outgoing::TokenBlacklistRepository;
use crate::store::application::ports::outgoing::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyTokenError {
    #[error("Access token is missing")]
    MissingToken,

    #[error("Access token has been revoked")]
    TokenRevoked,

    /// The blacklist could not be consulted. Callers must treat the token
    /// as unverified.
    #[error("Token store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for VerifyTokenError {
    fn from(error: StoreError) -> Self {
        VerifyTokenError::StoreUnavailable(error.to_string())
    }
}

/// Run on every authenticated request, after signature checks.
#[async_trait]
pub trait IVerifyTokenUseCase: Send + Sync {
    async fn execute(&self, access_token: &str) -> Result<(), VerifyTokenError>;
}

#[derive(Clone)]
pub struct VerifyTokenUseCase<R>
where
    R: TokenBlacklistRepository,
{
    blacklist: R,
}

impl<R> VerifyTokenUseCase<R>
where
    R: TokenBlacklistRepository,
{
    pub fn new(blacklist: R) -> Self {
        Self { blacklist }
    }
}

#[async_trait]
impl<R> IVerifyTokenUseCase for VerifyTokenUseCase<R>
where
    R: TokenBlacklistRepository,
{
    async fn execute(&self, access_token: &str) -> Result<(), VerifyTokenError> {
        let token = access_token.trim();
        if token.is_empty() {
            return Err(VerifyTokenError::MissingToken);
        }

        match self.blacklist.exists_by_access_token(token).await {
            Ok(false) => Ok(()),
            Ok(true) => {
                warn!(token = %fingerprint(token), "Rejected revoked access token");
                Err(VerifyTokenError::TokenRevoked)
            }
            Err(e) => {
                error!(error = %e, "Blacklist check failed; rejecting token");
                Err(e.into())
            }
        }
    }
}
