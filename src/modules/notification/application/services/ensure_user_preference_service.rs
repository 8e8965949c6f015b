use async_trait::async_trait;
use tracing::debug;

use crate::notification::application::domain::UserPreference;
use crate::notification::application::ports::{
    incoming::use_cases::{EnsureUserPreferenceError, EnsureUserPreferenceUseCase},
    outgoing::UserPreferenceRepository,
};
use crate::store::application::domain::UserId;
use crate::store::application::ports::outgoing::StoreError;

#[derive(Debug, Clone)]
pub struct EnsureUserPreferenceService<R>
where
    R: UserPreferenceRepository,
{
    repository: R,
}

impl<R> EnsureUserPreferenceService<R>
where
    R: UserPreferenceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn find(&self, user_id: UserId) -> Result<Option<UserPreference>, EnsureUserPreferenceError> {
        self.repository
            .find_by_user_id(user_id)
            .await
            .map_err(|e| EnsureUserPreferenceError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> EnsureUserPreferenceUseCase for EnsureUserPreferenceService<R>
where
    R: UserPreferenceRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<UserPreference, EnsureUserPreferenceError> {
        if let Some(existing) = self.find(user_id).await? {
            return Ok(existing);
        }

        match self.repository.save(UserPreference::new(user_id)).await {
            Ok(created) => {
                debug!(user_id = %user_id, "Created user preference");
                Ok(created)
            }
            // Lost a race with a concurrent creator; theirs is the record
            Err(StoreError::UniqueConstraintViolation(_)) => {
                self.find(user_id).await?.ok_or_else(|| {
                    EnsureUserPreferenceError::RepositoryError(
                        "preference vanished after a concurrent insert".to_string(),
                    )
                })
            }
            Err(e) => Err(EnsureUserPreferenceError::RepositoryError(e.to_string())),
        }
    }
}
