use serde::{Deserialize, Serialize};

use crate::store::application::ports::outgoing::{AllRecords, StoreError, StoredEntity};

/// A revoked access token.
///
/// The token string is the primary key: a stored record means "revoked".
/// Records are never mutated, only inserted and explicitly deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistToken {
    access_token: String,
}

impl BlacklistToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn into_access_token(self) -> String {
        self.access_token
    }

    /// Short prefix that is safe to write to logs.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.access_token)
    }
}

pub fn fingerprint(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{prefix}…")
}

impl StoredEntity for BlacklistToken {
    type Key = String;
    type Filter = AllRecords;

    fn primary_key(&self) -> Option<String> {
        Some(self.access_token.clone())
    }

    fn set_primary_key(&mut self, key: String) {
        self.access_token = key;
    }

    fn matches(&self, _filter: &AllRecords) -> bool {
        true
    }

    fn validate(&self) -> Result<(), StoreError> {
        if self.access_token.trim().is_empty() {
            return Err(StoreError::InvalidEntity(
                "access token must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
