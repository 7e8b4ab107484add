//! TXT record mutation: the end-to-end create/delete operations a challenge
//! driver calls.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::resolver::resolve_zone;
use crate::traits::ChallengeProvider;

/// Default TTL in seconds for challenge TXT records.
pub const DEFAULT_TTL: u32 = 600;

/// Creates and removes challenge TXT records through a [`ChallengeProvider`].
///
/// Each [`create`](Self::create) / [`delete`](Self::delete) call is an
/// independent end-to-end operation: it resolves the zone afresh and then
/// issues exactly one mutation. Nothing is cached between calls, so a delete
/// minutes after a create still works if the account's zone set changed in
/// between.
///
/// Concurrent calls for the same record are not coordinated here; serialize
/// them externally if the embedding system can issue them.
pub struct TxtRecordManager {
    provider: Arc<dyn ChallengeProvider>,
    ttl: u32,
}

impl TxtRecordManager {
    /// Create a manager with the default record TTL of [`DEFAULT_TTL`] seconds.
    pub fn new(provider: Arc<dyn ChallengeProvider>) -> Self {
        Self {
            provider,
            ttl: DEFAULT_TTL,
        }
    }

    /// Override the TTL applied to created records.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Create the TXT record `record_name` with `value` in the zone hosting
    /// `domain`.
    ///
    /// Resolution failures propagate verbatim. A record that already exists
    /// with the same value counts as success; every other provider error
    /// passes through unmodified.
    pub async fn create(&self, domain: &str, record_name: &str, value: &str) -> Result<()> {
        let zone = resolve_zone(self.provider.as_ref(), domain).await?;

        match self
            .provider
            .create_txt(&zone, record_name, value, self.ttl)
            .await
        {
            Err(ProviderError::RecordExists { .. }) => {
                log::debug!(
                    "[{}] TXT record '{record_name}' already present in '{zone}'",
                    self.provider.id()
                );
                Ok(())
            }
            other => other,
        }
    }

    /// Delete the TXT record `record_name` with `value` from the zone hosting
    /// `domain`.
    ///
    /// Same shape as [`create`](Self::create): resolution failures propagate
    /// verbatim, a record that is already absent counts as success, and every
    /// other provider error passes through unmodified.
    pub async fn delete(&self, domain: &str, record_name: &str, value: &str) -> Result<()> {
        let zone = resolve_zone(self.provider.as_ref(), domain).await?;

        match self.provider.delete_txt(&zone, record_name, value).await {
            Err(ProviderError::RecordNotFound { .. }) => {
                log::debug!(
                    "[{}] TXT record '{record_name}' already absent from '{zone}'",
                    self.provider.id()
                );
                Ok(())
            }
            other => other,
        }
    }
}
