use async_trait::async_trait;

use crate::error::{ProviderError, Result};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Provider-specific error code, if the API supplies one.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra context attached while mapping a raw error (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name, for `RecordExists` / `RecordNotFound` errors.
    pub record_name: Option<String>,
    /// Zone name, for `DomainNotFound` errors.
    pub domain: Option<String>,
}

/// Maps a provider's raw API errors to the unified error type (internal).
///
/// Each adapter implements this with its own code table and, where the
/// provider's structured codes are unreliable, a documented list of free-text
/// markers.
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in error context.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: response parse failure.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unrecognized error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Capability interface over a DNS provider, scoped to what a dns-01
/// challenge needs: prove a zone is hosted and reachable with the configured
/// credentials, then create and remove one TXT record in it.
///
/// Every operation is single-shot: implementations must not retry internally.
/// Retry and backoff policy, if any, belongs to the embedding system.
/// Implementations may reuse an HTTP session across calls but must be safe to
/// share between tasks (`Send + Sync`).
#[async_trait]
pub trait ChallengeProvider: Send + Sync {
    /// Provider identifier (e.g. `"dnspod"`).
    fn id(&self) -> &'static str;

    /// Check that `zone` exists in the account and the credentials are valid
    /// for it. Makes no mutations.
    ///
    /// A zone that is not hosted in the account fails with
    /// [`ProviderError::DomainNotFound`]; rejected credentials fail with
    /// [`ProviderError::InvalidCredentials`].
    async fn authenticate(&self, zone: &str) -> Result<()>;

    /// Create a TXT record in `zone`.
    ///
    /// `record_name` may be fully qualified or already relative to the zone.
    /// Creating a record that already exists with the same value fails with
    /// [`ProviderError::RecordExists`], which callers treat as success.
    async fn create_txt(&self, zone: &str, record_name: &str, value: &str, ttl: u32)
    -> Result<()>;

    /// Delete the TXT record in `zone` whose name and value match.
    ///
    /// Deleting a record that does not exist is not an error.
    async fn delete_txt(&self, zone: &str, record_name: &str, value: &str) -> Result<()>;
}
