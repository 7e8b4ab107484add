//! Shared HTTP execution helpers.
//!
//! Adapters keep full control of their own request construction and
//! signatures; this module only unifies the sending, logging and body
//! handling around them. Requests are strictly single-shot: a transport
//! failure surfaces immediately and is never retried here.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Maximum number of bytes of a response body to include in debug logs.
///
/// Bodies can carry record values and localized error prose; truncating keeps
/// logs readable and avoids dumping whole payloads.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging, keeping multi-byte characters intact.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// HTTP helper function set.
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Execute a configured request once and return `(status, body_text)`.
    ///
    /// Transport failures map to [`ProviderError::Timeout`] or
    /// [`ProviderError::NetworkError`]; any HTTP status is returned to the
    /// caller for interpretation, since providers differ on whether errors
    /// arrive as statuses or as structured bodies.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] POST {action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] response status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{provider_name}] response body: {}", truncate_for_log(&body));

        Ok((status, body))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
