//! `DNSPod` HTTP request plumbing.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, truncate_for_log};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::{TencentError, TencentResponse};
use super::{DNSPOD_API_HOST, DNSPOD_VERSION, DnspodProvider};

impl DnspodProvider {
    /// Execute one Tencent Cloud API call. Single-shot: no retries at any
    /// layer.
    pub(crate) async fn request<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        action: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        // 1. Serialize the request body
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        // 2. Sign
        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        // 3. Send
        let url = format!("https://{DNSPOD_API_HOST}");
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", DNSPOD_API_HOST)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), action).await?;

        // 4. Parse the envelope. A non-2xx status with an unparseable body
        //    (gateway HTML, empty body) surfaces as UnexpectedStatus so the
        //    classifier can see the raw status code.
        let envelope: TencentResponse = match HttpUtils::parse_json(&response_text, self.provider_name())
        {
            Ok(envelope) => envelope,
            Err(parse_err) => {
                if !(200..300).contains(&status) {
                    return Err(ProviderError::UnexpectedStatus {
                        provider: self.provider_name().to_string(),
                        status,
                        detail: truncate_for_log(&response_text),
                    });
                }
                return Err(parse_err);
            }
        };

        // 5. Structured API error
        if let Some(error_value) = envelope.response.get("Error") {
            let api_error: TencentError = serde_json::from_value(error_value.clone())
                .map_err(|e| self.parse_error(format!("malformed Error payload: {e}")))?;
            log::debug!(
                "[{}] API error: {} - {}",
                self.provider_name(),
                api_error.code,
                api_error.message
            );
            return Err(self.map_error(
                RawApiError::with_code(api_error.code, api_error.message),
                ctx,
            ));
        }

        // 6. Extract the action payload
        serde_json::from_value(envelope.response).map_err(|e| self.parse_error(e))
    }
}
