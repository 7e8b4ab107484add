//! `DNSPod` error mapping.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DnspodProvider;

/// Free-text markers indicating a zone is not hosted in the account.
///
/// Provider error text is not a stable structured contract, so the mapper
/// falls back to these substrings (matched case-insensitively) when the
/// structured code is missing or unrecognized. Provenance:
///
/// - `"domain name invalid"` — legacy `dnsapi.cn` English error for a name
///   that is not a registered zone.
/// - `"当前域名未添加"` ("this domain has not been added") — legacy Chinese
///   error for a zone absent from the account.
/// - `"当前域名无效"` ("this domain is invalid") — localized variant of the
///   invalid-name error still surfaced by some endpoints.
const ZONE_NOT_FOUND_MARKERS: &[&str] = &["domain name invalid", "当前域名未添加", "当前域名无效"];

fn message_marks_zone_not_found(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ZONE_NOT_FOUND_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// `DNSPod` error code mapping.
/// Reference: <https://cloud.tencent.com/document/api/1427/56192>
impl ProviderErrorMapper for DnspodProvider {
    fn provider_name(&self) -> &'static str {
        "dnspod"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ Authentication errors ============
            Some(
                "AuthFailure"
                | "AuthFailure.InvalidAuthorization"
                | "AuthFailure.InvalidSecretId"
                | "AuthFailure.SecretIdNotFound"
                | "AuthFailure.SignatureExpire"
                | "AuthFailure.SignatureFailure"
                | "AuthFailure.TokenFailure"
                | "AuthFailure.UnauthorizedOperation"
                | "InvalidParameter.InvalidSecretId"
                | "InvalidParameter.InvalidSignature",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Zone not hosted ============
            // InvalidParameter.DomainInvalid is included deliberately: probing
            // a candidate like `_acme-challenge.foo.example.com` that is not a
            // registered zone yields this code, and the resolver must move on
            // to the next candidate.
            Some(
                "ResourceNotFound.NoDataOfDomain"
                | "InvalidParameterValue.DomainNotExists"
                | "InvalidParameter.DomainInvalid"
                | "InvalidParameter.DomainIdInvalid",
            ) => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // ============ Record already exists ============
            Some("InvalidParameter.DomainRecordExist") => ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // ============ Record does not exist ============
            Some("ResourceNotFound.NoDataOfRecord" | "InvalidParameter.RecordIdInvalid") => {
                ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_name: context
                        .record_name
                        .unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Fallback: free-text markers, then unknown ============
            _ if message_marks_zone_not_found(&raw.message) => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}
