//! Classification of provider errors during zone resolution.
//!
//! The resolver probes zone candidates one by one; whether a failed probe
//! means "try the next candidate" or "abort everything" is decided here, not
//! in the adapters.

use crate::error::ProviderError;

/// Outcome of classifying a provider error against a zone candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The candidate zone is not hosted in the account; the resolver should
    /// continue with the next candidate.
    ZoneNotFound,
    /// The whole resolution must abort. The message names the zone being
    /// attempted and wraps the original error.
    Fatal(String),
    /// A transient failure that could in principle be retried. Present in the
    /// taxonomy for extensibility; the default policy below never produces it
    /// and no retry logic exists in this crate.
    Transient(String),
}

/// Classify a provider error raised while authenticating against `zone`.
///
/// Policy, evaluated in order:
///
/// 1. An HTTP 400 response or an explicit credential rejection is fatal. A
///    malformed zone-authentication request at this stage most plausibly
///    means a bad account ID or token rather than a missing zone, so the
///    message hints at the credentials.
/// 2. A zone-not-present error means the candidate simply is not hosted
///    here; the resolver moves on. Adapters are responsible for mapping
///    their provider's error codes and free-text markers (including
///    localized variants) to [`ProviderError::DomainNotFound`].
/// 3. Everything else is fatal, wrapping the original message and the zone
///    name being attempted so the caller gets a precise diagnostic.
pub fn classify(error: &ProviderError, zone: &str) -> Classification {
    match error {
        ProviderError::UnexpectedStatus { status: 400, .. }
        | ProviderError::InvalidCredentials { .. } => Classification::Fatal(format!(
            "error determining zone for '{zone}': {error} \
             (are the account ID and API token values correct?)"
        )),
        ProviderError::DomainNotFound { .. } => Classification::ZoneNotFound,
        _ => Classification::Fatal(format!(
            "unexpected error determining zone for '{zone}': {error}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain_not_found() -> ProviderError {
        ProviderError::DomainNotFound {
            provider: "dnspod".to_string(),
            domain: "example.com".to_string(),
            raw_message: Some("当前域名未添加".to_string()),
        }
    }

    #[test]
    fn http_400_is_fatal_with_credential_hint() {
        let e = ProviderError::UnexpectedStatus {
            provider: "dnspod".to_string(),
            status: 400,
            detail: "Bad Request".to_string(),
        };
        let c = classify(&e, "example.com");
        assert!(matches!(c, Classification::Fatal(_)), "expected Fatal, got {c:?}");
        let Classification::Fatal(msg) = c else {
            return;
        };
        assert!(msg.contains("example.com"));
        assert!(msg.contains("account ID and API token"));
    }

    #[test]
    fn invalid_credentials_is_fatal_with_credential_hint() {
        let e = ProviderError::InvalidCredentials {
            provider: "dnspod".to_string(),
            raw_message: Some("signature failure".to_string()),
        };
        let c = classify(&e, "foo.example.com");
        assert!(matches!(c, Classification::Fatal(_)), "expected Fatal, got {c:?}");
        let Classification::Fatal(msg) = c else {
            return;
        };
        assert!(msg.contains("foo.example.com"));
        assert!(msg.contains("correct?"));
    }

    #[test]
    fn domain_not_found_continues_to_next_candidate() {
        assert_eq!(
            classify(&domain_not_found(), "example.com"),
            Classification::ZoneNotFound
        );
    }

    #[test]
    fn http_400_takes_precedence_over_everything() {
        // rule 1 is evaluated before rule 2; a 400 never maps to ZoneNotFound
        let e = ProviderError::UnexpectedStatus {
            provider: "dnspod".to_string(),
            status: 400,
            detail: "domain name invalid".to_string(),
        };
        assert!(matches!(
            classify(&e, "example.com"),
            Classification::Fatal(_)
        ));
    }

    #[test]
    fn network_error_is_fatal_not_transient() {
        let e = ProviderError::NetworkError {
            provider: "dnspod".to_string(),
            detail: "connection refused".to_string(),
        };
        let c = classify(&e, "example.com");
        assert!(matches!(c, Classification::Fatal(_)), "expected Fatal, got {c:?}");
        let Classification::Fatal(msg) = c else {
            return;
        };
        assert!(msg.contains("unexpected error determining zone for 'example.com'"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn unknown_error_is_fatal_and_wraps_message() {
        let e = ProviderError::Unknown {
            provider: "dnspod".to_string(),
            raw_code: Some("InternalError".to_string()),
            raw_message: "server exploded".to_string(),
        };
        let c = classify(&e, "b.example.com");
        assert!(matches!(c, Classification::Fatal(_)), "expected Fatal, got {c:?}");
        let Classification::Fatal(msg) = c else {
            return;
        };
        assert!(msg.contains("b.example.com"));
        assert!(msg.contains("server exploded"));
    }

    #[test]
    fn non_400_status_is_plain_fatal_without_hint() {
        let e = ProviderError::UnexpectedStatus {
            provider: "dnspod".to_string(),
            status: 500,
            detail: "Internal Server Error".to_string(),
        };
        let c = classify(&e, "example.com");
        assert!(matches!(c, Classification::Fatal(_)), "expected Fatal, got {c:?}");
        let Classification::Fatal(msg) = c else {
            return;
        };
        assert!(!msg.contains("account ID"));
    }
}
