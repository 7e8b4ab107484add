use serde::{Deserialize, Serialize};

/// Unified error type for all challenge operations.
///
/// Provider-level variants carry a `provider` field identifying which adapter
/// produced the error plus variant-specific context. The two resolution-level
/// variants ([`ZoneResolution`](Self::ZoneResolution) and
/// [`NoZoneFound`](Self::NoZoneFound)) are produced by the zone resolver
/// rather than by an adapter.
///
/// All variants are serializable for structured error reporting.
///
/// No error is retried anywhere in this crate: transport failures
/// ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)) surface
/// immediately and retry policy, if any, belongs to the embedding system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider API answered with an unexpected HTTP status and no
    /// structured error body.
    UnexpectedStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code of the response.
        status: u16,
        /// Response body excerpt or transport detail.
        detail: String,
    },

    /// The specified domain/zone is not hosted in the provider account.
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Domain name that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A TXT record with the same name and value already exists.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified TXT record was not found.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Name of the record that was not found.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },

    /// Zone resolution aborted on a fatal error while probing a candidate.
    ///
    /// `detail` carries the full classified message, including the zone name
    /// being attempted and, where applicable, a credential hint.
    ZoneResolution {
        /// Zone candidate that was being probed when the error occurred.
        zone: String,
        /// Classified error message.
        detail: String,
    },

    /// Every zone candidate was probed and none is hosted in the account.
    ///
    /// `candidates` lists, in probe order, every zone name that was tried, so
    /// the account owner can diagnose a missing or misconfigured zone.
    NoZoneFound {
        /// The domain that was being resolved.
        domain: String,
        /// Every candidate zone name tried, in order.
        candidates: Vec<String>,
    },
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::UnexpectedStatus {
                provider,
                status,
                detail,
            } => {
                write!(f, "[{provider}] HTTP {status}: {detail}")
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Domain '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Domain '{domain}' not found")
                }
            }
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")
            }
            Self::RecordNotFound {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' not found")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
            Self::ZoneResolution { detail, .. } => {
                write!(f, "{detail}")
            }
            Self::NoZoneFound { domain, candidates } => {
                write!(
                    f,
                    "unable to determine zone for '{domain}' using zone names: {}",
                    candidates.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
