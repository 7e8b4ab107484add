use serde::{Deserialize, Serialize};

/// Identifies which DNS provider adapter to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Tencent Cloud `DNSPod`.
    Dnspod,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dnspod => write!(f, "dnspod"),
        }
    }
}

/// Validation error for provider credentials.
///
/// Returned when credential fields are missing or empty. The credential
/// values themselves are never echoed back.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { provider, field } => {
                write!(f, "[{provider}] missing required credential field: {field}")
            }
            Self::EmptyField { provider, field } => {
                write!(f, "[{provider}] credential field must not be empty: {field}")
            }
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for the supported DNS providers.
///
/// Each variant holds the account identifier / secret token pair required by
/// that provider. Pass this to [`create_provider()`](crate::create_provider)
/// to instantiate an adapter. The core never logs or persists these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Tencent Cloud `DNSPod` credentials.
    #[serde(rename = "dnspod")]
    Dnspod {
        /// Tencent Cloud Secret ID (the account identifier).
        secret_id: String,
        /// Tencent Cloud Secret Key (the secret token).
        secret_key: String,
    },
}

impl ProviderCredentials {
    /// Construct credentials from a flat key-value map, validating required
    /// fields.
    ///
    /// Useful for credential sources stored as flat key-value pairs (INI-style
    /// credential files, environment blocks). The caller extracts the pairs;
    /// this type only checks presence and non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or
    /// empty.
    pub fn from_map(
        provider: &ProviderType,
        map: &std::collections::HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            ProviderType::Dnspod => Ok(Self::Dnspod {
                secret_id: Self::get_required_field(provider, map, "secretId")?,
                secret_key: Self::get_required_field(provider, map, "secretKey")?,
            }),
        }
    }

    /// Fetch a required field from the map and verify it is not empty.
    fn get_required_field(
        provider: &ProviderType,
        map: &std::collections::HashMap<String, String>,
        key: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                provider: provider.clone(),
                field: key.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                provider: provider.clone(),
                field: key.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }

    /// Flatten the credentials back into the key-value form [`from_map`](Self::from_map)
    /// reads, using the same keys.
    pub fn to_map(&self) -> std::collections::HashMap<String, String> {
        match self {
            Self::Dnspod {
                secret_id,
                secret_key,
            } => [
                ("secretId".to_string(), secret_id.clone()),
                ("secretKey".to_string(), secret_key.clone()),
            ]
            .into(),
        }
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Dnspod { .. } => ProviderType::Dnspod,
        }
    }
}
