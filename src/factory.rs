//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::DnspodProvider;
use crate::traits::ChallengeProvider;
use crate::types::ProviderCredentials;

/// Creates a [`ChallengeProvider`] from the given credentials.
///
/// The concrete adapter is selected by the [`ProviderCredentials`] variant at
/// construction time; there is no runtime type inspection. The returned
/// provider is wrapped in `Arc<dyn ChallengeProvider>` for sharing across
/// async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns01_challenge::{ProviderCredentials, create_provider};
///
/// let provider = create_provider(ProviderCredentials::Dnspod {
///     secret_id: "your-secret-id".to_string(),
///     secret_key: "your-secret-key".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn ChallengeProvider>> {
    match credentials {
        ProviderCredentials::Dnspod {
            secret_id,
            secret_key,
        } => Ok(Arc::new(DnspodProvider::new(secret_id, secret_key))),
    }
}
