//! # dns01-challenge
//!
//! Automates proof of domain control for ACME dns-01 certificate issuance:
//! resolves which DNS zone in a provider account hosts an arbitrary
//! hostname, then idempotently creates and removes the challenge TXT record
//! through the provider's API.
//!
//! A hostname under validation (e.g. `_acme-challenge.www.example.com`) is
//! usually a subdomain of the zone actually hosted at the provider
//! (`example.com`). The resolver probes progressively shorter suffixes of
//! the hostname until one authenticates, classifying each failure as either
//! "try the next candidate" or "abort the whole operation".
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [DNSPod (Tencent Cloud)](https://www.dnspod.cn/) | TC3-HMAC-SHA256 |
//!
//! Additional providers plug in by implementing [`ChallengeProvider`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_challenge::{ProviderCredentials, TxtRecordManager, create_provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Dnspod {
//!         secret_id: "your-secret-id".to_string(),
//!         secret_key: "your-secret-key".to_string(),
//!     })?;
//!
//!     let manager = TxtRecordManager::new(provider);
//!
//!     // Before requesting verification:
//!     manager
//!         .create(
//!             "www.example.com",
//!             "_acme-challenge.www.example.com",
//!             "challenge-token",
//!         )
//!         .await?;
//!
//!     // ... wait for DNS propagation, let the CA verify ...
//!
//!     // Always clean up afterwards, whether verification passed or not:
//!     manager
//!         .delete(
//!             "www.example.com",
//!             "_acme-challenge.www.example.com",
//!             "challenge-token",
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). During
//! zone resolution, errors are classified ([`classify`]): a zone that simply
//! is not hosted moves the resolver to the next candidate, while anything
//! else — including credential rejections and transport failures — aborts
//! immediately. Nothing is retried anywhere in this crate; retry and backoff
//! policy, like propagation waiting, belongs to the embedding system.
//!
//! ## Scope
//!
//! This crate covers zone resolution and TXT record mutation only. The ACME
//! protocol itself, credential file parsing and propagation-delay waiting
//! are the caller's concern.

mod candidates;
mod classify;
mod error;
mod factory;
mod http_client;
mod mutator;
mod providers;
mod resolver;
mod traits;
mod types;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the factory function
pub use factory::create_provider;

// Re-export the core pieces
pub use candidates::zone_candidates;
pub use classify::{Classification, classify};
pub use mutator::{DEFAULT_TTL, TxtRecordManager};
pub use resolver::resolve_zone;
pub use traits::ChallengeProvider;

// Re-export types
pub use types::{CredentialValidationError, ProviderCredentials, ProviderType};

// Re-export concrete providers
pub use providers::DnspodProvider;
