//! Zone resolution: find which hosted zone answers for a domain.

use crate::candidates::zone_candidates;
use crate::classify::{Classification, classify};
use crate::error::{ProviderError, Result};
use crate::traits::ChallengeProvider;

/// Resolve the zone in the provider account that hosts `domain`.
///
/// Probes each candidate from [`zone_candidates`] in order with
/// [`ChallengeProvider::authenticate`]. The first candidate that
/// authenticates wins and no further candidates are probed; most-specific
/// first ordering makes this safe. A candidate classified as
/// [`Classification::ZoneNotFound`] moves the loop on; anything else aborts
/// the whole resolution immediately, naming the candidate being attempted.
///
/// Exhausting the candidates fails with [`ProviderError::NoZoneFound`]
/// listing every zone name tried.
///
/// Makes no provider mutations and caches nothing: each call probes afresh,
/// tolerating that the account's zone set may change between calls.
pub async fn resolve_zone(provider: &dyn ChallengeProvider, domain: &str) -> Result<String> {
    let candidates = zone_candidates(domain);

    for candidate in &candidates {
        match provider.authenticate(candidate).await {
            Ok(()) => {
                log::debug!(
                    "[{}] resolved zone '{candidate}' for '{domain}'",
                    provider.id()
                );
                return Ok(candidate.clone());
            }
            Err(e) => match classify(&e, candidate) {
                Classification::ZoneNotFound => {
                    log::debug!(
                        "[{}] zone candidate '{candidate}' not hosted, trying next",
                        provider.id()
                    );
                }
                // Transient is never produced by the default policy; if a
                // future policy emits it, there is still no retry machinery
                // here, so it aborts exactly like Fatal.
                Classification::Fatal(detail) | Classification::Transient(detail) => {
                    log::error!("[{}] {detail}", provider.id());
                    return Err(ProviderError::ZoneResolution {
                        zone: candidate.clone(),
                        detail,
                    });
                }
            },
        }
    }

    Err(ProviderError::NoZoneFound {
        domain: domain.to_string(),
        candidates,
    })
}
