//! Zone candidate derivation.
//!
//! A hostname under validation is rarely itself the zone hosted at the
//! provider: `_acme-challenge.foo.example.com` usually lives in the
//! `example.com` zone. The resolver therefore probes progressively shorter
//! suffixes of the input until one authenticates.

/// Derive the ordered list of candidate zone names for `domain`, most
/// specific first.
///
/// `a.b.example.com` yields `[a.b.example.com, b.example.com, example.com]`.
/// The single-label suffix is never yielded, so a bare TLD is never probed:
/// an input with N labels produces exactly N-1 candidates.
///
/// Pure and deterministic, with no error cases: a trailing dot is ignored,
/// empty labels are dropped, and a malformed or single-label input simply
/// yields an empty sequence.
pub fn zone_candidates(domain: &str) -> Vec<String> {
    let labels: Vec<&str> = domain.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return Vec::new();
    }
    (0..labels.len() - 1).map(|i| labels[i..].join(".")).collect()
}
