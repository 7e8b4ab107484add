//! Concrete DNS provider adapters.

pub(crate) mod common;
mod dnspod;

pub use dnspod::DnspodProvider;
