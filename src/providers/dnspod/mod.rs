//! Tencent Cloud `DNSPod` adapter.

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{CreateRecordResponse, DescribeDomainResponse, RecordListResponse};

pub(crate) const DNSPOD_API_HOST: &str = "dnspod.tencentcloudapi.com";
pub(crate) const DNSPOD_SERVICE: &str = "dnspod";
pub(crate) const DNSPOD_VERSION: &str = "2021-03-23";

/// Tencent Cloud `DNSPod` challenge provider.
///
/// Holds one HTTP session reused across all calls; safe to share between
/// tasks behind an `Arc`.
pub struct DnspodProvider {
    pub(crate) client: Client,
    pub(crate) secret_id: String,
    pub(crate) secret_key: String,
}

impl DnspodProvider {
    pub fn new(secret_id: String, secret_key: String) -> Self {
        Self {
            client: create_http_client(),
            secret_id,
            secret_key,
        }
    }
}
