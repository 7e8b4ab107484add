//! Tencent Cloud `DNSPod` API wire types.

use serde::Deserialize;

// ============ Response envelope ============

/// Generic Tencent Cloud response envelope.
///
/// The payload shape depends on the action, and errors arrive nested inside
/// `Response`, so the body is held as a raw value and interpreted in two
/// steps.
#[derive(Debug, Deserialize)]
pub(crate) struct TencentResponse {
    #[serde(rename = "Response")]
    pub response: serde_json::Value,
}

/// Error payload nested inside Tencent Cloud responses.
#[derive(Debug, Deserialize)]
pub(crate) struct TencentError {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
}

// ============ Domain structures ============

/// Response payload for `DescribeDomain`.
#[derive(Debug, Deserialize)]
pub(crate) struct DescribeDomainResponse {
    #[serde(rename = "DomainInfo")]
    pub domain_info: DescribeDomainInfo,
}

/// Nested domain information in `DescribeDomain`.
#[derive(Debug, Deserialize)]
pub(crate) struct DescribeDomainInfo {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Status")]
    pub status: String,
}

// ============ Record structures ============

/// Response payload for `DescribeRecordList`.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordListResponse {
    #[serde(rename = "RecordList")]
    pub record_list: Option<Vec<DnspodRecord>>,
}

/// DNS record item returned by `DescribeRecordList`.
#[derive(Debug, Deserialize)]
pub(crate) struct DnspodRecord {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Response payload for `CreateRecord`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}
