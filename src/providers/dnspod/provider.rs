//! `DNSPod` `ChallengeProvider` implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::providers::common::full_name_to_relative;
use crate::traits::{ChallengeProvider, ErrorContext};

use super::{CreateRecordResponse, DescribeDomainResponse, DnspodProvider, RecordListResponse};

/// Record line used for all challenge records ("default" line).
const RECORD_LINE_DEFAULT: &str = "默认";

#[async_trait]
impl ChallengeProvider for DnspodProvider {
    fn id(&self) -> &'static str {
        "dnspod"
    }

    /// Probe `zone` with `DescribeDomain`. Succeeding proves both that the
    /// zone is hosted in the account and that the signed credentials are
    /// accepted; a candidate that is not a registered zone maps to
    /// `DomainNotFound` in the error mapper.
    async fn authenticate(&self, zone: &str) -> Result<()> {
        #[derive(Serialize)]
        struct DescribeDomainRequest {
            #[serde(rename = "Domain")]
            domain: String,
        }

        let req = DescribeDomainRequest {
            domain: zone.to_string(),
        };
        let ctx = ErrorContext {
            domain: Some(zone.to_string()),
            ..Default::default()
        };

        let response: DescribeDomainResponse = self.request("DescribeDomain", &req, ctx).await?;
        log::debug!(
            "[dnspod] authenticated against zone '{}' (status: {})",
            response.domain_info.domain,
            response.domain_info.status
        );
        Ok(())
    }

    async fn create_txt(
        &self,
        zone: &str,
        record_name: &str,
        value: &str,
        ttl: u32,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct CreateRecordRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "SubDomain")]
            sub_domain: String,
            #[serde(rename = "RecordType")]
            record_type: String,
            #[serde(rename = "RecordLine")]
            record_line: String,
            #[serde(rename = "Value")]
            value: String,
            #[serde(rename = "TTL")]
            ttl: u32,
        }

        let sub_domain = full_name_to_relative(record_name, zone);
        let req = CreateRecordRequest {
            domain: zone.to_string(),
            sub_domain: sub_domain.clone(),
            record_type: "TXT".to_string(),
            record_line: RECORD_LINE_DEFAULT.to_string(),
            value: value.to_string(),
            ttl,
        };
        let ctx = ErrorContext {
            record_name: Some(sub_domain.clone()),
            domain: Some(zone.to_string()),
        };

        let response: CreateRecordResponse = self.request("CreateRecord", &req, ctx).await?;
        log::debug!(
            "[dnspod] created TXT record '{sub_domain}' in '{zone}' (id {})",
            response.record_id
        );
        Ok(())
    }

    /// Look up every TXT record matching the name, then delete the ones whose
    /// value matches. Record IDs are fetched fresh on every call; nothing is
    /// remembered from the create side, so this works from any instance.
    async fn delete_txt(&self, zone: &str, record_name: &str, value: &str) -> Result<()> {
        #[derive(Serialize)]
        struct DescribeRecordListRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "Subdomain")]
            subdomain: String,
            #[serde(rename = "RecordType")]
            record_type: String,
        }

        #[derive(Serialize)]
        struct DeleteRecordRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "RecordId")]
            record_id: u64,
        }

        #[derive(Debug, Deserialize)]
        struct DeleteRecordResponse {}

        let sub_domain = full_name_to_relative(record_name, zone);
        let list_req = DescribeRecordListRequest {
            domain: zone.to_string(),
            subdomain: sub_domain.clone(),
            record_type: "TXT".to_string(),
        };
        let ctx = ErrorContext {
            record_name: Some(sub_domain.clone()),
            domain: Some(zone.to_string()),
        };

        let listing: Result<RecordListResponse> = self
            .request("DescribeRecordList", &list_req, ctx.clone())
            .await;

        let records = match listing {
            Ok(data) => data.record_list.unwrap_or_default(),
            // No records under that name at all: already absent.
            Err(ProviderError::RecordNotFound { .. }) => {
                log::debug!("[dnspod] no TXT records named '{sub_domain}' in '{zone}'");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut deleted = 0u32;
        for record in records
            .iter()
            .filter(|r| r.record_type == "TXT" && r.name == sub_domain && r.value == value)
        {
            let del_req = DeleteRecordRequest {
                domain: zone.to_string(),
                record_id: record.record_id,
            };
            let result: Result<DeleteRecordResponse> =
                self.request("DeleteRecord", &del_req, ctx.clone()).await;
            match result {
                Ok(_) => deleted += 1,
                // Lost a race with another cleanup: the record is gone, which
                // is the state we wanted.
                Err(ProviderError::RecordNotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        log::debug!("[dnspod] deleted {deleted} TXT record(s) '{sub_domain}' from '{zone}'");
        Ok(())
    }
}
