//! Shared test utilities and helpers.

#![allow(dead_code)]

use std::collections::HashSet;
use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dns01_challenge::{
    ChallengeProvider, ProviderCredentials, ProviderError, create_provider,
};

/// Skip a test when the named environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Err` and unwrap the error, failing the test otherwise.
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got Ok");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Generate a unique challenge record name for live tests.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_acme-challenge-test-{}", &uuid.to_string()[..8])
}

/// A record as stored by [`FakeProvider`]: `(zone, name, value)`.
pub type StoredRecord = (String, String, String);

/// Shared record storage, cloneable across provider instances so tests can
/// model a delete performed by a process other than the one that created.
pub type RecordStore = Arc<Mutex<HashSet<StoredRecord>>>;

pub fn new_record_store() -> RecordStore {
    Arc::new(Mutex::new(HashSet::new()))
}

pub fn store_len(store: &RecordStore) -> usize {
    match store.lock() {
        Ok(records) => records.len(),
        Err(poisoned) => poisoned.into_inner().len(),
    }
}

pub fn store_contains(store: &RecordStore, zone: &str, record_name: &str, value: &str) -> bool {
    let key = (
        zone.to_string(),
        record_name.to_string(),
        value.to_string(),
    );
    match store.lock() {
        Ok(records) => records.contains(&key),
        Err(poisoned) => poisoned.into_inner().contains(&key),
    }
}

/// In-memory provider for resolver and manager tests.
///
/// Hosts a fixed set of zones; any other zone fails authentication the way a
/// real account responds to a name it does not host. Duplicate creates and
/// missing deletes surface as the structured errors a real adapter maps to,
/// so the idempotence absorption in `TxtRecordManager` is exercised for real.
pub struct FakeProvider {
    hosted_zones: Vec<String>,
    /// When set, `authenticate` fails with a clone of this error for every
    /// zone, hosted or not.
    auth_error: Option<ProviderError>,
    /// Every zone passed to `authenticate`, in call order.
    pub auth_calls: Mutex<Vec<String>>,
    pub records: RecordStore,
}

impl FakeProvider {
    pub fn hosting(zones: &[&str]) -> Self {
        Self {
            hosted_zones: zones.iter().map(ToString::to_string).collect(),
            auth_error: None,
            auth_calls: Mutex::new(Vec::new()),
            records: new_record_store(),
        }
    }

    /// Same hosted zones, but records live in the caller-supplied store.
    pub fn hosting_with_store(zones: &[&str], records: RecordStore) -> Self {
        Self {
            records,
            ..Self::hosting(zones)
        }
    }

    pub fn failing_auth_with(error: ProviderError) -> Self {
        Self {
            hosted_zones: Vec::new(),
            auth_error: Some(error),
            auth_calls: Mutex::new(Vec::new()),
            records: new_record_store(),
        }
    }

    pub fn auth_call_count(&self) -> usize {
        match self.auth_calls.lock() {
            Ok(calls) => calls.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    fn lock_records(&self) -> std::sync::MutexGuard<'_, HashSet<StoredRecord>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn not_hosted(&self, zone: &str) -> ProviderError {
        ProviderError::DomainNotFound {
            provider: self.id().to_string(),
            domain: zone.to_string(),
            raw_message: Some("当前域名未添加, 请先添加域名".to_string()),
        }
    }
}

#[async_trait]
impl ChallengeProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "fake"
    }

    async fn authenticate(&self, zone: &str) -> Result<(), ProviderError> {
        match self.auth_calls.lock() {
            Ok(mut calls) => calls.push(zone.to_string()),
            Err(poisoned) => poisoned.into_inner().push(zone.to_string()),
        }
        if let Some(error) = &self.auth_error {
            return Err(error.clone());
        }
        if self.hosted_zones.iter().any(|hosted| hosted == zone) {
            Ok(())
        } else {
            Err(self.not_hosted(zone))
        }
    }

    async fn create_txt(
        &self,
        zone: &str,
        record_name: &str,
        value: &str,
        _ttl: u32,
    ) -> Result<(), ProviderError> {
        let key = (
            zone.to_string(),
            record_name.to_string(),
            value.to_string(),
        );
        let mut records = self.lock_records();
        if records.contains(&key) {
            return Err(ProviderError::RecordExists {
                provider: self.id().to_string(),
                record_name: record_name.to_string(),
                raw_message: None,
            });
        }
        records.insert(key);
        Ok(())
    }

    async fn delete_txt(
        &self,
        zone: &str,
        record_name: &str,
        value: &str,
    ) -> Result<(), ProviderError> {
        let key = (
            zone.to_string(),
            record_name.to_string(),
            value.to_string(),
        );
        let mut records = self.lock_records();
        if records.remove(&key) {
            Ok(())
        } else {
            Err(ProviderError::RecordNotFound {
                provider: self.id().to_string(),
                record_name: record_name.to_string(),
                raw_message: None,
            })
        }
    }
}

/// Context for live provider tests, built from environment variables.
pub struct TestContext {
    pub provider: Arc<dyn ChallengeProvider>,
    pub domain: String,
}

impl std::fmt::Debug for TestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestContext")
            .field("provider", &self.provider.id())
            .field("domain", &self.domain)
            .finish()
    }
}

impl TestContext {
    pub fn dnspod() -> Result<Self, String> {
        let secret_id = env::var("DNSPOD_SECRET_ID")
            .map_err(|_| "DNSPOD_SECRET_ID environment variable not set".to_string())?;
        let secret_key = env::var("DNSPOD_SECRET_KEY")
            .map_err(|_| "DNSPOD_SECRET_KEY environment variable not set".to_string())?;
        let domain = env::var("TEST_DOMAIN")
            .map_err(|_| "TEST_DOMAIN environment variable not set".to_string())?;

        let provider = create_provider(ProviderCredentials::Dnspod {
            secret_id,
            secret_key,
        })
        .map_err(|e| format!("failed to create provider: {e}"))?;

        Ok(Self { provider, domain })
    }
}
