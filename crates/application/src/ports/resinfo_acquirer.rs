use async_trait::async_trait;
use resinfo_probe_domain::{DomainError, ProbeRecordType, RawRecord, ResolverAddress};

/// Fetches the raw records a resolver publishes for `domain`.
///
/// Implementations own the network query, its timeout and the translation
/// of DNS-level failures into `DomainError`. An empty vector means the
/// resolver answered without records of that type.
#[async_trait]
pub trait ResinfoAcquirer: Send + Sync {
    async fn fetch_records(
        &self,
        resolver: &ResolverAddress,
        domain: &str,
        record_type: ProbeRecordType,
    ) -> Result<Vec<RawRecord>, DomainError>;
}
