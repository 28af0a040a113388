use crate::ports::ResinfoAcquirer;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use resinfo_probe_domain::{
    ProbeRecordType, ProbeReport, RawRecord, ResolverAddress, ResolverCapabilities,
    ResolverReport,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ProbeResolversUseCase {
    acquirer: Arc<dyn ResinfoAcquirer>,
}

impl ProbeResolversUseCase {
    pub fn new(acquirer: Arc<dyn ResinfoAcquirer>) -> Self {
        Self { acquirer }
    }

    /// Query every resolver for every record type concurrently and decode the answers.
    ///
    /// A failed query leaves that resolver without data for the type; it
    /// never affects the other resolvers in the batch.
    pub async fn execute(
        &self,
        resolvers: &[ResolverAddress],
        domain: &str,
        record_types: &[ProbeRecordType],
    ) -> ProbeReport {
        let mut reports: Vec<ResolverReport> =
            resolvers.iter().copied().map(ResolverReport::new).collect();

        let mut pending = FuturesUnordered::new();
        for (index, resolver) in resolvers.iter().enumerate() {
            for &record_type in record_types {
                info!(resolver = %resolver, record_type = %record_type, domain = %domain, "Querying resolver");
                let acquirer = &self.acquirer;
                pending.push(async move {
                    let outcome = acquirer.fetch_records(resolver, domain, record_type).await;
                    (index, record_type, outcome)
                });
            }
        }

        while let Some((index, record_type, outcome)) = pending.next().await {
            let report = &mut reports[index];
            match outcome {
                Ok(records) => match Self::decode_records(&records) {
                    Some(capabilities) => {
                        debug!(
                            resolver = %report.resolver,
                            record_type = %record_type,
                            records = records.len(),
                            capabilities = ?capabilities,
                            "Decoded resolver records"
                        );
                        report.results.insert(record_type, capabilities);
                    }
                    None => {
                        warn!(resolver = %report.resolver, record_type = %record_type, "No records returned");
                    }
                },
                Err(e) => {
                    warn!(resolver = %report.resolver, record_type = %record_type, error = %e, "Query failed");
                    report.failures.push((record_type, e));
                }
            }
        }

        for report in &mut reports {
            report.failures.sort_by_key(|(record_type, _)| *record_type);
        }

        ProbeReport::new(record_types.to_vec(), reports)
    }

    /// Merge all records of one resolver; `None` when there were none.
    pub fn decode_records(records: &[RawRecord]) -> Option<ResolverCapabilities> {
        ResolverCapabilities::merged(records.iter().map(RawRecord::decode))
    }
}
