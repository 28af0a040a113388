#![allow(dead_code)]

use async_trait::async_trait;
use resinfo_probe_application::ports::ResinfoAcquirer;
use resinfo_probe_domain::{DomainError, ProbeRecordType, RawRecord, ResolverAddress};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Barrier, RwLock};

type Key = (ResolverAddress, ProbeRecordType);

#[derive(Clone)]
pub struct MockResinfoAcquirer {
    responses: Arc<RwLock<HashMap<Key, Result<Vec<RawRecord>, DomainError>>>>,
    domains: Arc<RwLock<Vec<String>>>,
    calls: Arc<AtomicUsize>,
    barrier: Option<Arc<Barrier>>,
}

impl MockResinfoAcquirer {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            domains: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            barrier: None,
        }
    }

    /// Every fetch waits until `parties` fetches are in flight at once.
    pub fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub async fn set_records(&self, resolver: &str, record_type: ProbeRecordType, records: &[&str]) {
        let records = records.iter().map(|r| RawRecord::from(*r)).collect();
        self.responses
            .write()
            .await
            .insert((parse(resolver), record_type), Ok(records));
    }

    pub async fn set_error(&self, resolver: &str, record_type: ProbeRecordType, error: DomainError) {
        self.responses
            .write()
            .await
            .insert((parse(resolver), record_type), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn queried_domains(&self) -> Vec<String> {
        self.domains.read().await.clone()
    }
}

impl Default for MockResinfoAcquirer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResinfoAcquirer for MockResinfoAcquirer {
    async fn fetch_records(
        &self,
        resolver: &ResolverAddress,
        domain: &str,
        record_type: ProbeRecordType,
    ) -> Result<Vec<RawRecord>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.domains.write().await.push(domain.to_string());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        self.responses
            .read()
            .await
            .get(&(*resolver, record_type))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn parse(resolver: &str) -> ResolverAddress {
    resolver.parse().unwrap()
}
