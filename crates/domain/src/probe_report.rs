use crate::resinfo::ResolverCapabilities;
use crate::{DomainError, ProbeRecordType, ResolverAddress};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Everything learned about one resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverReport {
    pub resolver: ResolverAddress,

    /// Merged capabilities per record type; a type with no records has no entry.
    pub results: BTreeMap<ProbeRecordType, ResolverCapabilities>,

    /// Acquisition failures, kept apart from decoded data.
    pub failures: Vec<(ProbeRecordType, DomainError)>,
}

impl ResolverReport {
    pub fn new(resolver: ResolverAddress) -> Self {
        Self {
            resolver,
            results: BTreeMap::new(),
            failures: Vec::new(),
        }
    }

    pub fn capabilities(&self, record_type: ProbeRecordType) -> Option<&ResolverCapabilities> {
        self.results.get(&record_type)
    }

    pub fn has_records(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Probe results for a batch of resolvers, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProbeReport {
    pub record_types: Vec<ProbeRecordType>,
    pub resolvers: Vec<ResolverReport>,
}

impl ProbeReport {
    pub fn new(record_types: Vec<ProbeRecordType>, resolvers: Vec<ResolverReport>) -> Self {
        Self {
            record_types,
            resolvers,
        }
    }

    pub fn get(&self, resolver: &ResolverAddress) -> Option<&ResolverReport> {
        self.resolvers.iter().find(|r| &r.resolver == resolver)
    }

    pub fn has_records(&self) -> bool {
        self.resolvers.iter().any(ResolverReport::has_records)
    }

    pub fn is_multi_type(&self) -> bool {
        self.record_types.len() > 1
    }
}

/// `{resolver: capabilities}`, or `{resolver: {TYPE: capabilities}}` when
/// several record types were probed. Resolvers without records are left out.
impl Serialize for ProbeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let with_records: Vec<&ResolverReport> =
            self.resolvers.iter().filter(|r| r.has_records()).collect();

        let mut map = serializer.serialize_map(Some(with_records.len()))?;
        for report in with_records {
            let key = report.resolver.to_string();
            if self.is_multi_type() {
                map.serialize_entry(&key, &report.results)?;
            } else if let Some(capabilities) = report.results.values().next() {
                map.serialize_entry(&key, capabilities)?;
            }
        }
        map.end()
    }
}
