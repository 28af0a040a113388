#![allow(dead_code)]
use resinfo_probe_domain::{
    ErrorInterpretation, ProbeRecordType, RawRecord, ResolverAddress, ResolverCapabilities,
    ResolverReport,
};

/// Render text in the generic `\# <len> <hex>` form, the way a wire capture surfaces it.
pub fn generic_record(text: &str) -> RawRecord {
    let hex: Vec<String> = text.bytes().map(|b| format!("{:02x}", b)).collect();
    RawRecord::new(format!("\\# {} {}", text.len(), hex.join(" ")))
}

pub struct CapabilitiesBuilder {
    capabilities: ResolverCapabilities,
}

impl CapabilitiesBuilder {
    pub fn new() -> Self {
        Self {
            capabilities: ResolverCapabilities::default(),
        }
    }

    pub fn qname_minimization(mut self, enabled: bool) -> Self {
        self.capabilities.qname_minimization = enabled;
        self
    }

    pub fn extended_errors(mut self, start: u16, end: u16) -> Self {
        self.capabilities.extended_errors = Some(if start == end {
            ErrorInterpretation::Single(start)
        } else {
            ErrorInterpretation::Range { start, end }
        });
        self
    }

    pub fn info_url(mut self, url: &str) -> Self {
        self.capabilities.info_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> ResolverCapabilities {
        self.capabilities
    }
}

pub fn resolver_report(
    resolver: &str,
    results: Vec<(ProbeRecordType, ResolverCapabilities)>,
) -> ResolverReport {
    let mut report = ResolverReport::new(resolver.parse::<ResolverAddress>().unwrap());
    report.results.extend(results);
    report
}
