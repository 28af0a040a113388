use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use super::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use resinfo_probe_application::ports::ResinfoAcquirer;
use resinfo_probe_domain::{DomainError, ProbeRecordType, RawRecord, ResolverAddress};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Queries a resolver directly over UDP, one attempt per call.
pub struct UdpResinfoAcquirer {
    timeout: Duration,
}

impl UdpResinfoAcquirer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ResinfoAcquirer for UdpResinfoAcquirer {
    async fn fetch_records(
        &self,
        resolver: &ResolverAddress,
        domain: &str,
        record_type: ProbeRecordType,
    ) -> Result<Vec<RawRecord>, DomainError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query_with_id(domain, record_type)?;

        let transport = UdpTransport::new(resolver.socket_addr());
        let transport_response = transport.send(&query_bytes, self.timeout).await?;

        let response = ResponseParser::parse(&transport_response.bytes, record_type)?;

        if response.truncated {
            warn!(
                resolver = %resolver,
                record_type = %record_type,
                "Response truncated (TC bit), using the partial answer"
            );
        }

        if !response.is_success() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} answered {} for {} {}",
                resolver,
                ResponseParser::rcode_to_status(response.rcode),
                domain,
                record_type
            )));
        }

        debug!(
            resolver = %resolver,
            record_type = %record_type,
            id = id,
            records = response.records.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            protocol = transport_response.protocol_used,
            "Records acquired"
        );

        Ok(response.records)
    }
}
