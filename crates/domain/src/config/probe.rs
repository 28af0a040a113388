use crate::{DomainError, ProbeRecordType, ResolverAddress, DEFAULT_DNS_PORT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Resolvers to probe when none are given on the command line
    #[serde(default)]
    pub resolvers: Vec<String>,

    /// Owner name the RESINFO query is sent for
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Port used for resolvers given without one
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_record_types")]
    pub record_types: Vec<ProbeRecordType>,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            resolvers: Vec::new(),
            domain: default_domain(),
            port: default_port(),
            query_timeout: default_query_timeout(),
            record_types: default_record_types(),
        }
    }
}

fn default_domain() -> String {
    "example.com".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_query_timeout() -> u64 {
    5
}

fn default_record_types() -> Vec<ProbeRecordType> {
    vec![ProbeRecordType::Resinfo]
}

impl ProbeConfig {
    /// Parse the configured resolvers, keeping the invalid ones apart so the
    /// caller can report and skip them.
    pub fn resolver_addresses(&self) -> (Vec<ResolverAddress>, Vec<DomainError>) {
        let mut valid = Vec::with_capacity(self.resolvers.len());
        let mut invalid = Vec::new();

        for entry in &self.resolvers {
            match ResolverAddress::parse_with_port(entry, self.port) {
                Ok(addr) if !valid.contains(&addr) => valid.push(addr),
                Ok(_) => {}
                Err(e) => invalid.push(e),
            }
        }

        (valid, invalid)
    }
}
