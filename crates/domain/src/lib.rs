//! RESINFO Probe Domain Layer
pub mod comparison;
pub mod config;
pub mod errors;
pub mod probe_record_type;
pub mod probe_report;
pub mod resinfo;
pub mod resolver_address;

pub use comparison::{Feature, FeatureComparison, FeatureRow};
pub use config::{CliOverrides, Config, ConfigError, LogFormat, OutputFormat};
pub use errors::DomainError;
pub use probe_record_type::{ProbeRecordType, RESINFO_TYPE_CODE, TXT_TYPE_CODE};
pub use probe_report::{ProbeReport, ResolverReport};
pub use resinfo::{
    decode, decode_with, interpret, DecodeDiagnostic, DecodedPayload, ErrorInterpretation,
    ExtErrorRangeError, RawRecord, ResolverCapabilities,
};
pub use resolver_address::{ResolverAddress, DEFAULT_DNS_PORT};
