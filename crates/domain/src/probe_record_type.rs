use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RESINFO record type code (RFC 9606).
pub const RESINFO_TYPE_CODE: u16 = 261;

pub const TXT_TYPE_CODE: u16 = 16;

/// Record types a resolver can be probed for.
///
/// `Resinfo` is the RFC 9606 record. `Txt` covers resolvers that published
/// the same key/value text before RESINFO had a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeRecordType {
    Resinfo,
    Txt,
}

impl ProbeRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeRecordType::Resinfo => "RESINFO",
            ProbeRecordType::Txt => "TXT",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ProbeRecordType::Resinfo => RESINFO_TYPE_CODE,
            ProbeRecordType::Txt => TXT_TYPE_CODE,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            RESINFO_TYPE_CODE => Some(ProbeRecordType::Resinfo),
            TXT_TYPE_CODE => Some(ProbeRecordType::Txt),
            _ => None,
        }
    }
}

impl FromStr for ProbeRecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RESINFO" | "TYPE261" => Ok(ProbeRecordType::Resinfo),
            "TXT" => Ok(ProbeRecordType::Txt),
            other => Err(DomainError::UnsupportedRecordType(other.to_string())),
        }
    }
}

impl fmt::Display for ProbeRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
