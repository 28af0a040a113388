//! Turns a DNS response into the raw record strings the decoder consumes.
//!
//! TXT answers become quoted character-strings; every other answer of the
//! probed type is rendered in the generic `\# <len> <hex>` form of RFC 3597.

use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use resinfo_probe_domain::resinfo::GENERIC_RDATA_MARKER;
use resinfo_probe_domain::{DomainError, ProbeRecordType, RawRecord};
use std::fmt::Write;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answers of the probed type, rendered.
    pub records: Vec<RawRecord>,

    /// Answers of other types (CNAME chains and the like).
    pub skipped: usize,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(
        response_bytes: &[u8],
        record_type: ProbeRecordType,
    ) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let wanted = RecordType::from(record_type.to_u16());
        let mut records = Vec::new();
        let mut skipped = 0;

        for record in message.answers() {
            if record.record_type() != wanted {
                skipped += 1;
                continue;
            }
            records.push(Self::render_record(record)?);
        }

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            records,
            skipped,
        };

        debug!(
            rcode = Self::rcode_to_status(response.rcode),
            records = response.records.len(),
            skipped = response.skipped,
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn render_record(record: &Record) -> Result<RawRecord, DomainError> {
        match record.data() {
            RData::TXT(txt) => Ok(RawRecord::new(render_character_strings(
                txt.txt_data().iter().map(|s| &s[..]),
            ))),
            rdata => {
                let octets = rdata.to_bytes().map_err(|e| {
                    DomainError::InvalidDnsResponse(format!("Failed to encode RDATA: {}", e))
                })?;
                Ok(RawRecord::new(render_generic(&octets)))
            }
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

/// `\# <len> <hex>`; an empty RDATA renders as `\# 0`.
pub fn render_generic(octets: &[u8]) -> String {
    let mut out = format!("{} {}", GENERIC_RDATA_MARKER, octets.len());
    if !octets.is_empty() {
        out.push(' ');
        for byte in octets {
            let _ = write!(out, "{:02x}", byte);
        }
    }
    out
}

/// Presentation form of character-strings: quoted, space separated.
pub fn render_character_strings<'a, I>(strings: I) -> String
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut out = String::new();
    for (i, string) in strings.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push('"');
        for &byte in string {
            match byte {
                b'"' => out.push_str("\\\""),
                b'\\' => out.push_str("\\\\"),
                0x20..=0x7e => out.push(byte as char),
                _ => {
                    let _ = write!(out, "\\{:03}", byte);
                }
            }
        }
        out.push('"');
    }
    out
}
