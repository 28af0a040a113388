//! Extended-error range interpretation.
//!
//! A RESINFO `exterr=` value names the extended DNS error codes a resolver
//! may return, either as one code (`15`) or an inclusive range (`15-17`).

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Separator between the two bounds of a range.
pub const RANGE_SEPARATOR: char = '-';

/// Human-readable descriptions for the codes the probe knows about.
pub const EXTENDED_ERROR_TABLE: &[(u16, &str)] = &[
    (15, "DNS query timeout"),
    (16, "DNS resolution failure"),
    (17, "DNS server misconfiguration"),
    (18, "Network connectivity issue"),
    (19, "DNS server unreachable"),
    (20, "DNSSEC validation failure"),
];

/// Describe a single code, falling back to a generic text for codes outside the table.
pub fn describe_code(code: u16) -> String {
    EXTENDED_ERROR_TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, meaning)| (*meaning).to_string())
        .unwrap_or_else(|| format!("Unknown error code: {}", code))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtErrorRangeError {
    #[error("empty extended error value")]
    Empty,

    #[error("invalid error code '{token}'")]
    InvalidCode { token: String },

    #[error("reversed range {start}-{end}")]
    ReversedRange { start: u16, end: u16 },

    #[error("expected a code or a start-end range, got '{value}'")]
    InvalidFormat { value: String },
}

impl ExtErrorRangeError {
    /// The part of the input the error is about.
    pub fn offending_token(&self) -> String {
        match self {
            ExtErrorRangeError::Empty => String::new(),
            ExtErrorRangeError::InvalidCode { token } => token.clone(),
            ExtErrorRangeError::ReversedRange { start, end } => format!("{}-{}", start, end),
            ExtErrorRangeError::InvalidFormat { value } => value.clone(),
        }
    }
}

/// The advertised extended-error codes of one resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorInterpretation {
    Single(u16),

    /// Inclusive, `start <= end`.
    Range { start: u16, end: u16 },

    /// The advertised value could not be interpreted; keeps the raw text.
    Invalid { value: String },
}

impl ErrorInterpretation {
    /// Advertised codes, or `None` when the value was not a valid range.
    pub fn codes(&self) -> Option<RangeInclusive<u16>> {
        match self {
            ErrorInterpretation::Single(code) => Some(*code..=*code),
            ErrorInterpretation::Range { start, end } => Some(*start..=*end),
            ErrorInterpretation::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ErrorInterpretation::Invalid { .. })
    }

    /// Per-code descriptions joined with `"; "` in ascending code order.
    pub fn description(&self) -> String {
        match self {
            ErrorInterpretation::Invalid { value } => format!("Invalid error range: {}", value),
            _ => self
                .codes()
                .into_iter()
                .flatten()
                .map(describe_code)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

impl fmt::Display for ErrorInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl Serialize for ErrorInterpretation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Interpret an `exterr=` value.
///
/// A reversed range is rejected rather than reordered.
pub fn interpret(range_text: &str) -> Result<ErrorInterpretation, ExtErrorRangeError> {
    let range_text = range_text.trim();
    if range_text.is_empty() {
        return Err(ExtErrorRangeError::Empty);
    }

    let parts: Vec<&str> = range_text.split(RANGE_SEPARATOR).collect();
    match parts.as_slice() {
        [single] => parse_code(single).map(ErrorInterpretation::Single),
        [start, end] => {
            let start = parse_code(start)?;
            let end = parse_code(end)?;
            if start > end {
                return Err(ExtErrorRangeError::ReversedRange { start, end });
            }
            Ok(ErrorInterpretation::Range { start, end })
        }
        _ => Err(ExtErrorRangeError::InvalidFormat {
            value: range_text.to_string(),
        }),
    }
}

fn parse_code(token: &str) -> Result<u16, ExtErrorRangeError> {
    let token = token.trim();
    let invalid = || ExtErrorRangeError::InvalidCode {
        token: token.to_string(),
    };

    // u16::from_str accepts a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse::<u16>().map_err(|_| invalid())
}
