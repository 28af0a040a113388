//! Surface encodings of a RESINFO record and their unwrapping to text.

use super::diagnostic::DecodeDiagnostic;
use std::fmt;

/// Marker that introduces the RFC 3597 generic RDATA form.
pub const GENERIC_RDATA_MARKER: &str = "\\#";

/// One record as handed over by an acquirer, in whatever form it surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawRecord(String);

impl RawRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn encoding(&self) -> RecordEncoding {
        RecordEncoding::detect(&self.0)
    }
}

impl From<String> for RawRecord {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawRecord {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for RawRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordEncoding {
    /// `\# <rdlength> <hex> ...`
    GenericHex,
    /// `"segment" "segment" ...`
    Quoted,
    /// Already decoded text.
    Plain,
}

impl RecordEncoding {
    pub fn detect(text: &str) -> Self {
        let text = text.trim();
        if text.starts_with(GENERIC_RDATA_MARKER) {
            RecordEncoding::GenericHex
        } else if scan_quoted_segments(text).is_some() {
            RecordEncoding::Quoted
        } else {
            RecordEncoding::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordEncoding::GenericHex => "generic-hex",
            RecordEncoding::Quoted => "quoted",
            RecordEncoding::Plain => "plain",
        }
    }
}

/// UTF-8 text recovered from a record's octets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedPayload(String);

impl DecodedPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DecodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recover the payload text of `raw`.
///
/// Returns `None` when the hex form is malformed; invalid UTF-8 is replaced, not rejected.
pub fn unwrap_payload(
    raw: &RawRecord,
    sink: &mut dyn FnMut(DecodeDiagnostic),
) -> Option<DecodedPayload> {
    let text = raw.as_str().trim();
    match RecordEncoding::detect(text) {
        RecordEncoding::GenericHex => unwrap_generic(text, sink),
        RecordEncoding::Quoted => {
            let octets = scan_quoted_segments(text)?;
            Some(octets_to_text(octets, sink))
        }
        RecordEncoding::Plain => Some(DecodedPayload::new(text)),
    }
}

fn unwrap_generic(text: &str, sink: &mut dyn FnMut(DecodeDiagnostic)) -> Option<DecodedPayload> {
    let body = text.strip_prefix(GENERIC_RDATA_MARKER)?;
    let mut tokens = body.split_ascii_whitespace().peekable();

    let declared = match tokens.peek() {
        Some(token) if token.bytes().all(|b| b.is_ascii_digit()) => {
            let declared = token.parse::<usize>().ok();
            tokens.next();
            declared
        }
        Some(token) => {
            sink(DecodeDiagnostic::MissingRdLength {
                token: token.to_string(),
            });
            None
        }
        None => None,
    };

    let hex: String = tokens.collect();
    let octets = match decode_hex(&hex) {
        Ok(octets) => octets,
        Err(diagnostic) => {
            sink(diagnostic);
            return None;
        }
    };

    if let Some(declared) = declared {
        if declared != octets.len() {
            sink(DecodeDiagnostic::RdLengthMismatch {
                declared,
                actual: octets.len(),
            });
        }
    }

    Some(octets_to_text(octets, sink))
}

fn octets_to_text(octets: Vec<u8>, sink: &mut dyn FnMut(DecodeDiagnostic)) -> DecodedPayload {
    match String::from_utf8(octets) {
        Ok(text) => DecodedPayload::new(text),
        Err(e) => {
            sink(DecodeDiagnostic::InvalidUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            });
            DecodedPayload::new(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, DecodeDiagnostic> {
    if hex.len() % 2 != 0 {
        return Err(DecodeDiagnostic::OddHexLength { length: hex.len() });
    }

    let digit = |position: usize| -> Result<u8, DecodeDiagnostic> {
        let byte = hex.as_bytes()[position];
        (byte as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| DecodeDiagnostic::InvalidHexDigit {
                position,
                found: hex
                    .get(position..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            })
    };

    (0..hex.len())
        .step_by(2)
        .map(|i| Ok((digit(i)? << 4) | digit(i + 1)?))
        .collect()
}

/// Parse a sequence of presentation-format character-strings.
///
/// Returns the concatenated contents, or `None` if anything other than
/// whitespace appears outside the quotes or a quote is left open.
/// Handles `\"`, `\\` and `\DDD` escapes.
pub(crate) fn scan_quoted_segments(text: &str) -> Option<Vec<u8>> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut segments = 0;
    let mut i = 0;

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i == bytes.len() {
            break;
        }
        if bytes[i] != b'"' {
            return None;
        }
        i += 1;

        loop {
            match bytes.get(i)? {
                b'"' => {
                    i += 1;
                    break;
                }
                b'\\' => {
                    let next = *bytes.get(i + 1)?;
                    if next.is_ascii_digit() {
                        let digits = bytes.get(i + 1..i + 4)?;
                        if !digits.iter().all(u8::is_ascii_digit) {
                            return None;
                        }
                        let value = digits
                            .iter()
                            .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
                        out.push(u8::try_from(value).ok()?);
                        i += 4;
                    } else {
                        out.push(next);
                        i += 2;
                    }
                }
                &b => {
                    out.push(b);
                    i += 1;
                }
            }
        }
        segments += 1;
    }

    if segments == 0 {
        None
    } else {
        Some(out)
    }
}
