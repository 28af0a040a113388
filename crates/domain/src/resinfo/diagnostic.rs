use super::ext_error::ExtErrorRangeError;
use std::fmt;

/// Something the decoder noticed while recovering from imperfect input.
///
/// Diagnostics never change what `decode` returns; they only describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeDiagnostic {
    OddHexLength { length: usize },
    InvalidHexDigit { position: usize, found: char },
    MissingRdLength { token: String },
    RdLengthMismatch { declared: usize, actual: usize },
    InvalidUtf8 { valid_up_to: usize },
    InvalidExtendedErrors { value: String, error: ExtErrorRangeError },
    DuplicateAttribute { key: &'static str, ignored: String },
    NoAttributes,
}

impl DecodeDiagnostic {
    /// Malformations discard the record or part of it; the rest are informational.
    pub fn is_malformation(&self) -> bool {
        matches!(
            self,
            DecodeDiagnostic::OddHexLength { .. }
                | DecodeDiagnostic::InvalidHexDigit { .. }
                | DecodeDiagnostic::InvalidUtf8 { .. }
                | DecodeDiagnostic::InvalidExtendedErrors { .. }
        )
    }

    /// Forward to `tracing`, used by [`super::decode`].
    pub fn trace(&self) {
        if self.is_malformation() {
            tracing::warn!(diagnostic = %self, "RESINFO record malformed");
        } else {
            tracing::debug!(diagnostic = %self, "RESINFO decode note");
        }
    }
}

impl fmt::Display for DecodeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeDiagnostic::OddHexLength { length } => {
                write!(f, "hex payload has odd length {}", length)
            }
            DecodeDiagnostic::InvalidHexDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at offset {}", found, position)
            }
            DecodeDiagnostic::MissingRdLength { token } => {
                write!(f, "expected RDLENGTH after \\#, found {:?}", token)
            }
            DecodeDiagnostic::RdLengthMismatch { declared, actual } => write!(
                f,
                "RDLENGTH {} does not match {} decoded octets",
                declared, actual
            ),
            DecodeDiagnostic::InvalidUtf8 { valid_up_to } => write!(
                f,
                "payload is not valid UTF-8 after byte {}, replaced",
                valid_up_to
            ),
            DecodeDiagnostic::InvalidExtendedErrors { value, error } => {
                write!(f, "exterr={}: {}", value, error)
            }
            DecodeDiagnostic::DuplicateAttribute { key, ignored } => {
                write!(f, "duplicate {}= ignored: {}", key, ignored)
            }
            DecodeDiagnostic::NoAttributes => f.write_str("no RESINFO attributes recognized"),
        }
    }
}
