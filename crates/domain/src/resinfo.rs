//! RESINFO (RFC 9606) record decoding.
//!
//! A record reaches the decoder in one of three surface forms: the generic
//! `\# <len> <hex>` form, quoted character-strings, or text that was already
//! decoded upstream. All three end up as [`ResolverCapabilities`]; malformed
//! input degrades to defaults and is reported through [`DecodeDiagnostic`].

mod attribute;
mod capabilities;
mod decoder;
mod diagnostic;
mod ext_error;
mod raw_record;

pub use attribute::{
    tokenize, AttributeToken, ATTRIBUTE_DELIMITER, EXTENDED_ERRORS_KEY, INFO_URL_KEY,
    QNAME_MINIMIZATION_FLAG,
};
pub use capabilities::ResolverCapabilities;
pub use decoder::{decode, decode_payload, decode_payload_with, decode_with};
pub use diagnostic::DecodeDiagnostic;
pub use ext_error::{
    describe_code, interpret, ErrorInterpretation, ExtErrorRangeError, EXTENDED_ERROR_TABLE,
    RANGE_SEPARATOR,
};
pub use raw_record::{
    unwrap_payload, DecodedPayload, RawRecord, RecordEncoding, GENERIC_RDATA_MARKER,
};

impl RawRecord {
    pub fn decode(&self) -> ResolverCapabilities {
        decode(self)
    }
}
