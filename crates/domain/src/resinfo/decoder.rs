use super::attribute::{
    tokenize, AttributeToken, EXTENDED_ERRORS_KEY, INFO_URL_KEY, QNAME_MINIMIZATION_FLAG,
};
use super::capabilities::ResolverCapabilities;
use super::diagnostic::DecodeDiagnostic;
use super::ext_error::{interpret, ErrorInterpretation};
use super::raw_record::{unwrap_payload, DecodedPayload, RawRecord};

/// Decode one RESINFO record, reporting diagnostics through `tracing`.
pub fn decode(raw: &RawRecord) -> ResolverCapabilities {
    decode_with(raw, &mut |diagnostic| diagnostic.trace())
}

/// Decode one RESINFO record, handing each diagnostic to `sink`.
///
/// Never fails: a record that cannot be unwrapped yields default capabilities.
pub fn decode_with(
    raw: &RawRecord,
    sink: &mut dyn FnMut(DecodeDiagnostic),
) -> ResolverCapabilities {
    match unwrap_payload(raw, sink) {
        Some(payload) => decode_payload_with(&payload, sink),
        None => ResolverCapabilities::default(),
    }
}

pub fn decode_payload(payload: &DecodedPayload) -> ResolverCapabilities {
    decode_payload_with(payload, &mut |diagnostic| diagnostic.trace())
}

pub fn decode_payload_with(
    payload: &DecodedPayload,
    sink: &mut dyn FnMut(DecodeDiagnostic),
) -> ResolverCapabilities {
    let text = payload.as_str();
    let mut capabilities = ResolverCapabilities {
        qname_minimization: text.contains(QNAME_MINIMIZATION_FLAG),
        ..Default::default()
    };
    let mut recognized = capabilities.qname_minimization;

    for token in tokenize(text) {
        let AttributeToken::KeyValue { key, value } = token else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match key {
            EXTENDED_ERRORS_KEY => {
                recognized = true;
                if capabilities.extended_errors.is_some() {
                    sink(DecodeDiagnostic::DuplicateAttribute {
                        key: EXTENDED_ERRORS_KEY,
                        ignored: value.to_string(),
                    });
                    continue;
                }
                capabilities.extended_errors = Some(interpret(value).unwrap_or_else(|error| {
                    sink(DecodeDiagnostic::InvalidExtendedErrors {
                        value: value.to_string(),
                        error,
                    });
                    ErrorInterpretation::Invalid {
                        value: value.to_string(),
                    }
                }));
            }
            INFO_URL_KEY => {
                recognized = true;
                if capabilities.info_url.is_some() {
                    sink(DecodeDiagnostic::DuplicateAttribute {
                        key: INFO_URL_KEY,
                        ignored: value.to_string(),
                    });
                    continue;
                }
                capabilities.info_url = Some(value.to_string());
            }
            _ => {}
        }
    }

    if !recognized {
        sink(DecodeDiagnostic::NoAttributes);
    }

    capabilities
}
