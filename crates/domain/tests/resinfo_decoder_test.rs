use resinfo_probe_domain::resinfo::{decode_payload, RecordEncoding};
use resinfo_probe_domain::{
    decode, decode_with, DecodeDiagnostic, DecodedPayload, ErrorInterpretation, RawRecord,
    ResolverCapabilities,
};

mod helpers;
use helpers::{generic_record, CapabilitiesBuilder};

const FULL_PAYLOAD: &str = "qnamemin*exterr=15-17*infourl=https://example.com/info";

fn diagnostics_for(raw: &RawRecord) -> (ResolverCapabilities, Vec<DecodeDiagnostic>) {
    let mut seen = Vec::new();
    let capabilities = decode_with(raw, &mut |d| seen.push(d));
    (capabilities, seen)
}

#[test]
fn test_decode_generic_hex_record() {
    let hex: String = FULL_PAYLOAD.bytes().map(|b| format!("{:02x}", b)).collect();
    let raw = RawRecord::new(format!("\\# 010 {}", hex));

    let capabilities = decode(&raw);

    assert!(capabilities.qname_minimization);
    assert_eq!(
        capabilities.extended_errors.as_ref().unwrap().description(),
        "DNS query timeout; DNS resolution failure; DNS server misconfiguration"
    );
    assert_eq!(
        capabilities.info_url.as_deref(),
        Some("https://example.com/info")
    );
}

#[test]
fn test_decode_hex_split_across_tokens() {
    let raw = generic_record(FULL_PAYLOAD);
    assert_eq!(raw.encoding(), RecordEncoding::GenericHex);

    let expected = CapabilitiesBuilder::new()
        .qname_minimization(true)
        .extended_errors(15, 17)
        .info_url("https://example.com/info")
        .build();
    assert_eq!(decode(&raw), expected);
}

#[test]
fn test_decode_empty_input_yields_defaults() {
    let capabilities = decode(&RawRecord::from(""));
    assert_eq!(capabilities, ResolverCapabilities::default());
    assert!(!capabilities.qname_minimization);
    assert!(capabilities.extended_errors.is_none());
    assert!(capabilities.info_url.is_none());
}

#[test]
fn test_decode_odd_length_hex_yields_defaults() {
    let (capabilities, diagnostics) = diagnostics_for(&RawRecord::from("\\# 3 abc"));

    assert!(capabilities.is_empty());
    assert_eq!(
        diagnostics,
        vec![DecodeDiagnostic::OddHexLength { length: 3 }]
    );
}

#[test]
fn test_decode_invalid_hex_digit_yields_defaults() {
    let (capabilities, diagnostics) = diagnostics_for(&RawRecord::from("\\# 2 71zz"));

    assert!(capabilities.is_empty());
    assert!(matches!(
        diagnostics.as_slice(),
        [DecodeDiagnostic::InvalidHexDigit { position: 2, found: 'z' }]
    ));
}

#[test]
fn test_decode_invalid_utf8_is_lossy() {
    // "qnamemin" followed by a stray 0xff octet
    let raw = RawRecord::from("\\# 9 71 6e 61 6d 65 6d 69 6e ff");
    let (capabilities, diagnostics) = diagnostics_for(&raw);

    assert!(capabilities.qname_minimization);
    assert!(diagnostics.contains(&DecodeDiagnostic::InvalidUtf8 { valid_up_to: 8 }));
}

#[test]
fn test_decode_quoted_segments() {
    let raw = RawRecord::from(r#""qnamemin*exterr=" "16*infourl=https://r.example/""#);
    assert_eq!(raw.encoding(), RecordEncoding::Quoted);

    let capabilities = decode(&raw);

    assert!(capabilities.qname_minimization);
    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Single(16))
    );
    assert_eq!(capabilities.info_url.as_deref(), Some("https://r.example/"));
}

#[test]
fn test_decode_plain_text() {
    let raw = RawRecord::from("exterr=20*infourl=https://p.example/");
    assert_eq!(raw.encoding(), RecordEncoding::Plain);

    let capabilities = decode(&raw);

    assert!(!capabilities.qname_minimization);
    assert_eq!(
        capabilities.extended_errors.unwrap().description(),
        "DNSSEC validation failure"
    );
    assert_eq!(capabilities.info_url.as_deref(), Some("https://p.example/"));
}

#[test]
fn test_decode_space_separated_attributes() {
    let raw = RawRecord::from(r#""qnamemin exterr=18-19 infourl=https://s.example/""#);

    let expected = CapabilitiesBuilder::new()
        .qname_minimization(true)
        .extended_errors(18, 19)
        .info_url("https://s.example/")
        .build();
    assert_eq!(decode(&raw), expected);
}

#[test]
fn test_decode_dns_sd_style_length_octets() {
    // RFC 6763 style: every attribute is its own length-prefixed string
    let mut rdata = Vec::new();
    for attribute in ["qnamemin", "exterr=15", "infourl=https://l.example/"] {
        rdata.push(attribute.len() as u8);
        rdata.extend_from_slice(attribute.as_bytes());
    }
    let hex: Vec<String> = rdata.iter().map(|b| format!("{:02x}", b)).collect();
    let raw = RawRecord::new(format!("\\# {} {}", rdata.len(), hex.join("")));

    let capabilities = decode(&raw);

    assert!(capabilities.qname_minimization);
    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Single(15))
    );
    assert_eq!(capabilities.info_url.as_deref(), Some("https://l.example/"));
}

#[test]
fn test_decode_printable_length_octet_between_attributes() {
    // A 46-octet infourl string has the length octet '.', which lands right
    // after the exterr value once the rdata is decoded as text.
    let mut rdata = Vec::new();
    for attribute in [
        "qnamemin",
        "exterr=15-17",
        "infourl=https://resolver.example.com/info-page",
    ] {
        rdata.push(attribute.len() as u8);
        rdata.extend_from_slice(attribute.as_bytes());
    }
    let hex: Vec<String> = rdata.iter().map(|b| format!("{:02x}", b)).collect();
    let raw = RawRecord::new(format!("\\# {} {}", rdata.len(), hex.join("")));

    let (capabilities, diagnostics) = diagnostics_for(&raw);

    assert!(capabilities.qname_minimization);
    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Range { start: 15, end: 17 })
    );
    assert_eq!(
        capabilities.info_url.as_deref(),
        Some("https://resolver.example.com/info-page")
    );
    assert!(!diagnostics
        .iter()
        .any(|d| matches!(d, DecodeDiagnostic::InvalidExtendedErrors { .. })));
}

#[test]
fn test_exterr_ignores_trailing_text() {
    let capabilities = decode(&RawRecord::from("exterr=15-17;x*infourl=https://a/"));

    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Range { start: 15, end: 17 })
    );
    assert_eq!(capabilities.info_url.as_deref(), Some("https://a/"));
}

#[test]
fn test_infourl_stops_at_joined_exterr() {
    let capabilities = decode(&RawRecord::from("infourl=https://a.example/exterr=18"));

    assert_eq!(capabilities.info_url.as_deref(), Some("https://a.example/"));
    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Single(18))
    );
}

#[test]
fn test_qnamemin_is_substring_match() {
    assert!(decode(&RawRecord::from("x-qnamemin-y")).qname_minimization);
    assert!(decode(&RawRecord::from("foo*qnameminimal")).qname_minimization);
}

#[test]
fn test_qnamemin_is_case_sensitive() {
    assert!(!decode(&RawRecord::from("QNAMEMIN")).qname_minimization);
}

#[test]
fn test_first_exterr_wins() {
    let (capabilities, diagnostics) = diagnostics_for(&RawRecord::from("exterr=16*exterr=17"));

    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Single(16))
    );
    assert!(diagnostics.contains(&DecodeDiagnostic::DuplicateAttribute {
        key: "exterr",
        ignored: "17".to_string(),
    }));
}

#[test]
fn test_first_infourl_wins() {
    let capabilities = decode(&RawRecord::from("infourl=https://a/*infourl=https://b/"));
    assert_eq!(capabilities.info_url.as_deref(), Some("https://a/"));
}

#[test]
fn test_invalid_exterr_becomes_placeholder() {
    let (capabilities, diagnostics) = diagnostics_for(&RawRecord::from("qnamemin*exterr=abc"));

    assert!(capabilities.qname_minimization);
    let errors = capabilities.extended_errors.unwrap();
    assert!(!errors.is_valid());
    assert_eq!(errors.description(), "Invalid error range: abc");
    assert!(diagnostics
        .iter()
        .any(|d| matches!(d, DecodeDiagnostic::InvalidExtendedErrors { .. })));
}

#[test]
fn test_reversed_exterr_range_is_invalid() {
    let capabilities = decode(&RawRecord::from("exterr=17-15"));
    assert_eq!(
        capabilities.extended_errors,
        Some(ErrorInterpretation::Invalid {
            value: "17-15".to_string()
        })
    );
}

#[test]
fn test_empty_values_are_ignored() {
    let capabilities = decode(&RawRecord::from("exterr=*infourl="));
    assert!(capabilities.is_empty());
}

#[test]
fn test_unrecognized_text_yields_defaults() {
    let (capabilities, diagnostics) = diagnostics_for(&RawRecord::from("hello*world=1"));

    assert!(capabilities.is_empty());
    assert_eq!(diagnostics, vec![DecodeDiagnostic::NoAttributes]);
}

#[test]
fn test_decoding_payload_matches_decoding_hex_form() {
    let from_hex = decode(&generic_record(FULL_PAYLOAD));
    let from_payload = decode_payload(&DecodedPayload::new(FULL_PAYLOAD));
    let from_plain = decode(&RawRecord::from(FULL_PAYLOAD));

    assert_eq!(from_hex, from_payload);
    assert_eq!(from_hex, from_plain);
}

#[test]
fn test_result_does_not_depend_on_diagnostics_sink() {
    for raw in ["\\# 3 abc", "exterr=16*exterr=17", "", FULL_PAYLOAD] {
        let raw = RawRecord::from(raw);
        let (with_sink, _) = diagnostics_for(&raw);
        assert_eq!(with_sink, decode(&raw));
    }
}

#[test]
fn test_decode_from_many_threads() {
    let records: Vec<RawRecord> = (15..=20)
        .map(|code| generic_record(&format!("qnamemin*exterr={}", code)))
        .collect();

    let handles: Vec<_> = records
        .into_iter()
        .map(|raw| std::thread::spawn(move || raw.decode()))
        .collect();

    for (handle, code) in handles.into_iter().zip(15u16..) {
        let capabilities = handle.join().unwrap();
        assert_eq!(
            capabilities.extended_errors,
            Some(ErrorInterpretation::Single(code))
        );
    }
}

#[test]
fn test_capabilities_serialize_every_field() {
    let json = serde_json::to_value(ResolverCapabilities::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "qname_minimization": false,
            "extended_errors": null,
            "info_url": null,
        })
    );

    let json = serde_json::to_value(decode(&RawRecord::from(FULL_PAYLOAD))).unwrap();
    assert_eq!(
        json["extended_errors"],
        "DNS query timeout; DNS resolution failure; DNS server misconfiguration"
    );
}

#[test]
fn test_merge_keeps_first_values() {
    let first = CapabilitiesBuilder::new().extended_errors(15, 15).build();
    let second = CapabilitiesBuilder::new()
        .qname_minimization(true)
        .extended_errors(16, 17)
        .info_url("https://b/")
        .build();

    let merged = ResolverCapabilities::merged(vec![first, second]).unwrap();

    assert!(merged.qname_minimization);
    assert_eq!(merged.extended_errors, Some(ErrorInterpretation::Single(15)));
    assert_eq!(merged.info_url.as_deref(), Some("https://b/"));
    assert!(ResolverCapabilities::merged(Vec::new()).is_none());
}
