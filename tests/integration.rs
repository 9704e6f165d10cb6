use chrono::{DateTime, Utc};
use tai64utc::{
    decode_tai64, decode_tai64n, epoch_time, parse_tai64, parse_tai64n, ParseError, Tai64N,
    UtcTimestamp,
};

fn rfc3339(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text)
        .expect("valid RFC 3339")
        .with_timezone(&Utc)
}

// Seconds + nanoseconds labels, their wire bytes, and the UTC instant.
const TAI64N_CASES: [(&str, [u8; 12], &str); 8] = [
    // `man 8 tai64nlocal`
    (
        "@4000000037c219bf2ef02e94",
        [0x40, 0x00, 0x00, 0x00, 0x37, 0xc2, 0x19, 0xbf, 0x2e, 0xf0, 0x2e, 0x94],
        "1999-08-24T04:03:43.7874925Z",
    ),
    (
        "@4000000052c65e550cd675fc",
        [0x40, 0x00, 0x00, 0x00, 0x52, 0xc6, 0x5e, 0x55, 0x0c, 0xd6, 0x75, 0xfc],
        "2014-01-03T06:52:34.2153815Z",
    ),
    (
        "@4000000043b9410600000000",
        [0x40, 0x00, 0x00, 0x00, 0x43, 0xb9, 0x41, 0x06, 0x00, 0x00, 0x00, 0x00],
        "2006-01-02T15:04:05Z",
    ),
    // First second of 1970 TAI, ten seconds before the Unix epoch.
    (
        "@400000000000000000000000",
        [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        "1969-12-31T23:59:50Z",
    ),
    (
        "@400000000000000100000000",
        [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00],
        "1969-12-31T23:59:51Z",
    ),
    (
        "@400000000000000A00000000",
        [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x00],
        "1970-01-01T00:00:00Z",
    ),
    // Last second of 1969 TAI.
    (
        "@3FFFFFFFFFFFFFFF00000000",
        [0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00],
        "1969-12-31T23:59:49Z",
    ),
    // 1992-06-02T08:07:09 TAI
    (
        "@400000002a2b2c2d00000000",
        [0x40, 0x00, 0x00, 0x00, 0x2a, 0x2b, 0x2c, 0x2d, 0x00, 0x00, 0x00, 0x00],
        "1992-06-02T08:06:43Z",
    ),
];

const TAI64_CASES: [(&str, [u8; 8], &str); 8] = [
    (
        "@4000000037c219bf",
        [0x40, 0x00, 0x00, 0x00, 0x37, 0xc2, 0x19, 0xbf],
        "1999-08-24T04:03:43Z",
    ),
    (
        "@4000000052c65e55",
        [0x40, 0x00, 0x00, 0x00, 0x52, 0xc6, 0x5e, 0x55],
        "2014-01-03T06:52:34Z",
    ),
    (
        "@4000000043b94106",
        [0x40, 0x00, 0x00, 0x00, 0x43, 0xb9, 0x41, 0x06],
        "2006-01-02T15:04:05Z",
    ),
    (
        "@4000000000000000",
        [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        "1969-12-31T23:59:50Z",
    ),
    (
        "@4000000000000001",
        [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01],
        "1969-12-31T23:59:51Z",
    ),
    (
        "@400000000000000A",
        [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A],
        "1970-01-01T00:00:00Z",
    ),
    (
        "@3FFFFFFFFFFFFFFF",
        [0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        "1969-12-31T23:59:49Z",
    ),
    (
        "@400000002a2b2c2d",
        [0x40, 0x00, 0x00, 0x00, 0x2a, 0x2b, 0x2c, 0x2d],
        "1992-06-02T08:06:43Z",
    ),
];

#[test]
fn parse_tai64n_known_instants() {
    for (hex, _, expected) in TAI64N_CASES {
        let utc = parse_tai64n(hex).expect("valid label");
        assert_eq!(utc.to_utc(), Some(rfc3339(expected)), "{hex}");
    }
}

#[test]
fn decode_tai64n_known_instants() {
    for (hex, bytes, expected) in TAI64N_CASES {
        let utc = decode_tai64n(&bytes).expect("valid label");
        assert_eq!(utc.to_utc(), Some(rfc3339(expected)), "{hex}");
        assert_eq!(Ok(utc), parse_tai64n(hex));
    }
}

#[test]
fn parse_tai64_known_instants() {
    for (hex, _, expected) in TAI64_CASES {
        let utc = parse_tai64(hex).expect("valid label");
        assert_eq!(utc.to_utc(), Some(rfc3339(expected)), "{hex}");
    }
}

#[test]
fn decode_tai64_known_instants() {
    for (hex, bytes, expected) in TAI64_CASES {
        let utc = decode_tai64(&bytes).expect("valid label");
        assert_eq!(utc.to_utc(), Some(rfc3339(expected)), "{hex}");
    }
}

#[test]
fn sample_renders_as_rfc3339() {
    let utc = parse_tai64n("@4000000037c219bf2ef02e94").unwrap();
    assert_eq!(utc.to_string(), "1999-08-24T04:03:43.7874925Z");
}

#[test]
fn display_matches_known_instant_text() {
    for (hex, _, expected) in TAI64N_CASES {
        assert_eq!(parse_tai64n(hex).unwrap().to_string(), expected, "{hex}");
    }
    for (hex, _, expected) in TAI64_CASES {
        assert_eq!(parse_tai64(hex).unwrap().to_string(), expected, "{hex}");
    }
}

#[test]
fn label_bias_lands_on_unix_epoch() {
    assert_eq!(epoch_time(10, 0), UtcTimestamp::UNIX_EPOCH);
    assert_eq!(
        parse_tai64n("@400000000000000A00000000"),
        Ok(UtcTimestamp::UNIX_EPOCH)
    );
}

#[test]
fn every_entry_point_rejects_malformed_input() {
    let hex64n = [
        "4000000037c219bf2ef02e94",
        "4000000037c219bf2ef02e941",
        "@4000000037c219bf2ef02e9",
        "@4000000037c219bf2ef02e941",
        "@f000000037c219bf2ef02e94",
        "@G00000000000000000000000",
    ];
    for text in hex64n {
        assert!(parse_tai64n(text).is_err(), "{text:?}");
    }

    let hex64 = [
        "4000000037c219bf",
        "4000000037c219bf1",
        "@4000000037c219b",
        "@4000000037c219bf1",
        "@f000000037c219bf",
        "@G000000000000000",
    ];
    for text in hex64 {
        assert!(parse_tai64(text).is_err(), "{text:?}");
    }

    let bin64n: [&[u8]; 3] = [&[0x40; 13], &[0x40; 11], &[0xF0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]];
    for bytes in bin64n {
        assert!(decode_tai64n(bytes).is_err(), "{bytes:?}");
    }

    let bin64: [&[u8]; 3] = [&[0x40; 9], &[0x40; 7], &[0xF0, 0, 0, 0, 0, 0, 0, 0]];
    for bytes in bin64 {
        assert!(decode_tai64(bytes).is_err(), "{bytes:?}");
    }
}

#[test]
fn out_of_range_label_is_reported() {
    let raw = [0xF0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(
        decode_tai64n(&raw),
        Err(ParseError::OutOfRange(0xF000_0000_0000_0000))
    );
}

#[test]
fn utc_gap_matches_tai_gap_without_a_leap() {
    let a = parse_tai64("@4000000043b94106").unwrap();
    let b = parse_tai64("@4000000043b94206").unwrap();
    assert_eq!(b.unix_seconds() - a.unix_seconds(), 0x100);
}

#[test]
fn utc_gap_loses_a_second_across_a_leap() {
    // 2008-12-31 → 2009-01-02 in TAI, across the 2009-01-01 insertion.
    let before = Tai64N::new(1_230_768_000, 0);
    let after = Tai64N::new(1_230_768_000 + 86_400, 0);
    let gap = after.to_utc().unix_seconds() - before.to_utc().unix_seconds();
    assert_eq!(gap, 86_400 - 1);
}

#[test]
fn label_encoders_roundtrip_through_utc() {
    let label: Tai64N = "@4000000052c65e550cd675fc".parse().unwrap();
    assert_eq!(label.to_string(), "@4000000052c65e550cd675fc");
    assert_eq!(
        decode_tai64n(&label.to_tai64n_bytes()),
        Ok(label.to_utc())
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_label_uses_hex_text() {
    let label: Tai64N = "@4000000037c219bf2ef02e94".parse().unwrap();
    let json = serde_json::to_string(&label).unwrap();
    assert_eq!(json, "\"@4000000037c219bf2ef02e94\"");
    let back: Tai64N = serde_json::from_str(&json).unwrap();
    assert_eq!(back, label);
    assert!(serde_json::from_str::<Tai64N>("\"@4000\"").is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_utc_timestamp_uses_field_names() {
    let utc = parse_tai64n("@4000000037c219bf2ef02e94").unwrap();
    let json = serde_json::to_string(&utc).unwrap();
    assert!(json.contains("\"secs\""));
    assert!(json.contains("\"nanos\""));
    let back: UtcTimestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, utc);
}

#[cfg(feature = "serde")]
#[test]
fn serde_utc_timestamp_normalizes_nanoseconds() {
    let carried: UtcTimestamp = serde_json::from_str(r#"{"secs":0,"nanos":4000000000}"#).unwrap();
    assert_eq!(carried, UtcTimestamp::from_unix(4, 0));
    assert!(carried.subsec_nanos() < 1_000_000_000);
    assert!(carried > UtcTimestamp::from_unix(1, 0));
    assert!(carried.to_utc().is_some());
    assert_eq!(carried.to_string(), "1970-01-01T00:00:04Z");

    let borrowed: UtcTimestamp = serde_json::from_str(r#"{"secs":0,"nanos":-1}"#).unwrap();
    assert_eq!(borrowed.unix_seconds(), -1);
    assert_eq!(borrowed.subsec_nanos(), 999_999_999);
}
