// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TAI64 / TAI64N external labels.
//!
//! A TAI64 label is a big-endian `u64` counting TAI seconds from an epoch
//! far in the past: the Unix-epoch TAI second (1970-01-01T00:00:00 TAI) is
//! labelled `2^62`.  A TAI64N label appends a big-endian `u32` nanosecond
//! counter.  Both travel either as raw bytes or as `@`-prefixed hex text:
//!
//! | Encoding | Shape | Length |
//! |----------|-------|--------|
//! | binary TAI64 | `u64` seconds | 8 bytes |
//! | binary TAI64N | `u64` seconds + `u32` nanoseconds | 12 bytes |
//! | hex TAI64 | `@` + 16 hex digits | 17 chars |
//! | hex TAI64N | `@` + 24 hex digits | 25 chars |
//!
//! [`Tai64N`] holds a decoded label with the `2^62` bias removed, i.e. as
//! signed TAI seconds since 1970-01-01T00:00:00 TAI.  The hex forms are
//! decoded into the binary layout first, so both paths share one set of
//! checks.
//!
//! ## References
//! * <http://cr.yp.to/libtai/tai64.html>
//! * <http://cr.yp.to/daemontools/tai64n.html>

use super::error::ParseError;
use super::leap_seconds::epoch_time;
use super::utc::UtcTimestamp;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Label of 1970-01-01T00:00:00 TAI.
pub const TAI64_EPOCH_BIAS: u64 = 1 << 62;

/// Largest seconds label accepted by the decoders.
pub const TAI64_LABEL_MAX: u64 = 1 << 63;

/// Byte length of a binary TAI64 label.
pub const TAI64_LEN: usize = 8;

/// Byte length of a binary TAI64N label.
pub const TAI64N_LEN: usize = 12;

/// Character length of a hex TAI64 label, marker included.
pub const TAI64_HEX_LEN: usize = 1 + 2 * TAI64_LEN;

/// Character length of a hex TAI64N label, marker included.
pub const TAI64N_HEX_LEN: usize = 1 + 2 * TAI64N_LEN;

/// Leading character of every hex label.
pub const LABEL_MARKER: char = '@';

/// A decoded TAI64N label.
///
/// `secs` counts TAI seconds since 1970-01-01T00:00:00 TAI; `nanos` is the
/// nanosecond counter exactly as it was encoded (the wire allows values
/// of a billion or more, which carry into seconds on conversion to UTC).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tai64N {
    secs: i64,
    nanos: u32,
}

impl Tai64N {
    /// 1970-01-01T00:00:00 TAI (ten seconds before the Unix epoch in UTC).
    pub const UNIX_EPOCH: Self = Self::new(0, 0);

    /// Create from TAI seconds since 1970-01-01T00:00:00 TAI and a nanosecond counter.
    #[inline]
    pub const fn new(secs: i64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    /// TAI seconds since 1970-01-01T00:00:00 TAI.
    #[inline]
    pub const fn secs(&self) -> i64 {
        self.secs
    }

    /// The raw nanosecond counter.
    #[inline]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// The external seconds label (`secs + 2^62`, modulo `2^64`).
    #[inline]
    pub const fn label(&self) -> u64 {
        (self.secs as u64).wrapping_add(TAI64_EPOCH_BIAS)
    }

    // ── decoders ──────────────────────────────────────────────────────

    /// Parse `@` followed by 16 hex digits.
    pub fn parse_tai64(text: &str) -> Result<Self, ParseError> {
        let mut raw = [0u8; TAI64_LEN];
        hex_digits(text, &mut raw)
            .and_then(|()| read_tai64(&raw))
            .inspect_err(|err| log_rejection("hex TAI64", err))
    }

    /// Parse `@` followed by 24 hex digits (16 for seconds, 8 for nanoseconds).
    pub fn parse_tai64n(text: &str) -> Result<Self, ParseError> {
        let mut raw = [0u8; TAI64N_LEN];
        hex_digits(text, &mut raw)
            .and_then(|()| read_tai64n(&raw))
            .inspect_err(|err| log_rejection("hex TAI64N", err))
    }

    /// Decode an 8-byte big-endian TAI64 label.
    pub fn decode_tai64(bytes: &[u8]) -> Result<Self, ParseError> {
        read_tai64(bytes).inspect_err(|err| log_rejection("binary TAI64", err))
    }

    /// Decode a 12-byte big-endian TAI64N label.
    pub fn decode_tai64n(bytes: &[u8]) -> Result<Self, ParseError> {
        read_tai64n(bytes).inspect_err(|err| log_rejection("binary TAI64N", err))
    }

    // ── encoders ──────────────────────────────────────────────────────

    /// Binary TAI64 form (the nanosecond counter is dropped).
    #[inline]
    pub const fn to_tai64_bytes(&self) -> [u8; TAI64_LEN] {
        self.label().to_be_bytes()
    }

    /// Binary TAI64N form.
    pub fn to_tai64n_bytes(&self) -> [u8; TAI64N_LEN] {
        let mut out = [0u8; TAI64N_LEN];
        out[..TAI64_LEN].copy_from_slice(&self.label().to_be_bytes());
        out[TAI64_LEN..].copy_from_slice(&self.nanos.to_be_bytes());
        out
    }

    /// Hex TAI64 form, e.g. `@4000000037c219bf`.
    pub fn to_tai64_hex(&self) -> String {
        format!("{LABEL_MARKER}{:016x}", self.label())
    }

    // ── conversion ────────────────────────────────────────────────────

    /// The UTC instant this label denotes, leap seconds removed.
    #[inline]
    pub fn to_utc(&self) -> UtcTimestamp {
        epoch_time(self.secs, i64::from(self.nanos))
    }
}

/// Check the shape of a hex label and decode its digits into `out`.
fn hex_digits(text: &str, out: &mut [u8]) -> Result<(), ParseError> {
    let bytes = text.as_bytes();
    let expected = 1 + 2 * out.len();
    if bytes.len() != expected {
        return Err(ParseError::Length {
            expected,
            found: bytes.len(),
        });
    }
    if bytes[0] != LABEL_MARKER as u8 {
        return Err(ParseError::MissingMarker);
    }
    hex::decode_to_slice(&bytes[1..], out).map_err(|_| ParseError::InvalidDigit)
}

/// Copy `bytes` into a fixed-size array, rejecting any other length.
#[inline]
fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], ParseError> {
    bytes.try_into().map_err(|_| ParseError::Length {
        expected: N,
        found: bytes.len(),
    })
}

fn read_tai64(bytes: &[u8]) -> Result<Tai64N, ParseError> {
    let raw: [u8; TAI64_LEN] = fixed(bytes)?;
    let secs = unbias(u64::from_be_bytes(raw))?;
    Ok(Tai64N::new(secs, 0))
}

fn read_tai64n(bytes: &[u8]) -> Result<Tai64N, ParseError> {
    let raw: [u8; TAI64N_LEN] = fixed(bytes)?;
    let (secs, nanos) = raw.split_at(TAI64_LEN);
    let secs = unbias(u64::from_be_bytes(fixed(secs)?))?;
    Ok(Tai64N::new(secs, u32::from_be_bytes(fixed(nanos)?)))
}

/// Remove the `2^62` bias from a seconds label.
///
/// Labels above `2^63` are rejected; everything else lands in
/// `-2^62..=2^62` and cannot overflow `i64`.
#[inline]
fn unbias(label: u64) -> Result<i64, ParseError> {
    if label > TAI64_LABEL_MAX {
        return Err(ParseError::OutOfRange(label));
    }
    Ok(label.wrapping_sub(TAI64_EPOCH_BIAS) as i64)
}

fn log_rejection(encoding: &'static str, err: &ParseError) {
    trace!(encoding, %err, "rejected timestamp label");
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

/// Hex TAI64N form, e.g. `@4000000037c219bf2ef02e94`.
impl fmt::Display for Tai64N {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LABEL_MARKER}{:016x}{:08x}", self.label(), self.nanos)
    }
}

/// Accepts either hex form; 17-character input is read as TAI64, anything
/// else under the TAI64N rules.
impl FromStr for Tai64N {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == TAI64_HEX_LEN {
            Self::parse_tai64(s)
        } else {
            Self::parse_tai64n(s)
        }
    }
}

/// Accepts either binary form; 8-byte input is read as TAI64, anything else
/// under the TAI64N rules.
impl TryFrom<&[u8]> for Tai64N {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() == TAI64_LEN {
            Self::decode_tai64(bytes)
        } else {
            Self::decode_tai64n(bytes)
        }
    }
}

impl From<Tai64N> for UtcTimestamp {
    #[inline]
    fn from(label: Tai64N) -> Self {
        label.to_utc()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Tai64N {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Tai64N {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelVisitor;

        impl<'de> de::Visitor<'de> for LabelVisitor {
            type Value = Tai64N;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an @-prefixed hex TAI64 or TAI64N label")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(LabelVisitor)
    }
}
