// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TAI64 / TAI64N decoding with leap-second-aware conversion to UTC.
//!
//! TAI64 labels count International Atomic Time seconds; this crate turns
//! them into UTC instants by removing the TAI − UTC offset (10 s plus every
//! leap second inserted before the instant).
//!
//! # Entry points
//!
//! | Function | Input |
//! |----------|-------|
//! | [`parse_tai64`] | `@` + 16 hex digits |
//! | [`parse_tai64n`] | `@` + 24 hex digits |
//! | [`decode_tai64`] | 8 big-endian bytes |
//! | [`decode_tai64n`] | 12 big-endian bytes |
//! | [`epoch_time`] | TAI seconds + nanoseconds since 1970-01-01T00:00:00 TAI |
//!
//! Each decoder either returns the full [`UtcTimestamp`] or a
//! [`ParseError`]; there are no partial results.
//!
//! # Core types
//!
//! - [`Tai64N`] — a decoded label (TAI seconds + nanosecond counter), with
//!   the inverse encoders.
//! - [`UtcTimestamp`] — a UTC instant on the POSIX axis; call
//!   [`UtcTimestamp::to_utc`] for a `chrono::DateTime<Utc>`.
//!
//! # Leap seconds
//!
//! The built-in table stops at the 2012-07-01 insertion
//! ([`LEAP_TABLE_HORIZON`]).  Use [`beyond_leap_horizon`] to detect instants
//! a newer leap second could affect.
//!
//! ```rust
//! let utc = tai64utc::parse_tai64n("@4000000037c219bf2ef02e94").unwrap();
//! assert_eq!(utc.to_string(), "1999-08-24T04:03:43.7874925Z");
//! ```

mod error;
mod label;
mod leap_seconds;
mod utc;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::ParseError;
pub use label::{
    Tai64N, LABEL_MARKER, TAI64N_HEX_LEN, TAI64N_LEN, TAI64_EPOCH_BIAS, TAI64_HEX_LEN,
    TAI64_LABEL_MAX, TAI64_LEN,
};
pub use leap_seconds::{
    beyond_leap_horizon, epoch_time, leap_seconds, tai_minus_utc, LEAP_TABLE_HORIZON,
};
pub use utc::UtcTimestamp;

// ── Free-function entry points ────────────────────────────────────────────

/// Parse a hex TAI64 label (`@` + 16 hex digits) into a UTC instant.
#[inline]
pub fn parse_tai64(text: &str) -> Result<UtcTimestamp, ParseError> {
    Tai64N::parse_tai64(text).map(UtcTimestamp::from)
}

/// Parse a hex TAI64N label (`@` + 24 hex digits) into a UTC instant.
#[inline]
pub fn parse_tai64n(text: &str) -> Result<UtcTimestamp, ParseError> {
    Tai64N::parse_tai64n(text).map(UtcTimestamp::from)
}

/// Decode a binary TAI64 label (8 bytes) into a UTC instant.
#[inline]
pub fn decode_tai64(bytes: &[u8]) -> Result<UtcTimestamp, ParseError> {
    Tai64N::decode_tai64(bytes).map(UtcTimestamp::from)
}

/// Decode a binary TAI64N label (12 bytes) into a UTC instant.
#[inline]
pub fn decode_tai64n(bytes: &[u8]) -> Result<UtcTimestamp, ParseError> {
    Tai64N::decode_tai64n(bytes).map(UtcTimestamp::from)
}
