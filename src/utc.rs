// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (UTC-anchored) instants.
//!
//! [`UtcTimestamp`] is the output of every label conversion in this crate.
//! It counts seconds on the POSIX axis (no leap seconds) from
//! 1970-01-01T00:00:00Z, plus a normalized nanosecond part.  Unlike
//! `chrono::DateTime<Utc>` it covers the whole `i64` second range, so the
//! conversion from a TAI label never fails; [`UtcTimestamp::to_utc`] gives
//! the calendar view whenever chrono can represent the instant.

use chrono::{DateTime, Utc};
use qtty::Seconds;
use std::fmt;
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A point on the UTC axis, as seconds + nanoseconds since the Unix epoch.
///
/// `nanos` is always in `0..1_000_000_000`; negative instants carry the
/// sign in `secs` only (`-0.5 s` is `secs = -1, nanos = 500_000_000`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "UnixParts"))]
pub struct UtcTimestamp {
    secs: i64,
    nanos: u32,
}

/// Wire shape accepted on deserialization; normalized through
/// [`UtcTimestamp::from_unix`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UnixParts {
    secs: i64,
    nanos: i64,
}

#[cfg(feature = "serde")]
impl From<UnixParts> for UtcTimestamp {
    #[inline]
    fn from(parts: UnixParts) -> Self {
        Self::from_unix(parts.secs, parts.nanos)
    }
}

impl UtcTimestamp {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self { secs: 0, nanos: 0 };

    /// Build an instant from Unix seconds and a nanosecond offset.
    ///
    /// `nsecs` may lie outside `0..1e9`; whole seconds are carried into
    /// `secs`, saturating at the `i64` bounds.
    #[inline]
    pub const fn from_unix(secs: i64, nsecs: i64) -> Self {
        let carry = nsecs.div_euclid(NANOS_PER_SEC);
        Self {
            secs: secs.saturating_add(carry),
            nanos: nsecs.rem_euclid(NANOS_PER_SEC) as u32,
        }
    }

    /// Whole seconds since the Unix epoch.
    #[inline]
    pub const fn unix_seconds(&self) -> i64 {
        self.secs
    }

    /// Nanoseconds past [`unix_seconds`](Self::unix_seconds).
    #[inline]
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.secs, self.nanos)
    }
}

impl From<DateTime<Utc>> for UtcTimestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        // chrono encodes a leap second as nanos >= 1e9; fold it forward.
        Self::from_unix(
            datetime.timestamp(),
            i64::from(datetime.timestamp_subsec_nanos()),
        )
    }
}

/// RFC 3339 in UTC with the fraction trimmed of trailing zeros
/// (`…43.7874925Z`, `…00:00Z` for whole seconds).
impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(datetime) => {
                write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S"))?;
                if self.nanos != 0 {
                    let frac = format!("{:09}", self.nanos);
                    write!(f, ".{}", frac.trim_end_matches('0'))?;
                }
                f.write_str("Z")
            }
            None => write!(
                f,
                "{}.{:09}s since 1970-01-01T00:00:00Z",
                self.secs, self.nanos
            ),
        }
    }
}

impl Sub for UtcTimestamp {
    type Output = Seconds;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let whole = self.secs.saturating_sub(rhs.secs) as f64;
        let frac = (i64::from(self.nanos) - i64::from(rhs.nanos)) as f64 / 1e9;
        Seconds::new(whole + frac)
    }
}
