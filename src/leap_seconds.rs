// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # TAI → UTC leap-second correction
//!
//! TAI runs uniformly; UTC is held near Earth rotation by inserting leap
//! seconds.  Every insertion leaves TAI one more second ahead of UTC, on
//! top of the 10 s difference already in place when the leap-second system
//! began on 1972-01-01.  Converting a TAI second count to a Unix (POSIX)
//! timestamp therefore means subtracting
//!
//! ```text
//! TAI − UTC = 10 s + (number of leap seconds inserted before the instant)
//! ```
//!
//! ## Quick Example
//! ```rust
//! use tai64utc::{epoch_time, tai_minus_utc};
//!
//! // 10 TAI seconds after 1970-01-01T00:00:00 TAI is the Unix epoch.
//! let utc = epoch_time(10, 0);
//! assert_eq!(utc.unix_seconds(), 0);
//!
//! // After the 2012-07-01 insertion TAI is 35 s ahead.
//! assert_eq!(tai_minus_utc(1_400_000_000).value(), 35.0);
//! ```
//!
//! ## Valid Time Range
//! The table ends with the 2012-07-01 insertion ([`LEAP_TABLE_HORIZON`]).
//! Later leap seconds are not applied, so instants past the horizon may be
//! under-corrected.  [`beyond_leap_horizon`] reports when that can happen.
//!
//! ## References
//! * IETF `leap-seconds.list` (NTP timestamps of each insertion)
//! * IERS Bulletin C (leap second announcements)

use super::utc::UtcTimestamp;
use qtty::Seconds;
use tracing::trace;

/// TAI − UTC before the first leap second (1972-01-01).
const BASE_OFFSET: i64 = 10;

/// Tabulated instants: the 1972-01-01 start of the system plus 25 insertions.
const TERMS: usize = 26;

/// Leap-second instants in TAI seconds since the Unix epoch, newest first.
///
/// Each entry is the inserted second itself (23:59:60 UTC) on the TAI axis:
/// the NTP timestamp of the following midnight minus 2 208 988 800 (NTP
/// epoch → Unix epoch), plus the TAI − UTC offset in force before it.  TAI
/// instants strictly after an entry carry one more second of offset.  The
/// scan in [`tai_offset`] relies on the descending order.
#[rustfmt::skip]
const LEAP_SECONDS: [i64; TERMS] = [
    1_341_100_834, // 2012-07-01
    1_230_768_033, // 2009-01-01
    1_136_073_632, // 2006-01-01
      915_148_831, // 1999-01-01
      867_715_230, // 1997-07-01
      820_454_429, // 1996-01-01
      773_020_828, // 1994-07-01
      741_484_827, // 1993-07-01
      709_948_826, // 1992-07-01
      662_688_025, // 1991-01-01
      631_152_024, // 1990-01-01
      567_993_623, // 1988-01-01
      489_024_022, // 1985-07-01
      425_865_621, // 1983-07-01
      394_329_620, // 1982-07-01
      362_793_619, // 1981-07-01
      315_532_818, // 1980-01-01
      283_996_817, // 1979-01-01
      252_460_816, // 1978-01-01
      220_924_815, // 1977-01-01
      189_302_414, // 1976-01-01
      157_766_413, // 1975-01-01
      126_230_412, // 1974-01-01
       94_694_411, // 1973-01-01
       78_796_810, // 1972-07-01
       63_072_009, // 1972-01-01
];

/// Newest tabulated insertion, in TAI seconds since the Unix epoch.
pub const LEAP_TABLE_HORIZON: i64 = LEAP_SECONDS[0];

/// The tabulated insertions, newest first.
#[inline]
pub fn leap_seconds() -> &'static [i64] {
    &LEAP_SECONDS
}

/// TAI − UTC, in whole seconds, at `tai_secs` TAI seconds since the Unix epoch.
///
/// Walks the table newest-first, dropping one second per entry before the
/// comparison, and stops at the first insertion strictly earlier than
/// `tai_secs`.  An instant at or before every insertion keeps only
/// [`BASE_OFFSET`].
#[inline]
fn tai_offset(tai_secs: i64) -> i64 {
    let mut offset = TERMS as i64 + BASE_OFFSET;
    for &leap in LEAP_SECONDS.iter() {
        offset -= 1;
        if tai_secs > leap {
            break;
        }
    }
    offset
}

/// Look up TAI − UTC for an instant on the TAI axis.
///
/// # Arguments
///
/// * `tai_secs` - TAI seconds since 1970-01-01T00:00:00 TAI.
#[inline]
pub fn tai_minus_utc(tai_secs: i64) -> Seconds {
    Seconds::new(tai_offset(tai_secs) as f64)
}

/// `true` when `tai_secs` lies after the newest tabulated insertion.
///
/// Conversions past the horizon still apply the full table; they will miss
/// any leap second announced after it.
#[inline]
pub fn beyond_leap_horizon(tai_secs: i64) -> bool {
    tai_secs > LEAP_TABLE_HORIZON
}

/// The UTC instant at `secs` TAI seconds and `nsecs` nanoseconds since
/// 1970-01-01T00:00:00 TAI.
///
/// Total over every input: second arithmetic saturates at the `i64` bounds
/// and `nsecs` outside `0..1e9` carries into whole seconds.
pub fn epoch_time(secs: i64, nsecs: i64) -> UtcTimestamp {
    let offset = tai_offset(secs);
    if beyond_leap_horizon(secs) {
        trace!(
            tai_secs = secs,
            horizon = LEAP_TABLE_HORIZON,
            "TAI instant past the leap-second table horizon"
        );
    }
    UtcTimestamp::from_unix(secs.saturating_sub(offset), nsecs)
}
