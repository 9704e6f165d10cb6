// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Error returned when a TAI64 / TAI64N label cannot be parsed or decoded.
///
/// Every variant is the same kind of failure: the input does not have the
/// shape of the requested encoding. The variant only says which check
/// rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Input has the wrong number of bytes (text includes the `@` marker).
    #[error("parse error: expected {expected} bytes, found {found}")]
    Length { expected: usize, found: usize },
    /// Textual label does not start with `@`.
    #[error("parse error: missing '@' marker")]
    MissingMarker,
    /// Textual label contains a byte that is not an ASCII hex digit.
    #[error("parse error: invalid hexadecimal digit")]
    InvalidDigit,
    /// Seconds label lies above 2^63.
    #[error("parse error: label {0:#018x} exceeds 2^63")]
    OutOfRange(u64),
}
