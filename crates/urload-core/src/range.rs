//! Range selection for read-only commands (`list`, `title`).
//!
//! Accepted shapes, checked in this order:
//!
//! | input | resolves to      |
//! |-------|------------------|
//! | none  | `[0, n-1]`       |
//! | `-`   | rejected         |
//! | `N`   | `[N, N]`         |
//! | `-N`  | `[0, N]`         |
//! | `N-`  | `[N, n-1]`       |
//! | `N-M` | `[N, M]`         |
//!
//! Every resolved pair is checked against the collection length; an index
//! past the end is an error, never clamped.

use std::ops::RangeInclusive;
use thiserror::Error;

/// A validated inclusive index range: `start <= end < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("'-' is not a valid range argument. Use N, -N, N- or N-M.")]
    BareDash,
    #[error("Invalid argument format. Use a single index or a range (e.g., N, -N, N-, N-M).")]
    InvalidFormat,
    #[error("Invalid range argument.")]
    OutOfBounds { start: i64, end: i64, len: usize },
}

/// Resolves an optional range token against a collection of `len` items.
///
/// `Ok(None)` is only returned for an absent token on an empty collection:
/// there is nothing to iterate, which is not an error.
pub fn resolve_range(arg: Option<&str>, len: usize) -> Result<Option<IndexRange>, RangeError> {
    let Some(arg) = arg else {
        return Ok(len.checked_sub(1).map(|end| IndexRange { start: 0, end }));
    };
    let (start, end) = parse_bounds(arg, len)?;
    check_bounds(start, end, len).map(Some)
}

/// Turns the token into raw (possibly out-of-range) bounds.
fn parse_bounds(arg: &str, len: usize) -> Result<(i64, i64), RangeError> {
    if arg == "-" {
        return Err(RangeError::BareDash);
    }
    if !arg.contains('-') {
        let i = parse_int(arg)?;
        return Ok((i, i));
    }
    if let Some(rest) = arg.strip_prefix('-') {
        return Ok((0, parse_int(rest)?));
    }
    if let Some(rest) = arg.strip_suffix('-') {
        return Ok((parse_int(rest)?, last_index(len)));
    }
    let (s, e) = arg.split_once('-').ok_or(RangeError::InvalidFormat)?;
    Ok((parse_int(s)?, parse_int(e)?))
}

fn parse_int(s: &str) -> Result<i64, RangeError> {
    s.parse::<i64>().map_err(|_| RangeError::InvalidFormat)
}

fn last_index(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX) - 1
}

fn check_bounds(start: i64, end: i64, len: usize) -> Result<IndexRange, RangeError> {
    let out_of_bounds = RangeError::OutOfBounds { start, end, len };
    if start < 0 || end < 0 || start > end {
        return Err(out_of_bounds);
    }
    let (Ok(s), Ok(e)) = (usize::try_from(start), usize::try_from(end)) else {
        return Err(out_of_bounds);
    };
    if e >= len {
        return Err(out_of_bounds);
    }
    Ok(IndexRange { start: s, end: e })
}
