//! Bracket-range expansion for `add`.
//!
//! `http://h/img[08-10].jpg` expands to `img08.jpg`, `img09.jpg`, `img10.jpg`.
//! Each value is zero-padded up to the digit count of the range's start
//! literal (never truncated). Several brackets expand to their Cartesian
//! product, leftmost bracket as the outer loop.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use thiserror::Error;

/// Most URLs a single template may expand to.
pub const MAX_EXPANSION: u64 = 100_000;

static BRACKET_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([0-9]+)-([0-9]+)\]").expect("bracket range pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("Range start ({start}) greater than end ({end})")]
    Reversed { start: u64, end: u64 },
    #[error("Range value too large: {0}")]
    TooLarge(String),
    #[error("Range expands to {count} URLs (limit {limit})")]
    TooMany { count: String, limit: u64 },
}

/// One `[start-end]` token located in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BracketRange {
    span: Range<usize>,
    start: u64,
    end: u64,
    width: usize,
}

impl BracketRange {
    /// Number of values, `None` when it does not fit in a `u64`.
    fn len(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }

    fn values(&self) -> Vec<String> {
        (self.start..=self.end)
            .map(|v| format!("{:0width$}", v, width = self.width))
            .collect()
    }
}

fn find_ranges(template: &str) -> Result<Vec<BracketRange>, ExpandError> {
    BRACKET_RANGE
        .captures_iter(template)
        .map(|caps| {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
            let start_lit = caps.get(1).map_or("", |m| m.as_str());
            let end_lit = caps.get(2).map_or("", |m| m.as_str());
            let start = start_lit
                .parse::<u64>()
                .map_err(|_| ExpandError::TooLarge(start_lit.to_string()))?;
            let end = end_lit
                .parse::<u64>()
                .map_err(|_| ExpandError::TooLarge(end_lit.to_string()))?;
            if end < start {
                return Err(ExpandError::Reversed { start, end });
            }
            Ok(BracketRange {
                span: whole,
                start,
                end,
                width: start_lit.len(),
            })
        })
        .collect()
}

/// Checked product of all range lengths, bounded by [`MAX_EXPANSION`].
fn expansion_size(ranges: &[BracketRange]) -> Result<usize, ExpandError> {
    let too_many = |count: String| ExpandError::TooMany {
        count,
        limit: MAX_EXPANSION,
    };
    let mut total: u64 = 1;
    for r in ranges {
        let len = r.len().ok_or_else(|| too_many(format!("more than {}", u64::MAX)))?;
        total = total
            .checked_mul(len)
            .ok_or_else(|| too_many(format!("more than {}", u64::MAX)))?;
    }
    if total > MAX_EXPANSION {
        return Err(too_many(total.to_string()));
    }
    usize::try_from(total).map_err(|_| too_many(total.to_string()))
}

/// Expands every bracket range in `template`.
///
/// A template without brackets yields itself. All ranges are validated
/// before anything is generated.
pub fn expand_brackets(template: &str) -> Result<Vec<String>, ExpandError> {
    let ranges = find_ranges(template)?;
    if ranges.is_empty() {
        return Ok(vec![template.to_string()]);
    }

    // Literal text before each token, sliced from the original template so
    // substitution never shifts later offsets.
    let mut literals = Vec::with_capacity(ranges.len());
    let mut prev_end = 0;
    for r in &ranges {
        literals.push(&template[prev_end..r.span.start]);
        prev_end = r.span.end;
    }
    let tail = &template[prev_end..];

    let total = expansion_size(&ranges)?;
    let values: Vec<Vec<String>> = ranges.iter().map(BracketRange::values).collect();
    let mut out = Vec::with_capacity(total);
    let mut cursor = vec![0usize; values.len()];

    loop {
        let mut url = String::with_capacity(template.len());
        for (i, vals) in values.iter().enumerate() {
            url.push_str(literals[i]);
            url.push_str(&vals[cursor[i]]);
        }
        url.push_str(tail);
        out.push(url);

        // Odometer step: rightmost token varies fastest.
        let mut pos = values.len();
        loop {
            if pos == 0 {
                return Ok(out);
            }
            pos -= 1;
            cursor[pos] += 1;
            if cursor[pos] < values[pos].len() {
                break;
            }
            cursor[pos] = 0;
        }
    }
}
