//! Index/range grammar for the destructive `del` command.
//!
//! Deliberately narrower than [`crate::range`]: only `N` and `S-E` are
//! accepted (no open-ended shorthand), and whitespace anywhere in the
//! argument is ignored so `1 - 2` means `1-2`.

use thiserror::Error;

/// What to remove from the list, already validated against its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Index(usize),
    /// Inclusive on both ends.
    Range { start: usize, end: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("No index or range provided.")]
    Missing,
    #[error("Invalid range.")]
    InvalidRange,
    #[error("Invalid index.")]
    InvalidIndex,
    #[error("Index out of range.")]
    IndexOutOfRange,
}

impl DeleteTarget {
    /// Parses `arg` and validates it against a list of `len` items.
    pub fn parse(arg: Option<&str>, len: usize) -> Result<Self, DeleteError> {
        let arg = arg.ok_or(DeleteError::Missing)?;
        let compact: String = arg.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(DeleteError::Missing);
        }

        if let Some((s, e)) = compact.split_once('-') {
            if is_digits(s) && is_digits(e) {
                let start: usize = s.parse().map_err(|_| DeleteError::InvalidRange)?;
                let end: usize = e.parse().map_err(|_| DeleteError::InvalidRange)?;
                if start > end || end >= len {
                    return Err(DeleteError::InvalidRange);
                }
                return Ok(DeleteTarget::Range { start, end });
            }
        }

        let idx: i64 = compact.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                DeleteError::IndexOutOfRange
            }
            _ => DeleteError::InvalidIndex,
        })?;
        match usize::try_from(idx) {
            Ok(i) if i < len => Ok(DeleteTarget::Index(i)),
            _ => Err(DeleteError::IndexOutOfRange),
        }
    }

    /// Number of items this target removes.
    pub fn count(&self) -> usize {
        match *self {
            DeleteTarget::Index(_) => 1,
            DeleteTarget::Range { start, end } => end - start + 1,
        }
    }

    /// Returns a copy of `items` with the target removed.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let (start, end) = match *self {
            DeleteTarget::Index(i) => (i, i),
            DeleteTarget::Range { start, end } => (start, end),
        };
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i < start || *i > end)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
