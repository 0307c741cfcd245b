//! Count argument shared by `head` and `tail`.

use super::CommandError;
use std::num::IntErrorKind;

/// Parses the first argument as a non-negative count. Counts too large to
/// represent saturate, which keeps the whole list.
pub(super) fn parse_count(args: &[String]) -> Result<usize, CommandError> {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::usage("No count provided."))?;
    let n: i64 = match raw.trim().parse() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(_) => return Err(CommandError::usage("Invalid count. Must be an integer.")),
    };
    if n < 0 {
        return Err(CommandError::usage("Count must be non-negative."));
    }
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str) -> Result<usize, String> {
        parse_count(&[s.to_string()]).map_err(|e| e.to_string())
    }

    #[test]
    fn accepts_non_negative_integers() {
        assert_eq!(count("0"), Ok(0));
        assert_eq!(count("+3"), Ok(3));
        assert_eq!(count("99999999999999999999999"), Ok(usize::MAX));
    }

    #[test]
    fn rejects_bad_counts() {
        assert_eq!(count("x"), Err("Invalid count. Must be an integer.".to_string()));
        assert_eq!(count("1.5"), Err("Invalid count. Must be an integer.".to_string()));
        assert_eq!(count("-1"), Err("Count must be non-negative.".to_string()));
        assert_eq!(
            parse_count(&[]).map_err(|e| e.to_string()),
            Err("No count provided.".to_string())
        );
    }
}
