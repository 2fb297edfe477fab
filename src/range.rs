//! Shared precondition check for batch evaluation ranges.
//!
//! Statistics treat a rejected range as "no data" and return NaN instead of
//! raising an error, so both helpers here are silent on the happy path and
//! only log rejected out-of-bounds requests.

use crate::Value;

/// Checks that `values[begin..begin + length]` is a usable, non-empty
/// evaluation range.
///
/// An empty range is rejected like an invalid one; evaluating over no data
/// has no defined result.
#[must_use]
pub fn valid(values: &[Value], begin: usize, length: usize) -> bool {
    window(values, begin, length).is_some()
}

/// Returns the checked sub-slice `values[begin..begin + length]`, or `None`
/// for empty and out-of-bounds ranges.
#[must_use]
pub fn window(values: &[Value], begin: usize, length: usize) -> Option<&[Value]> {
    if length == 0 {
        return None;
    }

    let Some(end) = begin.checked_add(length) else {
        log::debug!("evaluation range overflows: begin={begin}, length={length}");
        return None;
    };

    if end > values.len() {
        log::debug!(
            "evaluation range [{begin}..{end}] is out of bounds for {} values",
            values.len()
        );
        return None;
    }

    values.get(begin..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn accepts_in_bounds_ranges() {
        assert!(valid(&[1.0, 2.0, 3.0], 0, 3));
        assert!(valid(&[1.0, 2.0, 3.0], 2, 1));
    }

    #[test_log::test]
    fn rejects_empty_ranges() {
        assert!(!valid(&[1.0, 2.0], 0, 0));
        assert!(!valid(&[], 0, 0));
    }

    #[test_log::test]
    fn rejects_out_of_bounds_ranges() {
        assert!(!valid(&[1.0, 2.0], 1, 2));
        assert!(!valid(&[1.0, 2.0], 2, 1));
        assert!(!valid(&[], 0, 1));
    }

    #[test_log::test]
    fn rejects_overflowing_ranges() {
        assert!(!valid(&[1.0], usize::MAX, 2));
    }

    #[test_log::test]
    fn window_returns_sub_slice() {
        assert_eq!(window(&[5.0, 3.0, 9.0], 1, 2), Some(&[3.0, 9.0][..]));
        assert_eq!(window(&[5.0, 3.0, 9.0], 1, 0), None);
    }
}
