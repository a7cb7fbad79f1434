//! Navigation selection logic
//!
//! Wrapping index arithmetic for dropdown choices and form focus.

/// Index after `current`, wrapping to the start
///
/// With nothing chosen yet the first entry is picked.
///
/// # Examples
/// ```
/// use nestnote::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Index before `current`, wrapping to the end
///
/// # Examples
/// ```
/// use nestnote::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 3), Some(2));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Next index (wrapping) for which `enabled` holds, skipping the rest
///
/// Returns `current` when no other index is enabled.
pub fn next_enabled(current: usize, len: usize, enabled: impl Fn(usize) -> bool) -> usize {
    if len == 0 {
        return current;
    }

    (1..=len)
        .map(|step| (current + step) % len)
        .find(|&idx| enabled(idx))
        .unwrap_or(current)
}

/// Previous index (wrapping) for which `enabled` holds
pub fn prev_enabled(current: usize, len: usize, enabled: impl Fn(usize) -> bool) -> usize {
    if len == 0 {
        return current;
    }

    (1..=len)
        .map(|step| (current % len + len - step) % len)
        .find(|&idx| enabled(idx))
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(Some(0), 0), None);
    }

    #[test]
    fn test_next_selection_wraps() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_next_selection_out_of_bounds_restarts() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_empty_list() {
        assert_eq!(prev_selection(None, 0), None);
    }

    #[test]
    fn test_prev_selection_out_of_bounds_goes_to_end() {
        // Options can shrink under a stale index
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_next_enabled_skips_disabled() {
        let enabled = |idx: usize| idx != 1 && idx != 2;
        assert_eq!(next_enabled(0, 5, enabled), 3);
        assert_eq!(next_enabled(4, 5, enabled), 0);
    }

    #[test]
    fn test_next_enabled_nothing_else_enabled() {
        assert_eq!(next_enabled(2, 4, |idx| idx == 2), 2);
        assert_eq!(next_enabled(2, 4, |_| false), 2);
    }

    #[test]
    fn test_prev_enabled_skips_disabled() {
        let enabled = |idx: usize| idx != 3;
        assert_eq!(prev_enabled(4, 5, enabled), 2);
        assert_eq!(prev_enabled(0, 5, enabled), 4);
    }

    #[test]
    fn test_prev_enabled_empty() {
        assert_eq!(prev_enabled(0, 0, |_| true), 0);
    }
}
