// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Saturates `index` into `first..=last`.
///
/// Unlike [`Ord::clamp`] this does not panic on an inverted range, which a
/// looped axis too short to hold any real page produces.
#[inline]
pub(crate) const fn between(index: isize, first: isize, last: isize) -> isize {
    if index < first {
        first
    } else if index > last {
        last
    } else {
        index
    }
}

/// Converts a page count into the signed index space used for candidates.
#[inline]
pub(crate) fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::{between, signed_len};

    #[test]
    fn between_saturates() {
        assert_eq!(between(-3, 0, 4), 0);
        assert_eq!(between(2, 0, 4), 2);
        assert_eq!(between(9, 0, 4), 4);
    }

    #[test]
    fn between_tolerates_inverted_range() {
        // A looped axis of length 2 yields the range 1..=0.
        assert_eq!(between(0, 1, 0), 1);
        assert_eq!(between(5, 1, 0), 0);
    }

    #[test]
    fn conversions_saturate() {
        assert_eq!(signed_len(6), 6);
        assert_eq!(signed_len(usize::MAX), isize::MAX);
    }
}
