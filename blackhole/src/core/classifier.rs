//! Digit classification: even, odd, and total digit counts of a number.

use serde::{Deserialize, Serialize};

/// Digit counts of one decimal number.
///
/// Digit `0` counts as even. Invariant: `even + odd == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitCounts {
    pub even: u32,
    pub odd: u32,
    pub total: u32,
}

/// Classify every decimal digit of `n`.
///
/// The value `0` has exactly one digit, so it classifies as
/// `even=1, odd=0, total=1`.
pub fn classify(n: u64) -> DigitCounts {
    let mut counts = DigitCounts {
        even: 0,
        odd: 0,
        total: 0,
    };
    let mut rest = n;
    loop {
        if rest % 10 % 2 == 0 {
            counts.even += 1;
        } else {
            counts.odd += 1;
        }
        counts.total += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    counts
}

impl DigitCounts {
    /// Concatenate `even`, `odd`, `total` as decimal literals, in that
    /// fixed order, with no separators and no padding.
    ///
    /// Matches integer parsing of the concatenated string: a leading
    /// `even = 0` contributes nothing, so `(0, 1, 1)` encodes to `11`,
    /// not `011`. Counts of ten or more concatenate their full decimal
    /// representation.
    pub fn encode(&self) -> u64 {
        let mut value = u64::from(self.even);
        for field in [self.odd, self.total] {
            value = value * decimal_shift(field) + u64::from(field);
        }
        value
    }
}

/// Power of ten that shifts left by the decimal width of `n`.
fn decimal_shift(n: u32) -> u64 {
    let mut shift = 10u64;
    let mut rest = u64::from(n) / 10;
    while rest > 0 {
        shift *= 10;
        rest /= 10;
    }
    shift
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(even: u32, odd: u32, total: u32) -> DigitCounts {
        DigitCounts { even, odd, total }
    }

    #[test]
    fn classify_balanced_digits() {
        assert_eq!(classify(1234), counts(2, 2, 4));
    }

    #[test]
    fn classify_all_even_digits() {
        assert_eq!(classify(224), counts(3, 0, 3));
    }

    #[test]
    fn classify_zero_digit_counts_as_even() {
        assert_eq!(classify(303), counts(1, 2, 3));
    }

    #[test]
    fn classify_zero_is_a_single_even_digit() {
        assert_eq!(classify(0), counts(1, 0, 1));
    }

    #[test]
    fn classify_invariant_even_plus_odd_is_total() {
        for n in 0..=2000 {
            let counts = classify(n);
            assert_eq!(counts.even + counts.odd, counts.total, "n={n}");
        }
    }

    #[test]
    fn encode_concatenates_in_even_odd_total_order() {
        assert_eq!(counts(2, 1, 3).encode(), 213);
    }

    #[test]
    fn encode_drops_leading_zero() {
        assert_eq!(counts(0, 1, 1).encode(), 11);
    }

    #[test]
    fn encode_interior_zero_is_kept() {
        assert_eq!(counts(3, 0, 3).encode(), 303);
    }

    #[test]
    fn encode_multi_digit_counts_concatenate_fully() {
        assert_eq!(counts(12, 3, 15).encode(), 12315);
        assert_eq!(counts(5, 5, 10).encode(), 5510);
    }

    #[test]
    fn classify_ten_digit_number() {
        assert_eq!(classify(9_876_543_210), counts(5, 5, 10));
    }
}
