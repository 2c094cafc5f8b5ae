//! Misc stuff.

use std::ops::RangeInclusive;

use crate::error::Error;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: RangeInclusive<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: RangeInclusive<Self>) -> bool {
        range.contains(self)
    }
}


/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is a division with the remainder, except that a negative value gets
/// ‘wrapped around’ so the remainder is never negative.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}

pub(crate) fn checked_add(a: i64, b: i64, op: &'static str) -> Result<i64, Error> {
    a.checked_add(b).ok_or(Error::Overflow(op))
}

pub(crate) fn checked_sub(a: i64, b: i64, op: &'static str) -> Result<i64, Error> {
    a.checked_sub(b).ok_or(Error::Overflow(op))
}

pub(crate) fn checked_mul(a: i64, b: i64, op: &'static str) -> Result<i64, Error> {
    a.checked_mul(b).ok_or(Error::Overflow(op))
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_positive() {
        assert_eq!(split_cycles(17, 7), (2, 3));
    }

    #[test]
    fn split_negative() {
        assert_eq!(split_cycles(-1, 7), (-1, 6));
        assert_eq!(split_cycles(-7, 7), (-1, 0));
    }

    #[test]
    fn within() {
        assert!(5.is_within(1 ..= 5));
        assert!(!0.is_within(1 ..= 5));
    }
}
