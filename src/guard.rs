/*!
Length-safety checks between `usize` lengths and the `c_int` lengths the transcoding service takes.

Narrowing an oversized `usize` straight to a `c_int` can wrap into a negative length.  Everything handed to a `Transcoder` goes through `CheckedUnits`, which can only be built once the length is known to fit.
*/
use libc::c_int;

/**
The longest run of units that can be passed to a transcoding service.
*/
pub const MAX_UNITS: usize = c_int::MAX as usize;

/**
Narrows a length to `c_int`, or returns `None` if it does not fit.
*/
#[inline]
pub fn narrow_len(len: usize) -> Option<c_int> {
    if len > MAX_UNITS {
        None
    } else {
        Some(len as c_int)
    }
}

/**
A non-owning run of units whose length is known to fit in a `c_int`.
*/
#[derive(Debug, PartialEq, Eq)]
pub struct CheckedUnits<'a, T> {
    units: &'a [T],
    len: c_int,
}

impl<'a, T> Clone for CheckedUnits<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for CheckedUnits<'a, T> {}

impl<'a, T> CheckedUnits<'a, T> {
    /**
    Returns `None` if `units` is too long to describe with a `c_int`.
    */
    pub fn new(units: &'a [T]) -> Option<Self> {
        narrow_len(units.len()).map(|len| CheckedUnits { units, len })
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.units
    }

    pub fn as_ptr(&self) -> *const T {
        self.units.as_ptr()
    }

    /**
    The length in units, already narrowed.
    */
    pub fn len(&self) -> c_int {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_at_bounds() {
        assert_eq!(narrow_len(0), Some(0));
        assert_eq!(narrow_len(MAX_UNITS), Some(c_int::MAX));
        assert_eq!(narrow_len(MAX_UNITS + 1), None);
        assert_eq!(narrow_len(usize::MAX), None);
    }

    #[test]
    fn never_negative() {
        for &len in &[MAX_UNITS, MAX_UNITS + 1, MAX_UNITS * 2 + 1, usize::MAX] {
            if let Some(n) = narrow_len(len) {
                assert!(n >= 0);
            }
        }
    }

    #[test]
    fn checked_units() {
        let units = [0x41u16, 0x42];
        let checked = CheckedUnits::new(&units[..]).expect(here!());
        assert_eq!(checked.len(), 2);
        assert_eq!(checked.as_slice(), &units[..]);
        assert!(!checked.is_empty());
    }
}
