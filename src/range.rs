/*!
Borrowed views over the units being converted.
*/
use std::slice;

macro_rules! naive_unit_impl {
    ($ty_name:ty) => {
        impl Unit for $ty_name {
            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    };
}

/**
A code unit of some encoding: a byte for UTF-8, a 16-bit unit for UTF-16.
*/
pub trait Unit: Copy {
    fn is_zero(&self) -> bool;
}

naive_unit_impl! { u8 }
naive_unit_impl! { u16 }

/**
An immutable `[start, finish)` view into an existing buffer of units.

This is how callers convert part of a larger buffer without first copying it out.  A range never owns its units, and never outlives the buffer it was taken from.

The empty range is always valid, no matter where it was taken from.
*/
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ConversionRange<'a, T> {
    units: &'a [T],
}

impl<'a, T> Clone for ConversionRange<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ConversionRange<'a, T> {}

impl<'a, T> ConversionRange<'a, T> {
    /**
    Covers all of `units`.
    */
    pub fn new(units: &'a [T]) -> Self {
        ConversionRange { units }
    }

    pub fn empty() -> Self {
        ConversionRange { units: &[] }
    }

    /**
    Covers `units[start..finish]`.

    Returns `None` if `start > finish`, or if `finish` is past the end of `units`.
    */
    pub fn sub(units: &'a [T], start: usize, finish: usize) -> Option<Self> {
        units.get(start..finish).map(ConversionRange::new)
    }

    /**
    Constructs a range from a pair of raw pointers.

    Returns `None` if `finish` precedes `start`.  If `start == finish`, the result is the empty range and neither pointer is read; they may even be null or dangling.

    # Safety

    If `start != finish`, both pointers must point into (or one past the end of) the same live allocation, and every unit in `[start, finish)` must be initialised and remain unmodified for `'a`.
    */
    pub unsafe fn from_raw(start: *const T, finish: *const T) -> Option<Self> {
        if start == finish {
            return Some(Self::empty());
        }

        // SAFETY: same allocation, per the caller's contract.
        let len = unsafe { finish.offset_from(start) };
        if len < 0 {
            return None;
        }

        // SAFETY: `len` units starting at `start` are live and initialised.
        let units = unsafe { slice::from_raw_parts(start, len as usize) };
        Some(ConversionRange::new(units))
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<'a, T> ConversionRange<'a, T> where T: Unit {
    /**
    Constructs a range covering a zero-terminated string, *excluding* the terminator.

    A null pointer is treated as the empty string.

    # Safety

    If `ptr` is not null, it must point to a sequence of initialised units ending with a zero unit, all of which remain unmodified for `'a`.
    */
    pub unsafe fn from_zero_terminated(ptr: *const T) -> Self {
        if ptr.is_null() {
            return Self::empty();
        }

        let mut len = 0;
        // SAFETY: every unit up to and including the terminator is readable.
        unsafe {
            while !(*ptr.add(len)).is_zero() {
                len += 1;
            }
            ConversionRange::new(slice::from_raw_parts(ptr, len))
        }
    }
}

impl<'a, T> Default for ConversionRange<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> From<&'a [T]> for ConversionRange<'a, T> {
    fn from(units: &'a [T]) -> Self {
        ConversionRange::new(units)
    }
}
