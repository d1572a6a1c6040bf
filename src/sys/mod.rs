/*!
Platform transcoding services.

A `Transcoder` does the actual code point mapping between UTF-8 and UTF-16.  The rest of this crate never looks inside the text; it only drives a transcoder through its two-pass protocol:

1. call with no destination to learn how many units the output needs;
2. call again with a destination of exactly that many units.

Both calls take their source as `CheckedUnits`, so a service never sees a length that does not fit in a `c_int`.
*/
use libc::c_int;
use crate::guard::CheckedUnits;

pub mod portable;

#[cfg(windows)]
pub mod windows;

#[cfg(all(windows, not(feature="portable")))]
pub use self::windows::Win32 as Native;

#[cfg(any(not(windows), feature="portable"))]
pub use self::portable::Portable as Native;

/**
What a transcoder must do when it meets an invalid sequence.

There is no lossy mode; invalid input always fails the call.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Invalid {
    /// Fail the whole call.
    Reject,
}

/**
The "last error" reported by a transcoding service after a failed call.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlatformError(pub i32);

/**
An external service that converts between UTF-8 and UTF-16.

Each method has two modes.  When `dst` is `None`, it returns the number of units the converted output needs.  When `dst` is `Some`, it converts into `dst` and returns the number of units written, failing if `dst` is too small.

A successful call always returns a positive count for non-empty input.  A failed call returns the service's error code.
*/
pub trait Transcoder {
    /**
    The code reported when the source contains an invalid sequence.
    */
    const INVALID_SEQUENCE: i32;

    /**
    The code reported for a bad argument.  Also used for inputs rejected before the service is called.
    */
    const INVALID_PARAMETER: i32;

    fn utf8_to_utf16(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u8>,
        dst: Option<&mut [u16]>,
    ) -> Result<c_int, PlatformError>;

    fn utf16_to_utf8(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u16>,
        dst: Option<&mut [u8]>,
    ) -> Result<c_int, PlatformError>;
}

impl<'a, T> Transcoder for &'a T where T: Transcoder {
    const INVALID_SEQUENCE: i32 = T::INVALID_SEQUENCE;
    const INVALID_PARAMETER: i32 = T::INVALID_PARAMETER;

    fn utf8_to_utf16(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u8>,
        dst: Option<&mut [u16]>,
    ) -> Result<c_int, PlatformError> {
        (**self).utf8_to_utf16(invalid, src, dst)
    }

    fn utf16_to_utf8(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u16>,
        dst: Option<&mut [u8]>,
    ) -> Result<c_int, PlatformError> {
        (**self).utf16_to_utf8(invalid, src, dst)
    }
}
