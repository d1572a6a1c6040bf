/*!
This crate converts text between UTF-8 and UTF-16, delegating the actual transcoding to a platform service and rejecting malformed input instead of papering over it.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

| Input | Output | Function |
| ---: | --- | --- |
| Whole UTF-8 buffer (`&[u8]`, `&str`, `Vec<u8>`, ...) | `Vec<u16>` | `utf16_from_utf8` |
| Part of a UTF-8 buffer | `Vec<u16>` | `utf16_from_utf8_range` |
| Whole UTF-16 buffer (`&[u16]`, `Vec<u16>`, ...) | `Vec<u8>` | `utf8_from_utf16` |
| … | `String` | `string_from_utf16` |
| Part of a UTF-16 buffer | `Vec<u8>` | `utf8_from_utf16_range` |

Ranges are built with `ConversionRange`: from a slice, a checked `[start, finish)` pair of indices, a pair of raw pointers, or a zero-terminated pointer.

Every conversion returns a `ConversionError` on failure.  Empty input always converts to empty output without touching the transcoding service.

```
let utf16 = utf8conv::utf16_from_utf8("\u{91D1}").unwrap();
assert_eq!(utf16, [0x91D1]);

let utf8 = utf8conv::utf8_from_utf16(&utf16).unwrap();
assert_eq!(utf8, b"\xE9\x87\x91");

assert!(utf8conv::utf16_from_utf8(b"\xC0\x76\x77").is_err());
```
*/

#[cfg(test)]
macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

#[doc(hidden)] pub mod doc;
pub mod error;
pub mod guard;
pub mod range;
pub mod sys;

mod convert;
#[cfg(windows)]
mod ffi;

pub use convert::{Converter, Utf8Buffer, Utf16Buffer};
pub use error::{ConversionError, ErrorKind, Result};
pub use range::ConversionRange;

/**
Converts a whole UTF-8 buffer to UTF-16 using the native transcoding service.
*/
pub fn utf16_from_utf8<S>(utf8: &S) -> Result<Utf16Buffer>
where S: AsRef<[u8]> + ?Sized {
    Converter::new().utf16_from_utf8(utf8)
}

/**
Converts a range of UTF-8 bytes to UTF-16 using the native transcoding service.
*/
pub fn utf16_from_utf8_range(range: ConversionRange<'_, u8>) -> Result<Utf16Buffer> {
    Converter::new().utf16_from_utf8_range(range)
}

/**
Converts a whole UTF-16 buffer to UTF-8 using the native transcoding service.
*/
pub fn utf8_from_utf16<S>(utf16: &S) -> Result<Utf8Buffer>
where S: AsRef<[u16]> + ?Sized {
    Converter::new().utf8_from_utf16(utf16)
}

/**
Converts a range of UTF-16 code units to UTF-8 using the native transcoding service.
*/
pub fn utf8_from_utf16_range(range: ConversionRange<'_, u16>) -> Result<Utf8Buffer> {
    Converter::new().utf8_from_utf16_range(range)
}

/**
Converts a whole UTF-16 buffer to a `String` using the native transcoding service.

Fails with `InvalidSequence` if the input contains an unpaired surrogate.
*/
pub fn string_from_utf16<S>(utf16: &S) -> Result<String>
where S: AsRef<[u16]> + ?Sized {
    Converter::new().string_from_utf16(utf16)
}
