/*!
A transcoding service built on the standard library's Unicode support.

Used wherever there is no native UTF-8/UTF-16 service, and on Windows when the `portable` feature is enabled.  Error codes are C `errno` values.
*/
use std::char;
use std::str;
use libc::{c_int, E2BIG, EILSEQ, EINVAL};
use crate::guard::{narrow_len, CheckedUnits};
use super::{Invalid, PlatformError, Transcoder};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Portable;

impl Transcoder for Portable {
    const INVALID_SEQUENCE: i32 = EILSEQ;
    const INVALID_PARAMETER: i32 = EINVAL;

    fn utf8_to_utf16(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u8>,
        dst: Option<&mut [u16]>,
    ) -> Result<c_int, PlatformError> {
        if src.is_empty() {
            return Err(PlatformError(EINVAL));
        }

        let text = decode_utf8(invalid, src.as_slice())?;
        let units = text.encode_utf16().map(Ok);
        match dst {
            None => measure(units),
            Some(dst) => fill(dst, units),
        }
    }

    fn utf16_to_utf8(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u16>,
        dst: Option<&mut [u8]>,
    ) -> Result<c_int, PlatformError> {
        if src.is_empty() {
            return Err(PlatformError(EINVAL));
        }

        let chars = char::decode_utf16(src.as_slice().iter().cloned())
            .map(move |r| match (r, invalid) {
                (Ok(c), _) => Ok(c),
                (Err(_), Invalid::Reject) => Err(PlatformError(EILSEQ)),
            });
        let units = EncodeUtf8::new(chars);
        match dst {
            None => measure(units),
            Some(dst) => fill(dst, units),
        }
    }
}

fn decode_utf8(invalid: Invalid, src: &[u8]) -> Result<&str, PlatformError> {
    match invalid {
        Invalid::Reject => str::from_utf8(src).map_err(|_| PlatformError(EILSEQ)),
    }
}

fn measure<T, It>(units: It) -> Result<c_int, PlatformError>
where It: Iterator<Item=Result<T, PlatformError>> {
    let mut len = 0usize;
    for unit in units {
        unit?;
        len += 1;
    }
    narrow_len(len).ok_or(PlatformError(E2BIG))
}

fn fill<T, It>(dst: &mut [T], units: It) -> Result<c_int, PlatformError>
where It: Iterator<Item=Result<T, PlatformError>> {
    let mut written = 0;
    for unit in units {
        let unit = unit?;
        let slot = dst.get_mut(written).ok_or(PlatformError(E2BIG))?;
        *slot = unit;
        written += 1;
    }
    narrow_len(written).ok_or(PlatformError(E2BIG))
}

/**
Flattens a stream of code points into UTF-8 bytes, passing errors through.
*/
struct EncodeUtf8<It> {
    iter: It,
    buf: [u8; 4],
    off: u8,
    len: u8,
}

impl<It> EncodeUtf8<It> {
    fn new(iter: It) -> Self {
        EncodeUtf8 {
            iter,
            buf: [0; 4],
            off: 0,
            len: 0,
        }
    }
}

impl<It> Iterator for EncodeUtf8<It> where It: Iterator<Item=Result<char, PlatformError>> {
    type Item = Result<u8, PlatformError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.off == self.len {
            // Buffer is empty; encode next code point.
            let cp = match self.iter.next()? {
                Ok(cp) => cp,
                Err(err) => return Some(Err(err)),
            };
            self.off = 0;
            self.len = cp.encode_utf8(&mut self.buf).len() as u8;
        }

        let cu = self.buf[self.off as usize];
        self.off += 1;
        Some(Ok(cu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units<T>(units: &[T]) -> CheckedUnits<'_, T> {
        CheckedUnits::new(units).expect(here!())
    }

    #[test]
    fn measure_then_convert() {
        let src = units(&b"\xE9\x87\x91"[..]);
        assert_eq!(Portable.utf8_to_utf16(Invalid::Reject, src, None), Ok(1));

        let mut dst = [0u16; 1];
        assert_eq!(Portable.utf8_to_utf16(Invalid::Reject, src, Some(&mut dst[..])), Ok(1));
        assert_eq!(dst, [0x91D1]);

        let kin = [0x91D1u16];
        let src = units(&kin);
        assert_eq!(Portable.utf16_to_utf8(Invalid::Reject, src, None), Ok(3));

        let mut dst = [0u8; 3];
        assert_eq!(Portable.utf16_to_utf8(Invalid::Reject, src, Some(&mut dst[..])), Ok(3));
        assert_eq!(dst, [0xE9, 0x87, 0x91]);
    }

    #[test]
    fn surrogate_pairs() {
        // U+1F600
        let src = units(&b"\xF0\x9F\x98\x80"[..]);
        let mut dst = [0u16; 2];
        assert_eq!(Portable.utf8_to_utf16(Invalid::Reject, src, Some(&mut dst[..])), Ok(2));
        assert_eq!(dst, [0xD83D, 0xDE00]);

        let src = units(&dst[..]);
        assert_eq!(Portable.utf16_to_utf8(Invalid::Reject, src, None), Ok(4));
    }

    #[test]
    fn rejects_invalid() {
        let src = units(&b"Invalid UTF-8 follows: \xC0\x76\x77"[..]);
        assert_eq!(
            Portable.utf8_to_utf16(Invalid::Reject, src, None),
            Err(PlatformError(EILSEQ)));

        let lone = [0xD800u16, 0x0100];
        let src = units(&lone);
        assert_eq!(
            Portable.utf16_to_utf8(Invalid::Reject, src, None),
            Err(PlatformError(EILSEQ)));

        let trailing = [0x0041u16, 0xDC00];
        let src = units(&trailing);
        let mut dst = [0u8; 8];
        assert_eq!(
            Portable.utf16_to_utf8(Invalid::Reject, src, Some(&mut dst[..])),
            Err(PlatformError(EILSEQ)));

        // Never substituted with U+FFFD, even when the bad unit stands alone.
        let src = units(&b"a\xC0b"[..]);
        let mut dst = [0u16; 3];
        assert_eq!(
            Portable.utf8_to_utf16(Invalid::Reject, src, Some(&mut dst[..])),
            Err(PlatformError(EILSEQ)));

        let lone = [0xD800u16];
        let src = units(&lone);
        assert_eq!(
            Portable.utf16_to_utf8(Invalid::Reject, src, None),
            Err(PlatformError(EILSEQ)));
    }

    #[test]
    fn short_destination() {
        let kin = [0x91D1u16];
        let src = units(&kin);
        let mut dst = [0u8; 2];
        assert_eq!(
            Portable.utf16_to_utf8(Invalid::Reject, src, Some(&mut dst[..])),
            Err(PlatformError(E2BIG)));
    }

    #[test]
    fn empty_source() {
        let empty: [u8; 0] = [];
        let src = units(&empty);
        assert_eq!(
            Portable.utf8_to_utf16(Invalid::Reject, src, None),
            Err(PlatformError(EINVAL)));
    }
}
