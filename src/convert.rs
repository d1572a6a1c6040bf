/*!
The conversion core: the safety envelope around a `Transcoder`.
*/
use libc::c_int;
use log::debug;
use crate::error::{ConversionError, ErrorKind, Result};
use crate::guard::CheckedUnits;
use crate::range::ConversionRange;
use crate::sys::{Invalid, Native, PlatformError, Transcoder};

/**
Text encoded as UTF-8.  No terminator.
*/
pub type Utf8Buffer = Vec<u8>;

/**
Text encoded as UTF-16, measured in code units.  No terminator.
*/
pub type Utf16Buffer = Vec<u16>;

/**
Converts between UTF-8 and UTF-16 using a particular transcoding service.

A `Converter` holds no state beyond its transcoder, and every conversion is independent.  With a stateless transcoder (such as `Native`), a single `Converter` can be shared freely between threads.

Invalid input is always rejected: the transcoder is never asked to substitute replacement characters.
*/
#[derive(Copy, Clone, Debug, Default)]
pub struct Converter<T = Native> {
    transcoder: T,
}

impl Converter<Native> {
    /**
    A converter using the platform's native transcoding service.
    */
    pub fn new() -> Self {
        Converter { transcoder: Native::default() }
    }
}

impl<T> Converter<T> where T: Transcoder {
    pub fn with_transcoder(transcoder: T) -> Self {
        Converter { transcoder }
    }

    pub fn transcoder(&self) -> &T {
        &self.transcoder
    }

    /**
    Converts a whole UTF-8 buffer to UTF-16.
    */
    pub fn utf16_from_utf8<S>(&self, utf8: &S) -> Result<Utf16Buffer>
    where S: AsRef<[u8]> + ?Sized {
        let utf8 = utf8.as_ref();
        if utf8.is_empty() {
            return Ok(Utf16Buffer::new());
        }
        self.utf16_from_utf8_range(ConversionRange::new(utf8))
    }

    /**
    Converts a range of UTF-8 bytes to UTF-16.

    # Errors

    - `InputTooLong` if the range holds more than `guard::MAX_UNITS` bytes.
    - `InvalidSequence` if the range is not valid UTF-8.
    - `PlatformFailure` for anything else the transcoder reports.
    */
    pub fn utf16_from_utf8_range(&self, range: ConversionRange<'_, u8>) -> Result<Utf16Buffer> {
        two_pass::<T, _, _, _>(range, Direction::Utf8ToUtf16, |src, dst| {
            self.transcoder.utf8_to_utf16(Invalid::Reject, src, dst)
        })
    }

    /**
    Converts a whole UTF-16 buffer to UTF-8.
    */
    pub fn utf8_from_utf16<S>(&self, utf16: &S) -> Result<Utf8Buffer>
    where S: AsRef<[u16]> + ?Sized {
        let utf16 = utf16.as_ref();
        if utf16.is_empty() {
            return Ok(Utf8Buffer::new());
        }
        self.utf8_from_utf16_range(ConversionRange::new(utf16))
    }

    /**
    Converts a range of UTF-16 code units to UTF-8.

    # Errors

    - `InputTooLong` if the range holds more than `guard::MAX_UNITS` units.
    - `InvalidSequence` if the range is not valid UTF-16, including unpaired surrogates.
    - `PlatformFailure` for anything else the transcoder reports.
    */
    pub fn utf8_from_utf16_range(&self, range: ConversionRange<'_, u16>) -> Result<Utf8Buffer> {
        two_pass::<T, _, _, _>(range, Direction::Utf16ToUtf8, |src, dst| {
            self.transcoder.utf16_to_utf8(Invalid::Reject, src, dst)
        })
    }

    /**
    Converts a whole UTF-16 buffer to a `String`.
    */
    pub fn string_from_utf16<S>(&self, utf16: &S) -> Result<String>
    where S: AsRef<[u16]> + ?Sized {
        let utf8 = self.utf8_from_utf16(utf16)?;
        String::from_utf8(utf8).map_err(|_| {
            debug!("transcoder produced invalid UTF-8 from UTF-16");
            ConversionError::new(
                ErrorKind::InvalidSequence,
                Direction::Utf16ToUtf8.message(),
                T::INVALID_SEQUENCE)
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Utf8ToUtf16,
    Utf16ToUtf8,
}

impl Direction {
    fn message(self) -> &'static str {
        match self {
            Direction::Utf8ToUtf16 => "error converting from UTF-8 to UTF-16",
            Direction::Utf16ToUtf8 => "error converting from UTF-16 to UTF-8",
        }
    }
}

/**
Measures, allocates, then converts.

`pass` is called once with no destination to learn the output length, then once more with a destination of exactly that length.  Any failure discards the output.
*/
fn two_pass<T, S, D, F>(range: ConversionRange<'_, S>, dir: Direction, mut pass: F) -> Result<Vec<D>>
where
    T: Transcoder,
    D: Copy + Default,
    F: FnMut(CheckedUnits<'_, S>, Option<&mut [D]>) -> ::std::result::Result<c_int, PlatformError>,
{
    if range.is_empty() {
        return Ok(Vec::new());
    }

    let src = match CheckedUnits::new(range.as_slice()) {
        Some(src) => src,
        None => {
            debug!("{:?}: input of {} units does not fit into a c_int", dir, range.len());
            return Err(ConversionError::input_too_long(T::INVALID_PARAMETER));
        },
    };

    let len = check_pass::<T>(dir, pass(src, None))?;

    let mut buf = vec![D::default(); len];
    let written = check_pass::<T>(dir, pass(src, Some(&mut buf[..])))?;

    buf.truncate(written);
    Ok(buf)
}

/**
Turns the result of one pass into a unit count, classifying failures.
*/
fn check_pass<T>(dir: Direction, r: ::std::result::Result<c_int, PlatformError>) -> Result<usize>
where T: Transcoder {
    let code = match r {
        Ok(n) if n > 0 => return Ok(n as usize),
        Ok(_) => 0,
        Err(PlatformError(code)) => code,
    };

    debug!("{}; platform error {}", dir.message(), code);
    let kind = if code == T::INVALID_SEQUENCE {
        ErrorKind::InvalidSequence
    } else {
        ErrorKind::PlatformFailure
    };
    Err(ConversionError::new(kind, dir.message(), code))
}
