/*!
The Win32 transcoding service: `MultiByteToWideChar` and `WideCharToMultiByte` with `CP_UTF8`.
*/
use std::ptr;
use libc::{c_char, c_int};
use crate::ffi::{
    self, CP_UTF8, DWORD, MB_ERR_INVALID_CHARS, WC_ERR_INVALID_CHARS,
    ERROR_INVALID_PARAMETER, ERROR_NO_UNICODE_TRANSLATION,
};
use crate::guard::{narrow_len, CheckedUnits};
use super::{Invalid, PlatformError, Transcoder};

/**
Converts using the Windows API.

Error codes are Win32 error codes, as returned by `GetLastError`.
*/
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Win32;

impl Transcoder for Win32 {
    const INVALID_SEQUENCE: i32 = ERROR_NO_UNICODE_TRANSLATION as i32;
    const INVALID_PARAMETER: i32 = ERROR_INVALID_PARAMETER as i32;

    fn utf8_to_utf16(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u8>,
        dst: Option<&mut [u16]>,
    ) -> Result<c_int, PlatformError> {
        let flags = match invalid {
            Invalid::Reject => MB_ERR_INVALID_CHARS,
        };
        let (dst_ptr, dst_len) = dst_parts(dst)?;

        let r = unsafe {
            ffi::MultiByteToWideChar(
                CP_UTF8,
                flags,
                src.as_ptr() as *const c_char,
                src.len(),
                dst_ptr,
                dst_len,
            )
        };
        check(r)
    }

    fn utf16_to_utf8(
        &self,
        invalid: Invalid,
        src: CheckedUnits<'_, u16>,
        dst: Option<&mut [u8]>,
    ) -> Result<c_int, PlatformError> {
        let flags = match invalid {
            Invalid::Reject => WC_ERR_INVALID_CHARS,
        };
        let (dst_ptr, dst_len) = dst_parts(dst)?;

        // The default-char arguments must be null for CP_UTF8.
        let r = unsafe {
            ffi::WideCharToMultiByte(
                CP_UTF8,
                flags,
                src.as_ptr(),
                src.len(),
                dst_ptr as *mut c_char,
                dst_len,
                ptr::null(),
                ptr::null_mut(),
            )
        };
        check(r)
    }
}

/**
Splits an optional destination into the pointer/length pair the API wants.  No destination means "just measure".
*/
fn dst_parts<T>(dst: Option<&mut [T]>) -> Result<(*mut T, c_int), PlatformError> {
    match dst {
        None => Ok((ptr::null_mut(), 0)),
        Some(dst) => {
            let len = narrow_len(dst.len())
                .ok_or(PlatformError(ERROR_INVALID_PARAMETER as i32))?;
            Ok((dst.as_mut_ptr(), len))
        },
    }
}

fn check(r: c_int) -> Result<c_int, PlatformError> {
    if r == 0 {
        let err: DWORD = unsafe { ffi::GetLastError() };
        Err(PlatformError(err as i32))
    } else {
        Ok(r)
    }
}
