#![allow(non_snake_case, dead_code)]
use libc::{c_char, c_int, c_uint, c_ulong, wchar_t};

// Not in libc; these are kernel32 and winnls.h.

pub type BOOL = c_int;
pub type DWORD = c_ulong;
pub type UINT = c_uint;

pub const CP_UTF8: UINT = 65001;

pub const MB_ERR_INVALID_CHARS: DWORD = 0x0000_0008;
pub const WC_ERR_INVALID_CHARS: DWORD = 0x0000_0080;

pub const ERROR_INVALID_PARAMETER: DWORD = 87;
pub const ERROR_INSUFFICIENT_BUFFER: DWORD = 122;
pub const ERROR_NO_UNICODE_TRANSLATION: DWORD = 1113;

#[link(name="kernel32")]
extern "system" {
    pub fn MultiByteToWideChar(
        CodePage: UINT,
        dwFlags: DWORD,
        lpMultiByteStr: *const c_char,
        cbMultiByte: c_int,
        lpWideCharStr: *mut wchar_t,
        cchWideChar: c_int,
    ) -> c_int;

    pub fn WideCharToMultiByte(
        CodePage: UINT,
        dwFlags: DWORD,
        lpWideCharStr: *const wchar_t,
        cchWideChar: c_int,
        lpMultiByteStr: *mut c_char,
        cbMultiByte: c_int,
        lpDefaultChar: *const c_char,
        lpUsedDefaultChar: *mut BOOL,
    ) -> c_int;

    pub fn GetLastError() -> DWORD;
}
