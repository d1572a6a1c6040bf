/*!
Additional documentation.

# Backends

These tables summarise the provided transcoding services.  See the `sys` module.

| Name       | Platform | Service | Error codes |
| ---------- | -------- | ------- | ----------- |
| `Win32`    | Windows, unless the `portable` feature is enabled | `MultiByteToWideChar` / `WideCharToMultiByte` with `CP_UTF8` | Win32 error codes, from `GetLastError`. |
| `Portable` | Everywhere else | The standard library's UTF-8 validation and UTF-16 decoding. | C `errno` values. |

`sys::Native` names whichever of these is the default for the target.

## Error codes

| Condition | Kind | `Win32` | `Portable` |
| --------- | ---- | ------- | ---------- |
| Input longer than `i32::MAX` units | `InputTooLong` | `ERROR_INVALID_PARAMETER` (87) | `EINVAL` |
| Malformed input | `InvalidSequence` | `ERROR_NO_UNICODE_TRANSLATION` (1113) | `EILSEQ` |
| Destination too small | `PlatformFailure` | `ERROR_INSUFFICIENT_BUFFER` (122) | `E2BIG` |
| Output longer than `i32::MAX` units | `PlatformFailure` | `ERROR_INSUFFICIENT_BUFFER` (122) | `E2BIG` |

The last two cannot normally escape a `Converter`, which always sizes the destination from the measuring pass.

# Ranges

| Constructor | Covers | Notes |
| ----------- | ------ | ----- |
| `ConversionRange::new(units)` | All of `units` | |
| `ConversionRange::sub(units, start, finish)` | `units[start..finish]` | `None` if out of order or out of bounds. |
| `ConversionRange::from_raw(start, finish)` | `[start, finish)` | `unsafe`.  `None` if `finish < start`.  Never reads the pointers when they are equal. |
| `ConversionRange::from_zero_terminated(ptr)` | Up to, not including, the first zero unit | `unsafe`.  Null is the empty range. |

# Common Misconceptions and Mistakes

* *"A UTF-8 length always fits in an `int`."*  Not on 64-bit targets.  Platform transcoding services take `int` lengths, and a 5 GiB buffer narrowed to `int` silently becomes something else entirely.  This crate refuses such inputs up front.

* *"Invalid UTF-8 just turns into U+FFFD."*  Not here.  Silently substituting replacement characters destroys the evidence that the input was corrupt, so neither backend offers a lossy mode.

* *"A UTF-16 string is valid as long as it has an even number of bytes."*  An unpaired surrogate, like `0xD800` followed by `0x0100`, is not valid UTF-16 and is rejected.

* *"One UTF-16 unit is one character."*  Anything outside the Basic Multilingual Plane takes a surrogate pair.  All lengths in this crate are in code units, not code points.

* *"Converting a piece of a buffer means copying it out first."*  Use a `ConversionRange`.
*/
