//! Input sanitization for barcode data.
//!
//! Product SKUs look like `baseId_colorHex_size`, e.g. `A00001_ffffff_S`.
//! Labels only ever carry characters from `[A-Za-z0-9_]`, capped at
//! [`MAX_DATA_LEN`] characters so the barcode stays dense enough for a hang
//! tag. Everything else is dropped without escaping.
//!
//! The transform is lossy: two SKUs that share the same sanitized 20-character
//! prefix produce the same barcode.

use std::borrow::Cow;

/// Maximum number of characters encoded into a label barcode.
pub const MAX_DATA_LEN: usize = 20;

/// Whether a character survives sanitization.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Restrict `input` to `[A-Za-z0-9_]` and at most [`MAX_DATA_LEN`] characters.
///
/// Returns the input unchanged (borrowed) when it is already clean. Logs a
/// warning when characters were dropped or the input was truncated.
///
/// ```
/// use hangtag::barcode::sanitize::sanitize;
///
/// assert_eq!(sanitize("A00001#ffffff#S"), "A00001ffffffS");
/// assert_eq!(sanitize("A00001_ffffff_S"), "A00001_ffffff_S");
/// ```
pub fn sanitize(input: &str) -> Cow<'_, str> {
    let clean = input.chars().count() <= MAX_DATA_LEN && input.chars().all(is_allowed);
    if clean {
        return Cow::Borrowed(input);
    }

    let output: String = input
        .chars()
        .filter(|&c| is_allowed(c))
        .take(MAX_DATA_LEN)
        .collect();

    log::warn!(
        "barcode data sanitized: {:?} -> {:?} (allowed: [A-Za-z0-9_], max {} chars)",
        input,
        output,
        MAX_DATA_LEN
    );

    Cow::Owned(output)
}
