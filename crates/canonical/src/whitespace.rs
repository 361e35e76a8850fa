//! Whitespace normalization utilities.
//!
//! Bank-statement fields pad names with ASCII spaces, OCR output inserts
//! ideographic spaces (U+3000) between words, and hand-typed customer records
//! use both. [`collapse_whitespace`] folds every run into one ASCII space and
//! trims the ends; [`remove_whitespace`] drops whitespace entirely and is the
//! last step of [`canonicalize`](crate::canonicalize).
//!
//! # Whitespace Definition
//!
//! Unicode `White_Space`, which includes:
//! - ASCII space, tab, newline, carriage return
//! - Ideographic (full-width) space U+3000
//! - Non-breaking space U+00A0 and the other Unicode spaces
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  ヤマダ\u{3000}\u{3000}タロウ  "), "ヤマダ タロウ");
//! ```

/// Collapses repeated whitespace into single ASCII spaces and trims edges.
///
/// # Examples
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("ABC   商事"), "ABC 商事");
/// assert_eq!(collapse_whitespace("ABC\u{3000}商事"), "ABC 商事");
/// assert_eq!(collapse_whitespace("hello\r\nworld"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t\u{3000} "), "");
/// assert_eq!(collapse_whitespace(""), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Removes every whitespace character.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
