//! Meigi canonical name layer.
//!
//! Turns free-text counterparty names, as they appear in bank-statement
//! lines, OCR'd receipts and hand-typed customer records, into one canonical
//! form so that `ABC株式会社`, `(株)ABC`, `ｶ)ABC` and `ＡＢＣカブシキガイシャ`
//! all compare equal.
//!
//! ## What we do
//!
//! - Half-width katakana → full-width, with voiced/semi-voiced mark recombination
//! - Full-width Latin letters and digits → ASCII
//! - Whitespace collapsing (ASCII and ideographic spaces)
//! - Corporate-form notation removal (kanji, katakana, half-width, abbreviations)
//! - Decorative symbol removal, uppercasing, whitespace removal
//! - Versioned hashes of canonical forms for callers that store them
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. The lookup tables are immutable and built
//! once; every function is safe to call from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - `canonicalize(canonicalize(s)) == canonicalize(s)`
//! - Every input, however degenerate, produces an output; an empty canonical
//!   form means "insufficient information", never "matches anything"

mod config;
mod error;
mod hash;
mod name;
mod pipeline;
mod suffix;
mod symbols;
mod whitespace;
mod width;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_canonical_bytes, hash_name};
pub use crate::name::CanonicalName;
pub use crate::pipeline::{canonicalize, canonicalize_name, canonicalize_with, normalize_characters};
pub use crate::suffix::{detect_corporate_forms, strip_corporate_suffix, CorporateForm};
pub use crate::symbols::{is_symbol, strip_symbols};
pub use crate::whitespace::{collapse_whitespace, remove_whitespace};
pub use crate::width::{fullwidth_alnum_to_halfwidth, halfwidth_katakana_to_fullwidth};
