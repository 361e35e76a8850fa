//! The audit record produced by [`canonicalize_name`](crate::canonicalize_name).
//!
//! Reconciliation results are reviewed by people, so besides the canonical
//! text the record keeps the raw input, the corporate-form families that were
//! recognized, and a version-aware key that callers can store next to the
//! customer or supplier row.
//!
//! ```rust
//! use canonical::{canonicalize_name, CanonicalizeConfig, CorporateForm};
//!
//! let name = canonicalize_name("ｶ)ﾌﾔｹﾚｳ", &CanonicalizeConfig::default()).unwrap();
//! assert_eq!(name.canonical, "フヤケレウ");
//! assert_eq!(name.corporate_forms, vec![CorporateForm::StockCompany]);
//! assert_eq!(name.canonical_version, 1);
//! assert!(!name.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::suffix::CorporateForm;

/// One canonicalized business name.
///
/// For a fixed config version and input, every field is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalName {
    /// The input exactly as given.
    pub raw: String,
    /// The canonical form used for comparison.
    pub canonical: String,
    /// Corporate-form families recognized (and removed when stripping is on).
    pub corporate_forms: Vec<CorporateForm>,
    /// Config version that produced `canonical`.
    pub canonical_version: u32,
    /// `SHA-256(version || 0x00 || canonical)` as lowercase hex.
    pub sha256_hex: String,
}

impl CanonicalName {
    /// Whether nothing usable survived canonicalization.
    ///
    /// An empty canonical form means "insufficient information" and must not
    /// be treated as a wildcard.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical length in characters, the unit used by similarity scoring.
    pub fn char_len(&self) -> usize {
        self.canonical.chars().count()
    }
}
