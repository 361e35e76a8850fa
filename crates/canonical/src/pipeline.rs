use crate::config::CanonicalizeConfig;
use crate::error::CanonicalError;
use crate::hash::hash_canonical_bytes;
use crate::name::CanonicalName;
use crate::suffix::{strip_and_detect, CorporateForm};
use crate::symbols::strip_symbols;
use crate::whitespace::{collapse_whitespace, remove_whitespace};
use crate::width::{fullwidth_alnum_to_halfwidth, halfwidth_katakana_to_fullwidth};

/// Canonicalize a raw business name with the default configuration.
///
/// Runs width normalization, corporate-suffix stripping, symbol stripping,
/// uppercasing and whitespace removal, in that order. Total: degenerate input
/// yields an empty string.
///
/// ```rust
/// use canonical::canonicalize;
///
/// assert_eq!(canonicalize("ABC株式会社"), "ABC");
/// assert_eq!(canonicalize("(株)ABC"), "ABC");
/// assert_eq!(canonicalize("ABCカブシキガイシャ"), "ABC");
/// assert_eq!(canonicalize("ｱｲｳｴｵ"), "アイウエオ");
/// assert_eq!(canonicalize("株式会社"), "");
/// ```
pub fn canonicalize(input: &str) -> String {
    run(input, &CanonicalizeConfig::default()).0
}

/// Canonicalize with an explicit configuration.
///
/// The config version only affects hashing, so this never fails; validate
/// the config up front with [`CanonicalizeConfig::validate`].
pub fn canonicalize_with(input: &str, cfg: &CanonicalizeConfig) -> String {
    run(input, cfg).0
}

/// Canonicalize a raw business name and return the audit record.
///
/// Fails only when `cfg` is invalid. With the default configuration
/// `canonical` equals [`canonicalize`]`(input)`.
pub fn canonicalize_name(
    input: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalName, CanonicalError> {
    cfg.validate()?;

    let (canonical, corporate_forms) = run(input, cfg);
    let sha256_hex = hash_canonical_bytes(cfg.version, canonical.as_bytes());

    Ok(CanonicalName {
        raw: input.to_string(),
        canonical,
        corporate_forms,
        canonical_version: cfg.version,
        sha256_hex,
    })
}

/// The character-level layer on its own: half-width katakana to full-width,
/// full-width alphanumerics to ASCII, then whitespace collapsing.
///
/// ```rust
/// use canonical::normalize_characters;
///
/// assert_eq!(normalize_characters(" ｶ) ﾌﾔｹﾚｳ\u{3000}ＡＢＣ "), "カ) フヤケレウ ABC");
/// ```
pub fn normalize_characters(input: &str) -> String {
    let widened = halfwidth_katakana_to_fullwidth(input);
    let narrowed = fullwidth_alnum_to_halfwidth(&widened);
    collapse_whitespace(&narrowed)
}

fn run(input: &str, cfg: &CanonicalizeConfig) -> (String, Vec<CorporateForm>) {
    let mut text = normalize_characters(input);
    let mut forms = Vec::new();

    if !cfg.strip_corporate_suffix {
        forms = strip_and_detect(&text).1;
    }

    // A removal can join the halves of another token ("株 式会社"), so the
    // tail repeats until the text is stable. Uppercasing settles on the first
    // pass; every later pass that changes the text only removes characters.
    loop {
        let next = tail_pass(&text, cfg, &mut forms);
        if next == text {
            break;
        }
        text = next;
    }

    (text, forms)
}

fn tail_pass(text: &str, cfg: &CanonicalizeConfig, forms: &mut Vec<CorporateForm>) -> String {
    let mut out = if cfg.strip_corporate_suffix {
        let (stripped, found) = strip_and_detect(text);
        for form in found {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        stripped
    } else {
        text.to_string()
    };

    if cfg.strip_symbols {
        out = strip_symbols(&out);
    }
    if cfg.uppercase {
        out = out.to_uppercase();
    }
    remove_whitespace(&out)
}
