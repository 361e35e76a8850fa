//! Corporate-form notation stripping.
//!
//! Japanese company names carry their legal form as a prefix or suffix, and
//! every source spells it differently: `ABC株式会社`, `(株)ABC`, `㈱ABC`,
//! `ABCカブシキガイシャ`, or the bank-transfer notation `ｶ)ABC` / `ABC(ｶ`.
//! The legal form says nothing about which counterparty a line refers to, so
//! every notation is removed before comparison.
//!
//! The table is ordered: compound forms (`一般社団法人`, `公益財団法人`) come
//! before the forms they contain (`社団法人`, `財団法人`). Each family is
//! applied independently, so a name carrying two notations loses both.
//!
//! Single-character abbreviations (`株`, `カ`, `有`, ...) are ordinary name
//! characters too, so they are only removed when a parenthesis marks them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Japanese corporate-form families recognized by the stripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorporateForm {
    /// 株式会社
    StockCompany,
    /// 有限会社
    LimitedCompany,
    /// 合名会社
    GeneralPartnership,
    /// 合資会社
    LimitedPartnership,
    /// 合同会社
    LimitedLiabilityCompany,
    /// 社団法人
    IncorporatedAssociation,
    /// 財団法人
    Foundation,
    /// 特定非営利活動法人 (NPO法人)
    SpecifiedNonprofit,
    /// 独立行政法人
    IndependentAdministrativeAgency,
    /// 一般社団法人
    GeneralIncorporatedAssociation,
    /// 一般財団法人
    GeneralIncorporatedFoundation,
    /// 公益社団法人
    PublicInterestIncorporatedAssociation,
    /// 公益財団法人
    PublicInterestIncorporatedFoundation,
}

impl CorporateForm {
    /// The kanji notation of this form.
    pub fn kanji(self) -> &'static str {
        match self {
            CorporateForm::StockCompany => "株式会社",
            CorporateForm::LimitedCompany => "有限会社",
            CorporateForm::GeneralPartnership => "合名会社",
            CorporateForm::LimitedPartnership => "合資会社",
            CorporateForm::LimitedLiabilityCompany => "合同会社",
            CorporateForm::IncorporatedAssociation => "社団法人",
            CorporateForm::Foundation => "財団法人",
            CorporateForm::SpecifiedNonprofit => "特定非営利活動法人",
            CorporateForm::IndependentAdministrativeAgency => "独立行政法人",
            CorporateForm::GeneralIncorporatedAssociation => "一般社団法人",
            CorporateForm::GeneralIncorporatedFoundation => "一般財団法人",
            CorporateForm::PublicInterestIncorporatedAssociation => "公益社団法人",
            CorporateForm::PublicInterestIncorporatedFoundation => "公益財団法人",
        }
    }
}

/// Surface notations of one corporate-form family.
struct SuffixRule {
    form: CorporateForm,
    /// Regex fragments for the spelled-out kanji and katakana readings.
    spelled: &'static [&'static str],
    /// Abbreviations that only count when a parenthesis marks them.
    abbreviated: &'static [&'static str],
    /// Enclosed ideographs such as `㈱`.
    enclosed: &'static [char],
}

impl SuffixRule {
    fn pattern(&self) -> String {
        let mut alternatives: Vec<String> = self.spelled.iter().map(|s| s.to_string()).collect();
        alternatives.extend(self.enclosed.iter().map(|c| regex::escape(&c.to_string())));

        if !self.abbreviated.is_empty() {
            let abbr = self
                .abbreviated
                .iter()
                .map(|a| regex::escape(a))
                .collect::<Vec<_>>()
                .join("|");
            // (株) / （株）, then the bank forms ｶ)NAME and NAME(ｶ.
            alternatives.push(format!("[(（](?:{abbr})[)）]"));
            alternatives.push(format!(r"(?:^|\s)(?:{abbr})[)）]"));
            alternatives.push(format!(r"[(（](?:{abbr})(?:\s|$)"));
        }

        alternatives.join("|")
    }
}

const SUFFIX_TABLE: &[SuffixRule] = &[
    SuffixRule {
        form: CorporateForm::GeneralIncorporatedAssociation,
        spelled: &["一般社団法人", "イ[ッツ]パンシ[ャヤ]ダンホウジン", "ｲ[ｯﾂ]ﾊﾟﾝｼ[ｬﾔ]ﾀﾞﾝﾎｳｼﾞﾝ"],
        abbreviated: &["一社"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::GeneralIncorporatedFoundation,
        spelled: &["一般財団法人", "イ[ッツ]パンザイダンホウジン", "ｲ[ｯﾂ]ﾊﾟﾝｻﾞｲﾀﾞﾝﾎｳｼﾞﾝ"],
        abbreviated: &["一財"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::PublicInterestIncorporatedAssociation,
        spelled: &["公益社団法人", "コウエキシ[ャヤ]ダンホウジン", "ｺｳｴｷｼ[ｬﾔ]ﾀﾞﾝﾎｳｼﾞﾝ"],
        abbreviated: &["公社"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::PublicInterestIncorporatedFoundation,
        spelled: &["公益財団法人", "コウエキザイダンホウジン", "ｺｳｴｷｻﾞｲﾀﾞﾝﾎｳｼﾞﾝ"],
        abbreviated: &["公財"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::SpecifiedNonprofit,
        spelled: &[
            "特定非営利活動法人",
            "[Nn][Pp][Oo]法人",
            "トクテイヒエイリカツドウホウジン",
            "ﾄｸﾃｲﾋｴｲﾘｶﾂﾄﾞｳﾎｳｼﾞﾝ",
        ],
        abbreviated: &["特非", "トクヒ", "ﾄｸﾋ"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::IndependentAdministrativeAgency,
        spelled: &["独立行政法人", "ドクリツギ[ョヨ]ウセイホウジン", "ﾄﾞｸﾘﾂｷﾞ[ｮﾖ]ｳｾｲﾎｳｼﾞﾝ"],
        abbreviated: &["独", "ドク", "ﾄﾞｸ"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::StockCompany,
        spelled: &["株式会社", "カブシキ[ガカ]イシ[ャヤ]", "ｶﾌﾞｼｷｶﾞ?ｲｼ[ｬﾔ]"],
        abbreviated: &["株", "カ", "ｶ"],
        enclosed: &['㈱', '㍿'],
    },
    SuffixRule {
        form: CorporateForm::LimitedCompany,
        spelled: &["有限会社", "ユウゲン[ガカ]イシ[ャヤ]", "ﾕｳｹﾞﾝｶﾞ?ｲｼ[ｬﾔ]"],
        abbreviated: &["有", "ユ", "ﾕ"],
        enclosed: &['㈲'],
    },
    SuffixRule {
        form: CorporateForm::GeneralPartnership,
        spelled: &["合名会社", "ゴウメイ[ガカ]イシ[ャヤ]", "ｺﾞｳﾒｲｶﾞ?ｲｼ[ｬﾔ]"],
        abbreviated: &["名", "メ", "ﾒ"],
        enclosed: &['㈴'],
    },
    SuffixRule {
        form: CorporateForm::LimitedPartnership,
        spelled: &["合資会社", "ゴウシ[ガカ]イシ[ャヤ]", "ｺﾞｳｼｶﾞ?ｲｼ[ｬﾔ]"],
        abbreviated: &["資", "シ", "ｼ"],
        enclosed: &['㈾'],
    },
    SuffixRule {
        form: CorporateForm::LimitedLiabilityCompany,
        spelled: &["合同会社", "ゴウドウ[ガカ]イシ[ャヤ]", "ｺﾞｳﾄﾞｳｶﾞ?ｲｼ[ｬﾔ]"],
        abbreviated: &["同", "ド", "ﾄﾞ"],
        enclosed: &[],
    },
    SuffixRule {
        form: CorporateForm::IncorporatedAssociation,
        spelled: &["社団法人", "シ[ャヤ]ダンホウジン", "ｼ[ｬﾔ]ﾀﾞﾝﾎｳｼﾞﾝ"],
        abbreviated: &["社", "シャ", "シヤ", "ｼｬ", "ｼﾔ"],
        enclosed: &['㈳'],
    },
    SuffixRule {
        form: CorporateForm::Foundation,
        spelled: &["財団法人", "ザイダンホウジン", "ｻﾞｲﾀﾞﾝﾎｳｼﾞﾝ"],
        abbreviated: &["財", "ザイ", "ｻﾞｲ"],
        enclosed: &['㈶'],
    },
];

static SUFFIX_PATTERNS: Lazy<Vec<(CorporateForm, Regex)>> = Lazy::new(|| {
    SUFFIX_TABLE
        .iter()
        .map(|rule| {
            let re = Regex::new(&rule.pattern()).expect("corporate suffix table compiles");
            (rule.form, re)
        })
        .collect()
});

/// Removes every recognized corporate-form notation from `input`.
///
/// ```rust
/// use canonical::strip_corporate_suffix;
///
/// assert_eq!(strip_corporate_suffix("ABC株式会社"), "ABC");
/// assert_eq!(strip_corporate_suffix("(株)ABC"), "ABC");
/// assert_eq!(strip_corporate_suffix("ABCカブシキガイシャ"), "ABC");
/// assert_eq!(strip_corporate_suffix("ｶ)ABC"), "ABC");
/// ```
pub fn strip_corporate_suffix(input: &str) -> String {
    strip_and_detect(input).0
}

/// Returns the corporate-form families whose notations occur in `input`, in
/// table order and without duplicates.
///
/// Width is normalized first, so half-width and full-width spellings report
/// the same family.
///
/// ```rust
/// use canonical::{detect_corporate_forms, CorporateForm};
///
/// assert_eq!(
///     detect_corporate_forms("ﾕｳｹﾞﾝｶﾞｲｼｬ ABC"),
///     vec![CorporateForm::LimitedCompany]
/// );
/// assert!(detect_corporate_forms("ABC").is_empty());
/// ```
pub fn detect_corporate_forms(input: &str) -> Vec<CorporateForm> {
    strip_and_detect(&crate::normalize_characters(input)).1
}

pub(crate) fn strip_and_detect(input: &str) -> (String, Vec<CorporateForm>) {
    let mut text = input.to_string();
    let mut forms = Vec::new();
    for (form, re) in SUFFIX_PATTERNS.iter() {
        if re.is_match(&text) {
            text = re.replace_all(&text, "").into_owned();
            forms.push(*form);
        }
    }
    (text, forms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_compiles() {
        assert_eq!(SUFFIX_PATTERNS.len(), SUFFIX_TABLE.len());
    }

    #[test]
    fn stock_company_notations() {
        for input in [
            "ABC株式会社",
            "株式会社ABC",
            "(株)ABC",
            "（株）ABC",
            "ABC(株)",
            "㈱ABC",
            "ABCカブシキガイシャ",
            "ABCカブシキカイシヤ",
            "ABCｶﾌﾞｼｷｶﾞｲｼｬ",
            "ｶ)ABC",
            "ABC(ｶ",
            "ABC(カ)",
        ] {
            assert_eq!(strip_corporate_suffix(input), "ABC", "input {input}");
        }
    }

    #[test]
    fn other_families() {
        assert_eq!(strip_corporate_suffix("山田商店有限会社"), "山田商店");
        assert_eq!(strip_corporate_suffix("(有)山田商店"), "山田商店");
        assert_eq!(strip_corporate_suffix("合同会社ミライ"), "ミライ");
        assert_eq!(strip_corporate_suffix("ゴウシガイシャミライ"), "ミライ");
        assert_eq!(strip_corporate_suffix("NPO法人ひまわり"), "ひまわり");
        assert_eq!(strip_corporate_suffix("独立行政法人ABC"), "ABC");
        assert_eq!(strip_corporate_suffix("ｻﾞｲ)ABC"), "ABC");
    }

    #[test]
    fn compound_forms_stripped_whole() {
        assert_eq!(strip_corporate_suffix("一般社団法人ABC協会"), "ABC協会");
        assert_eq!(strip_corporate_suffix("公益財団法人ABC"), "ABC");
        assert_eq!(
            detect_corporate_forms("一般社団法人ABC"),
            vec![CorporateForm::GeneralIncorporatedAssociation]
        );
    }

    #[test]
    fn multiple_families_all_removed() {
        assert_eq!(strip_corporate_suffix("(有)ABC株式会社"), "ABC");
        assert_eq!(
            detect_corporate_forms("(有)ABC株式会社"),
            vec![CorporateForm::StockCompany, CorporateForm::LimitedCompany]
        );
    }

    #[test]
    fn bare_abbreviation_is_a_name_character() {
        assert_eq!(strip_corporate_suffix("カトウ"), "カトウ");
        assert_eq!(strip_corporate_suffix("株主"), "株主");
        assert_eq!(strip_corporate_suffix("(カトウ)"), "(カトウ)");
    }

    #[test]
    fn suffix_only_becomes_empty() {
        assert_eq!(strip_corporate_suffix("株式会社"), "");
        assert_eq!(strip_corporate_suffix(""), "");
    }

    #[test]
    fn kanji_names() {
        assert_eq!(CorporateForm::StockCompany.kanji(), "株式会社");
        assert_eq!(
            CorporateForm::PublicInterestIncorporatedFoundation.kanji(),
            "公益財団法人"
        );
    }
}
