//! Decorative symbol stripping.
//!
//! Currency marks, list punctuation, dashes and brackets carry no identity
//! information in a counterparty name. The katakana prolonged sound mark `ー`
//! is a vowel, not a dash, and is kept.

/// Removes the fixed decorative symbol set from `input`.
///
/// ```rust
/// use canonical::strip_symbols;
///
/// assert_eq!(strip_symbols("「ABC」・商事-東京"), "ABC商事東京");
/// assert_eq!(strip_symbols("コーヒー"), "コーヒー");
/// ```
pub fn strip_symbols(input: &str) -> String {
    input.chars().filter(|c| !is_symbol(*c)).collect()
}

/// Whether `c` belongs to the decorative symbol set.
pub fn is_symbol(c: char) -> bool {
    matches!(
        c,
        // marks
        '*' | '＊' | '¥' | '￥' | '$' | '＄' | '#' | '＃' | '@' | '＠'
        // commas, periods, middle dots
        | ',' | '、' | '，' | '.' | '。' | '．' | '・' | '･'
        // dashes and hyphens
        | '-' | '‐' | '‑' | '‒' | '–' | '—' | '―' | '−' | '－'
        // brackets
        | '[' | ']' | '［' | '］'
        | '(' | ')' | '（' | '）'
        | '{' | '}' | '｛' | '｝'
        | '「' | '」' | '『' | '』' | '【' | '】'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_bracket_pair() {
        assert_eq!(strip_symbols("[A](B)（C）{D}「E」『F』"), "ABCDEF");
    }

    #[test]
    fn strips_money_marks_and_punctuation() {
        assert_eq!(strip_symbols("*¥1,000.$#@"), "1000");
        assert_eq!(strip_symbols("ヤマダ、タロウ。"), "ヤマダタロウ");
    }

    #[test]
    fn strips_dash_variants() {
        assert_eq!(strip_symbols("A-B‐C–D—E―F−G－H"), "ABCDEFGH");
    }

    #[test]
    fn keeps_prolonged_sound_mark_and_spaces() {
        assert_eq!(strip_symbols("スーパー ABC"), "スーパー ABC");
    }
}
