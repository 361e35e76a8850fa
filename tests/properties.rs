use meigi::{NameMatcher, canonicalize, find_best_match, is_match, similarity};
use proptest::prelude::*;

/// Characters that exercise every canonicalization stage: half-width kana and
/// marks, full-width alphanumerics, corporate-suffix pieces, brackets,
/// separators and both kinds of space.
const ALPHABET: &[char] = &[
    'ｱ', 'ｶ', 'ｷ', 'ﾊ', 'ﾞ', 'ﾟ', 'ｰ', 'ｬ', 'ア', 'カ', 'ガ', 'ヤ', 'A', 'b', 'Ｃ', 'ｄ', '1',
    '２', '株', '式', '会', '社', '有', '限', '山', '田', '(', ')', '（', '）', '・', '-', '.',
    ' ', '\u{3000}',
];

fn arb_name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(name in arb_name()) {
        let once = canonicalize(&name);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn canonical_form_has_no_whitespace_or_halfwidth_kana(name in arb_name()) {
        let canonical = canonicalize(&name);
        prop_assert!(!canonical.chars().any(char::is_whitespace));
        let has_halfwidth_kana = canonical.chars().any(|c| ('\u{FF61}'..='\u{FF9F}').contains(&c));
        prop_assert!(!has_halfwidth_kana);
        prop_assert!(!canonical.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn similarity_is_symmetric(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in arb_name(), b in arb_name()) {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score={}", score);
    }

    #[test]
    fn identity_scores_one_unless_empty(name in arb_name()) {
        let expected = if canonicalize(&name).is_empty() { 0.0 } else { 1.0 };
        prop_assert_eq!(similarity(&name, &name), expected);
    }

    #[test]
    fn empty_side_dominates(name in arb_name(), threshold in 0.0f32..=1.0) {
        prop_assert_eq!(similarity("", &name), 0.0);
        prop_assert_eq!(similarity(&name, "株式会社"), 0.0);
        prop_assert!(!is_match("", &name, threshold));
    }

    #[test]
    fn best_match_is_the_first_maximum(
        query in arb_name(),
        candidates in prop::collection::vec(arb_name(), 0..12),
    ) {
        let (best, score) = find_best_match(&query, &candidates);

        if candidates.is_empty() || canonicalize(&query).is_empty() {
            prop_assert_eq!(best, None);
            prop_assert_eq!(score, 0.0);
        } else {
            let scores: Vec<f32> = candidates.iter().map(|c| similarity(&query, c)).collect();
            let max = scores.iter().copied().fold(0.0f32, f32::max);
            let first = scores.iter().position(|s| *s == max).unwrap();
            prop_assert_eq!(best, Some(candidates[first].as_str()));
            prop_assert_eq!(score, max);
        }
    }

    #[test]
    fn parallel_matcher_agrees_with_sequential(
        query in arb_name(),
        candidates in prop::collection::vec(arb_name(), 0..40),
    ) {
        let parallel = NameMatcher::new(
            Default::default(),
            meigi::MatchConfig {
                use_parallel: true,
                parallel_min_candidates: 1,
                ..Default::default()
            },
        )
        .unwrap();
        let sequential = NameMatcher::default();
        prop_assert_eq!(
            parallel.find_best_match(&query, &candidates),
            sequential.find_best_match(&query, &candidates)
        );
    }
}
