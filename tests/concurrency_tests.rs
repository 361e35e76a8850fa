//! Concurrency and thread safety tests for meigi

use std::sync::Arc;
use std::thread;

use meigi::{MatchConfig, NameMatcher, canonicalize, reconcile};

#[test]
fn concurrent_canonicalize_is_deterministic() {
    let inputs = ["ｶ)ﾌﾔｹﾚｳ", "（株）ＡＢＣ　商事", "ﾕｳｹﾞﾝｶﾞｲｼｬ ﾔﾏﾀﾞ", "株式会社"];
    let expected: Vec<String> = inputs.iter().map(|s| canonicalize(s)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for _ in 0..50 {
                    let got: Vec<String> = inputs.iter().map(|s| canonicalize(s)).collect();
                    assert_eq!(&got, expected.as_ref());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
}

#[test]
fn shared_matcher_across_threads() {
    let matcher = Arc::new(NameMatcher::default());
    let registry: Arc<Vec<String>> = Arc::new(
        (0..64)
            .map(|i| format!("ヤマダショウジ{i}株式会社"))
            .collect(),
    );

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let query = format!("ﾔﾏﾀﾞｼｮｳｼﾞ{i}(ｶ");
                let (best, score) = matcher.find_best_match(&query, &registry);
                (i, best.map(str::to_string), score)
            })
        })
        .collect();

    for handle in handles {
        let (i, best, score) = handle.join().expect("thread panicked");
        assert_eq!(best, Some(format!("ヤマダショウジ{i}株式会社")));
        assert_eq!(score, 1.0);
    }
}

#[test]
fn parallel_matcher_inside_threads() {
    let matcher = Arc::new(
        NameMatcher::new(
            Default::default(),
            MatchConfig {
                use_parallel: true,
                parallel_min_candidates: 16,
                ..MatchConfig::default()
            },
        )
        .expect("valid config"),
    );
    let registry: Arc<Vec<String>> =
        Arc::new((0..512).map(|i| format!("(株)ABC商事{i}")).collect());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let lines = ["ABCｼｮｳｼﾞ7", "ＡＢＣ商事７", "XYZ"];
                reconcile(&matcher, &lines, &registry)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    let hit = results[0].matches[1].hit.as_ref().expect("hit");
    assert_eq!(hit.index, 7);
    assert_eq!(hit.score, 1.0);
}
