use matcher::{MatchConfidence, NameMatcher};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("matcher=debug")
        .with_target(false)
        .init();

    let matcher = NameMatcher::default();
    let registered = [
        "(株)フヤケレウ",
        "ヤマダショウジ株式会社",
        "有限会社サトウショウテン",
        "一般社団法人 日本ABC協会",
    ];
    let statement_lines = ["ｶ)ﾌﾔｹﾚｳ", "ﾔﾏﾀﾞｼﾖｳｼﾞ(ｶ", "ﾕ)ｻﾄｳｼﾖｳﾃﾝ", "ｽｽﾞｷｺｳｷﾞｮｳ"];

    for line in statement_lines {
        let Some(hit) = matcher.best_hit(line, &registered) else {
            println!("{line:<20} -> (no candidate)");
            continue;
        };
        let verdict = match hit.confidence {
            MatchConfidence::High | MatchConfidence::Medium => "auto",
            MatchConfidence::Low => "review",
            MatchConfidence::None => "unmatched",
        };
        println!(
            "{line:<20} -> {:<24} score={:.3} confidence={:?} ({verdict})",
            hit.candidate, hit.score, hit.confidence
        );
    }
}
