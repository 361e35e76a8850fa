use canonical::{canonicalize_name, CanonicalizeConfig};

fn main() {
    let cfg = CanonicalizeConfig::default();
    let inputs = [
        "ｶ)ﾌﾔｹﾚｳ",
        "(株)フヤケレウ",
        "ＡＢＣカブシキガイシャ",
        "ﾕｳｹﾞﾝｶﾞｲｼｬ ﾔﾏﾀﾞｼｮｳﾃﾝ",
        "株式会社",
    ];

    for input in inputs {
        match canonicalize_name(input, &cfg) {
            Ok(name) => println!(
                "{:<28} -> {:<16} forms={:?} key={}",
                name.raw,
                name.canonical,
                name.corporate_forms,
                &name.sha256_hex[..16]
            ),
            Err(err) => eprintln!("{input}: {err}"),
        }
    }
}
