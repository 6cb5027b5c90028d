//! End-to-end conversion tests across every style

use strman_api::*;

struct Expected {
    delimited: &'static str,
    screaming_delimited: &'static str,
    kebab: &'static str,
    screaming_kebab: &'static str,
    snake: &'static str,
    screaming_snake: &'static str,
    camel: &'static str,
    pascal: &'static str,
}

const LOREM: Expected = Expected {
    delimited: "lorem.ipsum.$.sat.12",
    screaming_delimited: "LOREM.IPSUM.$.SAT.12",
    kebab: "lorem-ipsum-$-sat-12",
    screaming_kebab: "LOREM-IPSUM-$-SAT-12",
    snake: "lorem_ipsum_$_sat_12",
    screaming_snake: "LOREM_IPSUM_$_SAT_12",
    camel: "loremIpsum$Sat12",
    pascal: "LoremIpsum$Sat12",
};

fn check_all(source: &str, want: &Expected) {
    assert_eq!(
        to_delimited(source, "."),
        want.delimited,
        "delimited from {source:?}"
    );
    assert_eq!(
        to_screaming_delimited(source, "."),
        want.screaming_delimited,
        "screaming delimited from {source:?}"
    );
    assert_eq!(to_kebab(source), want.kebab, "kebab from {source:?}");
    assert_eq!(
        to_screaming_kebab(source),
        want.screaming_kebab,
        "screaming kebab from {source:?}"
    );
    assert_eq!(to_snake(source), want.snake, "snake from {source:?}");
    assert_eq!(
        to_screaming_snake(source),
        want.screaming_snake,
        "screaming snake from {source:?}"
    );
    assert_eq!(to_camel(source), want.camel, "camel from {source:?}");
    assert_eq!(to_pascal(source), want.pascal, "pascal from {source:?}");
}

#[test]
fn test_from_every_convention() {
    for source in [
        "lorem.ipsum.$.sat.12",
        "lorem__ipsum__$__sat__12",
        "LOREM.IPSUM.$.SAT.12",
        "lorem-ipsum-$-sat-12",
        "LOREM-IPSUM-$-SAT-12",
        "lorem_ipsum_$_sat_12",
        "LOREM_IPSUM_$_SAT_12",
        "loremIpsum$Sat12",
        "LoremIpsum$Sat12",
    ] {
        check_all(source, &LOREM);
    }
}

#[test]
fn test_split_table() {
    let cases: &[(&str, &[&str])] = &[
        ("split-kebab-case", &["split", "kebab", "case"]),
        ("split_snake_case", &["split", "snake", "case"]),
        ("SPLIT_SNAKE_CASE", &["split", "snake", "case"]),
        ("split_mixed-case", &["split", "mixed", "case"]),
        ("splitCamelCase", &["split", "camel", "case"]),
        ("SplitPascalCase", &["split", "pascal", "case"]),
        ("split_12_snake", &["split", "12", "snake"]),
        ("split-12-kebab", &["split", "12", "kebab"]),
        ("split12Camel", &["split", "12", "camel"]),
        ("Split12Pascal", &["split", "12", "pascal"]),
        ("SPLIT_12_SCREAMING", &["split", "12", "screaming"]),
        ("SPLIT-12-SCREAMING", &["split", "12", "screaming"]),
        ("thisIsATest", &["this", "is", "a", "test"]),
        ("NewWord", &["new", "word"]),
        ("", &[]),
        ("  \t\n", &[]),
        ("$$$", &["$$$"]),
        ("123", &["123"]),
    ];

    for (source, want) in cases {
        assert_eq!(split(source), *want, "split({source:?})");
    }
}

#[test]
fn test_degenerate_inputs() {
    for source in ["", "___", "- . -", "\r\n"] {
        for case in Case::ALL {
            assert_eq!(convert(source, case), "", "{case} from {source:?}");
        }
    }

    assert_eq!(to_camel("$"), "$");
    assert_eq!(to_pascal("42"), "42");
    assert_eq!(to_screaming_kebab("$ $"), "$-$");
}

#[test]
fn test_camel_keeps_first_word_lowercase() {
    assert_eq!(to_camel("HTTP_SERVER"), "httpServer");
    assert_eq!(to_camel("Already"), "already");
    assert_eq!(to_pascal("already"), "Already");
}

#[test]
fn test_converter_matches_free_functions() {
    let inputs = ["someConfig.key", "SOME_ENV_VAR", "PascalThing2", "x"];
    for case in Case::ALL {
        let converter = Converter::with_delimiter(case, case.default_delimiter().unwrap_or("."));
        let batch = converter.convert_all(&inputs[..]);
        for (input, converted) in inputs.iter().zip(batch) {
            assert_eq!(converted, convert(input, case));
        }
    }
}
