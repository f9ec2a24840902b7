use thompson::{CompileError, Error, MatchError, Quantifier, Regex, RegexBuilder};

use crate::init_logging;

#[test]
fn compiled_once_matched_many_times() -> anyhow::Result<()> {
    init_logging();
    let re = Regex::new("ab|cd?")?;
    for _ in 0..3 {
        assert!(re.is_match("ab"));
        assert!(re.is_match("c"));
        assert!(re.is_match("cd"));
        assert!(!re.is_match("abcd"));
    }
    Ok(())
}

#[test]
fn unsupported_quantifiers_are_compile_errors() {
    let cases = [
        ("a*", Quantifier::zero_or_more()),
        ("a+", Quantifier::one_or_more()),
        ("xa{0,1}", Quantifier::range(0, Some(1))),
        ("(ab){2,}", Quantifier::range(2, None)),
    ];
    for (pattern, quantifier) in cases {
        let err = Regex::new(pattern).unwrap_err();
        assert_eq!(
            err,
            Error::Compile(CompileError::UnsupportedQuantifier(quantifier)),
            "{}",
            pattern
        );
    }
}

#[test]
fn unsupported_syntax_is_a_compile_error() {
    for pattern in ["a.", "[a-z]", r"\w", "a$", "(?s)a"] {
        match Regex::new(pattern) {
            Err(Error::Compile(CompileError::UnsupportedNodeKind(_))) => {}
            other => panic!("{}: unexpected {:?}", pattern, other),
        }
    }
}

#[test]
fn syntax_errors_are_reported() {
    let err = Regex::new("a(").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    // The parser's message points into the pattern.
    assert!(err.to_string().contains("a("));
}

#[test]
fn one_off_matching() -> anyhow::Result<()> {
    assert!(thompson::is_match("x?y", "y")?);
    assert!(!thompson::is_match("x?y", "xx")?);
    assert!(thompson::is_match("x*", "").is_err());
    Ok(())
}

#[test]
fn invalid_utf8_fails_fast() -> anyhow::Result<()> {
    let re = Regex::new("é?")?;
    assert!(re.is_match_bytes("é".as_bytes())?);
    assert!(re.is_match_bytes(b"")?);
    assert_eq!(
        re.is_match_bytes(b"\xC3"),
        Err(Error::Match(MatchError::InvalidInput { offset: 0 }))
    );
    Ok(())
}

#[test]
fn nest_limit_is_configurable() -> anyhow::Result<()> {
    let pattern = "((((a))))";
    assert!(Regex::new(pattern)?.is_match("a"));
    let err = RegexBuilder::new(pattern).nest_limit(2).build().unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    Ok(())
}

#[test]
fn long_literal_pattern() -> anyhow::Result<()> {
    let n = 100_000;
    let re = Regex::new(&"a".repeat(n))?;
    assert_eq!(re.nfa().len(), n + 1);
    assert!(re.is_match(&"a".repeat(n)));
    assert!(!re.is_match(&"a".repeat(n - 1)));
    assert!(!re.is_match(&"a".repeat(n + 1)));
    Ok(())
}

#[test]
fn long_alternation_pattern() -> anyhow::Result<()> {
    // 20000 CJK ideographs, one per branch.
    let words: Vec<String> =
        (0..20_000).filter_map(|i| char::from_u32(0x4E00 + i)).map(String::from).collect();
    let re = Regex::new(&words.join("|"))?;
    assert!(re.is_match(&words[0]));
    assert!(re.is_match(&words[12_345]));
    assert!(re.is_match(&words[words.len() - 1]));
    assert!(!re.is_match("a"));
    assert!(!re.is_match(&format!("{}{}", words[0], words[1])));
    Ok(())
}

#[test]
fn automaton_is_exposed() -> anyhow::Result<()> {
    let re = Regex::new("ab?")?;
    // a, b, the split for `?` and the start state.
    assert_eq!(re.nfa().len(), 4);
    assert!(re.nfa().to_string().contains("START"));
    Ok(())
}
