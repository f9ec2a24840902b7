use quickcheck::{quickcheck, Arbitrary, Gen};
use thompson::Regex;

/// Each entry is a pattern followed by inputs it must match and inputs it
/// must not match.
const CASES: &[(&str, &[&str], &[&str])] = &[
    ("a", &["a"], &["", "b", "aa"]),
    ("ab", &["ab"], &["", "a", "ba", "abb"]),
    ("a|b", &["a", "b"], &["", "c", "ab"]),
    ("a?", &["", "a"], &["aa", "b"]),
    ("ab?", &["a", "ab"], &["", "b", "abb"]),
    ("a?b", &["b", "ab"], &["", "a", "aab"]),
    ("a?b?c?", &["", "a", "b", "c", "ab", "ac", "bc", "abc"], &["ba", "cb", "aa", "abcc"]),
    ("(ab)?", &["", "ab"], &["a", "b", "abab"]),
    ("(a|b)?c", &["c", "ac", "bc"], &["", "abc", "cc"]),
    ("x(a|bc|d?)y", &["xay", "xbcy", "xdy", "xy"], &["xby", "xady", "xa"]),
    ("(a?|b?)(c?|d?)", &["", "a", "b", "c", "d", "ac", "bd"], &["ab", "cd", "ca"]),
    (r"\(\)\??", &["()", "()?"], &["(", "()??"]),
    ("héllo wörld", &["héllo wörld"], &["hello world"]),
];

#[test]
fn table() -> anyhow::Result<()> {
    crate::init_logging();
    for &(pattern, yes, no) in CASES {
        let re = Regex::new(pattern)?;
        for input in yes {
            assert!(re.is_match(input), "{:?} should match {:?}", pattern, input);
        }
        for input in no {
            assert!(!re.is_match(input), "{:?} should not match {:?}", pattern, input);
        }
    }
    Ok(())
}

/// A pattern in the supported grammar over the letters `a` and `b`, along
/// with every string of length at most two it matches.
#[derive(Clone, Debug)]
struct Pattern {
    text: String,
    language: Vec<String>,
}

fn concat(left: &[String], right: &[String]) -> Vec<String> {
    let mut out: Vec<String> = left
        .iter()
        .flat_map(|l| right.iter().map(move |r| format!("{}{}", l, r)))
        .filter(|s| s.chars().count() <= 2)
        .collect();
    out.sort();
    out.dedup();
    out
}

fn union(left: &[String], right: &[String]) -> Vec<String> {
    let mut out: Vec<String> = left.iter().chain(right).cloned().collect();
    out.sort();
    out.dedup();
    out
}

fn arbitrary_pattern(g: &mut Gen, depth: u32) -> Pattern {
    let pick = if depth == 0 { 0 } else { u8::arbitrary(g) % 4 };
    match pick {
        0 => {
            let c = *g.choose(&["a", "b"]).unwrap();
            Pattern { text: c.to_string(), language: vec![c.to_string()] }
        }
        1 => {
            let (l, r) = (arbitrary_pattern(g, depth - 1), arbitrary_pattern(g, depth - 1));
            Pattern {
                text: format!("(?:{})(?:{})", l.text, r.text),
                language: concat(&l.language, &r.language),
            }
        }
        2 => {
            let (l, r) = (arbitrary_pattern(g, depth - 1), arbitrary_pattern(g, depth - 1));
            Pattern {
                text: format!("(?:{}|{})", l.text, r.text),
                language: union(&l.language, &r.language),
            }
        }
        _ => {
            let inner = arbitrary_pattern(g, depth - 1);
            Pattern {
                text: format!("(?:{})?", inner.text),
                language: union(&[String::new()], &inner.language),
            }
        }
    }
}

impl Arbitrary for Pattern {
    fn arbitrary(g: &mut Gen) -> Pattern {
        arbitrary_pattern(g, 3)
    }
}

/// Every string over `a` and `b` of length at most two.
fn short_strings() -> Vec<String> {
    let mut out = vec![String::new()];
    for a in ["a", "b"] {
        out.push(a.to_string());
        for b in ["a", "b"] {
            out.push(format!("{}{}", a, b));
        }
    }
    out
}

quickcheck! {
    fn matches_exactly_its_language(pattern: Pattern) -> bool {
        let re = Regex::new(&pattern.text).unwrap();
        short_strings()
            .into_iter()
            .all(|s| re.is_match(&s) == pattern.language.contains(&s))
    }

    fn compiling_twice_gives_the_same_automaton(pattern: Pattern) -> bool {
        let first = Regex::new(&pattern.text).unwrap();
        let second = Regex::new(&pattern.text).unwrap();
        first.nfa() == second.nfa()
    }

    fn optional_adds_the_empty_string(pattern: Pattern) -> bool {
        let re = Regex::new(&format!("(?:{})?", pattern.text)).unwrap();
        re.is_match("") && pattern.language.iter().all(|s| re.is_match(s))
    }
}
