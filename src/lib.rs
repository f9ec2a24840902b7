/*!
This crate provides match-only regular expressions backed by a Thompson NFA.

A pattern is parsed with [`regex-syntax`](https://docs.rs/regex-syntax),
translated into the small syntax tree understood by
[`thompson_nfa_compiler`], and compiled once into an automaton. Matching then
simulates that automaton over the input one character at a time while keeping
the set of active states, so the time taken is linear in the length of the
input for a fixed pattern. There is no backtracking and therefore no
catastrophic patterns.

# Example

```
use thompson::Regex;

let re = Regex::new(r"colou?r|gr(a|e)y").unwrap();
assert!(re.is_match("color"));
assert!(re.is_match("colour"));
assert!(re.is_match("grey"));
assert!(!re.is_match("colouur"));
```

A match always covers the entire haystack; there is no searching for a
match somewhere inside a longer string.

# Syntax

Only a sliver of the usual regex syntax is supported:

* literal characters, including escaped meta characters such as `\.` or `\?`,
* concatenation and alternation (`ab`, `a|b`),
* grouping with parentheses (`(ab)?`); groups do not capture anything,
* the optional quantifier `?` (lazy `??` behaves identically).

Anything else, such as `*`, `+`, counted repetition, `.`, classes, anchors or
flags, is rejected when the pattern is compiled. Repetition operators fail
with [`CompileError::UnsupportedQuantifier`]; all other constructs fail with
[`CompileError::UnsupportedNodeKind`].

# Sharing

A [`Regex`] is immutable after construction and cheap to clone. It can be
used from many threads at once without synchronization; every match
allocates its own scratch space.

# Crate features

* **std** - Required. Enables the standard library in the parser.
* **logging** - Emits compile and match traces through the
  [`log`](https://docs.rs/log) crate.
*/

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(not(feature = "std"))]
compile_error!("'std' is currently a required feature, please file an issue");

#[macro_use]
mod macros;

pub use crate::{
    builders::RegexBuilder,
    error::Error,
    regex::{is_match, Regex},
};
pub use thompson_nfa_compiler::{CompileError, MatchError, Quantifier};

/// The compiler and simulator this crate is built on.
pub use thompson_nfa_compiler as nfa;

mod builders;
mod error;
mod regex;
pub mod syntax;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
