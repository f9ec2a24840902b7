use thompson_nfa_compiler::{compiler, Compiler};

use crate::{error::Error, regex::Regex, syntax};

/// A configurable builder for a [`Regex`].
///
/// ```
/// use thompson::RegexBuilder;
///
/// let re = RegexBuilder::new("a b? # optional b")
///     .ignore_whitespace(true)
///     .build()
///     .unwrap();
/// assert!(re.is_match("a"));
/// assert!(re.is_match("ab"));
/// ```
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    syntax: syntax::Config,
    size_limit: Option<usize>,
}

impl RegexBuilder {
    /// Create a new builder with a default configuration for the given
    /// pattern.
    pub fn new(pattern: &str) -> RegexBuilder {
        RegexBuilder {
            pattern: pattern.to_string(),
            syntax: syntax::Config::default(),
            size_limit: None,
        }
    }

    /// Parse, translate and compile the pattern.
    pub fn build(&self) -> Result<Regex, Error> {
        let ast = syntax::parse(&self.pattern, &self.syntax)?;
        let config = compiler::Config::new().size_limit(self.size_limit);
        let nfa = Compiler::with_config(config).compile(&ast)?;
        debug!("built regex {:?} with {} states", self.pattern, nfa.len());
        Ok(Regex::from_parts(&self.pattern, nfa))
    }

    /// Set the nesting limit for the parser. Patterns nested deeper than
    /// this fail with a syntax error. The default is `250`.
    pub fn nest_limit(&mut self, limit: u32) -> &mut RegexBuilder {
        self.syntax = self.syntax.nest_limit(limit);
        self
    }

    /// Ignore whitespace in the pattern and allow `#` line comments. This is
    /// disabled by default.
    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut RegexBuilder {
        self.syntax = self.syntax.ignore_whitespace(yes);
        self
    }

    /// Set the maximum number of automaton states. Compiling a pattern that
    /// needs more fails with [`CompileError::TooBig`](crate::CompileError::TooBig).
    /// There is no limit by default.
    pub fn size_limit(&mut self, limit: Option<usize>) -> &mut RegexBuilder {
        self.size_limit = limit;
        self
    }
}
