/*!
Translation from `regex-syntax`'s abstract syntax tree into the tree the
compiler accepts.

The parser understands the full regex grammar. This module keeps the parts
the automaton can express and reports everything else as an unsupported node
kind. Repetitions are always translated, and the compiler decides which
quantifiers it supports.
*/

use regex_syntax::ast::{self as syntax_ast, parse::ParserBuilder};
use thompson_nfa_compiler::{Ast, CompileError, Quantifier};

use crate::error::Error;

/// Options for parsing pattern text.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    nest_limit: u32,
    ignore_whitespace: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config { nest_limit: 250, ignore_whitespace: false }
    }
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// The maximum nesting depth of groups and repetitions in the pattern.
    /// Deeper patterns are syntax errors. The length of a concatenation or
    /// the number of branches in an alternation is not limited by this.
    pub fn nest_limit(mut self, limit: u32) -> Config {
        self.nest_limit = limit;
        self
    }

    /// Ignore whitespace in the pattern and allow `#` comments, like the
    /// `x` flag.
    pub fn ignore_whitespace(mut self, yes: bool) -> Config {
        self.ignore_whitespace = yes;
        self
    }

    pub fn get_nest_limit(&self) -> u32 {
        self.nest_limit
    }

    pub fn get_ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }
}

/// Parse `pattern` and translate it into a compiler [`Ast`].
pub fn parse(pattern: &str, config: &Config) -> Result<Ast, Error> {
    let ast = ParserBuilder::new()
        .nest_limit(config.nest_limit)
        .ignore_whitespace(config.ignore_whitespace)
        .build()
        .parse(pattern)?;
    trace!("parsed {:?} into {:?}", pattern, ast);
    Ok(translate(&ast)?)
}

/// Translate a parsed pattern into a compiler [`Ast`].
pub fn translate(ast: &syntax_ast::Ast) -> Result<Ast, CompileError> {
    use regex_syntax::ast::Ast::*;

    match *ast {
        Literal(ref lit) => Ok(Ast::literal(lit.c)),
        Concat(ref concat) => fold(&concat.asts, Ast::concat),
        Alternation(ref alt) => fold(&alt.asts, Ast::alternation),
        Repetition(ref rep) => {
            let atom = translate(&rep.ast)?;
            Ok(Ast::repeat(atom, quantifier(&rep.op.kind)))
        }
        Group(ref group) => match group.kind {
            syntax_ast::GroupKind::NonCapturing(ref flags) if !flags.items.is_empty() => {
                Err(unsupported("flag group"))
            }
            _ => translate(&group.ast),
        },
        Empty(_) => Err(unsupported("empty expression")),
        Flags(_) => Err(unsupported("flags")),
        Dot(_) => Err(unsupported("any character")),
        Assertion(_) => Err(unsupported("assertion")),
        ClassUnicode(_) => Err(unsupported("Unicode class")),
        ClassPerl(_) => Err(unsupported("Perl class")),
        ClassBracketed(_) => Err(unsupported("bracketed class")),
    }
}

/// Right-nest an n-ary node into binary ones: `[a, b, c]` becomes
/// `op(a, op(b, c))`.
fn fold(asts: &[syntax_ast::Ast], op: fn(Ast, Ast) -> Ast) -> Result<Ast, CompileError> {
    let (last, init) = asts.split_last().ok_or_else(|| unsupported("empty expression"))?;
    let mut folded = translate(last)?;
    for ast in init.iter().rev() {
        folded = op(translate(ast)?, folded);
    }
    Ok(folded)
}

fn quantifier(kind: &syntax_ast::RepetitionKind) -> Quantifier {
    use regex_syntax::ast::{RepetitionKind, RepetitionRange};

    match *kind {
        RepetitionKind::ZeroOrOne => Quantifier::optional(),
        RepetitionKind::ZeroOrMore => Quantifier::zero_or_more(),
        RepetitionKind::OneOrMore => Quantifier::one_or_more(),
        RepetitionKind::Range(RepetitionRange::Exactly(n)) => Quantifier::range(n, Some(n)),
        RepetitionKind::Range(RepetitionRange::AtLeast(n)) => Quantifier::range(n, None),
        RepetitionKind::Range(RepetitionRange::Bounded(m, n)) => {
            Quantifier::range(m, Some(n))
        }
    }
}

fn unsupported(kind: &str) -> CompileError {
    CompileError::UnsupportedNodeKind(kind.to_string())
}
