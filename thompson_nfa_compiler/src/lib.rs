//! Thompson NFA Compiler
//!
//! This library compiles a small regular expression syntax tree into a
//! Thompson NFA and decides whether an input matches it by simulating the
//! automaton one character at a time. The simulation tracks the set of active
//! states instead of backtracking, so matching takes time proportional to the
//! length of the input times the size of the automaton.
//!
//! The supported syntax is deliberately small: literals, concatenation,
//! alternation and the optional (`?`) quantifier. Parsing pattern text is not
//! done here; callers build an [`Ast`] directly or translate one from a parser.
//!
//! ```
//! use thompson_nfa_compiler::{Ast, Compiler, Matcher, Quantifier};
//!
//! // ab?
//! let ast = Ast::concat(
//!     Ast::literal('a'),
//!     Ast::repeat(Ast::literal('b'), Quantifier::optional()),
//! );
//! let nfa = Compiler::new().compile(&ast).unwrap();
//! let matcher = Matcher::new(&nfa);
//!
//! assert!(matcher.is_match("a"));
//! assert!(matcher.is_match("ab"));
//! assert!(!matcher.is_match("abb"));
//! ```

#[macro_use]
mod macros;

pub mod ast;
pub mod compiler;
pub mod matcher;
pub mod nfa;
pub mod sparse;

pub use ast::{Ast, Quantifier};
pub use compiler::{ast_to_nfa, Compiler, Config};
pub use matcher::{is_match, Matcher};
pub use nfa::{Fragment, Hole, Slot, State, StateId, NFA};

/// The result of compiling an AST to a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The AST contains a node kind the compiler has no construction for.
    UnsupportedNodeKind(String),
    /// A repetition other than the optional quantifier `{0,1}` in its `?` form.
    UnsupportedQuantifier(Quantifier),
    /// The automaton would exceed the configured state limit.
    TooBig(usize),
    /// Internal compilation error
    Internal(String),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnsupportedNodeKind(kind) => {
                write!(f, "unsupported syntax node: {}", kind)
            }
            CompileError::UnsupportedQuantifier(quantifier) => {
                write!(f, "unsupported quantifier: {}", quantifier)
            }
            CompileError::TooBig(limit) => {
                write!(f, "compiled automaton exceeds size limit of {} states", limit)
            }
            CompileError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for CompileError {}

/// Errors that can occur while matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The input is not a sequence of characters. `offset` is the byte
    /// position of the first element that could not be decoded.
    InvalidInput { offset: usize },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidInput { offset } => {
                write!(f, "input is not valid UTF-8 at byte offset {}", offset)
            }
        }
    }
}

impl std::error::Error for MatchError {}
