use thompson_nfa_compiler::{CompileError, MatchError};

/// An error that occurred during parsing, compiling or matching a regular
/// expression.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// A syntax error. The string is the parser's rendering of the error,
    /// which already points at the offending part of the pattern.
    Syntax(String),
    /// The pattern parsed, but uses syntax the automaton cannot express, or
    /// the automaton exceeds the configured size limit.
    Compile(CompileError),
    /// The haystack is not a sequence of characters.
    Match(MatchError),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Syntax(_) => None,
            Error::Compile(ref err) => Some(err),
            Error::Match(ref err) => Some(err),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::Syntax(ref err) => write!(f, "{}", err),
            Error::Compile(ref err) => write!(f, "failed to compile regex: {}", err),
            Error::Match(ref err) => write!(f, "{}", err),
        }
    }
}

// We implement our own Debug implementation so that we show nicer syntax
// errors when people use `Regex::new(...).unwrap()`. It's a little weird,
// but the `Syntax` variant is already storing a `String` anyway, so we might
// as well format it nicely.
impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::Syntax(ref err) => {
                let hr: String = core::iter::repeat('~').take(79).collect();
                writeln!(f, "Syntax(")?;
                writeln!(f, "{}", hr)?;
                writeln!(f, "{}", err)?;
                writeln!(f, "{}", hr)?;
                write!(f, ")")?;
                Ok(())
            }
            Error::Compile(ref err) => f.debug_tuple("Compile").field(err).finish(),
            Error::Match(ref err) => f.debug_tuple("Match").field(err).finish(),
        }
    }
}

impl From<regex_syntax::ast::Error> for Error {
    fn from(err: regex_syntax::ast::Error) -> Error {
        Error::Syntax(err.to_string())
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Error {
        Error::Compile(err)
    }
}

impl From<MatchError> for Error {
    fn from(err: MatchError) -> Error {
        Error::Match(err)
    }
}
