use std::fmt;

/// A node in the syntax tree handed to the compiler.
///
/// The tree is produced outside this crate (typically by translating the
/// output of a regex parser) and is never modified by compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
    /// `left` followed by `right`.
    Concat { left: Box<Ast>, right: Box<Ast> },
    /// Exactly one occurrence of a character.
    Literal(char),
    /// Either `left` or `right`.
    Alternation { left: Box<Ast>, right: Box<Ast> },
    /// `atom` repeated as described by `quantifier`.
    Repeat { atom: Box<Ast>, quantifier: Quantifier },
}

impl Ast {
    pub fn literal(c: char) -> Ast {
        Ast::Literal(c)
    }

    pub fn concat(left: Ast, right: Ast) -> Ast {
        Ast::Concat { left: Box::new(left), right: Box::new(right) }
    }

    pub fn alternation(left: Ast, right: Ast) -> Ast {
        Ast::Alternation { left: Box::new(left), right: Box::new(right) }
    }

    pub fn repeat(atom: Ast, quantifier: Quantifier) -> Ast {
        Ast::Repeat { atom: Box::new(atom), quantifier }
    }

    /// Concatenates every character of `s` in order, or returns `None` when
    /// `s` is empty.
    pub fn string(s: &str) -> Option<Ast> {
        let mut chars = s.chars().rev();
        let last = Ast::literal(chars.next()?);
        Some(chars.fold(last, |rest, c| Ast::concat(Ast::literal(c), rest)))
    }

    /// A short name for the kind of this node, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match *self {
            Ast::Concat { .. } => "concatenation",
            Ast::Literal(_) => "literal",
            Ast::Alternation { .. } => "alternation",
            Ast::Repeat { .. } => "repetition",
        }
    }

    fn is_literal(&self) -> bool {
        matches!(*self, Ast::Literal(_))
    }
}

/// Drops the tree with a stack on the heap instead of one call per level. A
/// long pattern is a chain of concatenations as deep as the pattern is long.
impl Drop for Ast {
    fn drop(&mut self) {
        use std::mem;

        match *self {
            Ast::Literal(_) => return,
            Ast::Concat { ref left, ref right } | Ast::Alternation { ref left, ref right }
                if left.is_literal() && right.is_literal() =>
            {
                return
            }
            Ast::Repeat { ref atom, .. } if atom.is_literal() => return,
            _ => {}
        }

        let empty = || Ast::Literal('\0');
        let mut stack = vec![mem::replace(self, empty())];
        while let Some(mut ast) = stack.pop() {
            match ast {
                Ast::Literal(_) => {}
                Ast::Concat { ref mut left, ref mut right }
                | Ast::Alternation { ref mut left, ref mut right } => {
                    stack.push(mem::replace(&mut **left, empty()));
                    stack.push(mem::replace(&mut **right, empty()));
                }
                Ast::Repeat { ref mut atom, .. } => {
                    stack.push(mem::replace(&mut **atom, empty()));
                }
            }
            // 'ast' is dropped here, and every child it still owns is a
            // literal, so dropping it does not recurse.
        }
    }
}

/// The bounds of a repetition.
///
/// `special` marks the shorthand operator forms (`?`, `*`, `+`) as opposed to
/// an explicit counted range such as `{0,1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantifier {
    pub from: u32,
    /// `None` means unbounded.
    pub to: Option<u32>,
    pub special: bool,
}

impl Quantifier {
    /// The `?` quantifier. This is the only repetition the compiler supports.
    pub const fn optional() -> Quantifier {
        Quantifier { from: 0, to: Some(1), special: true }
    }

    /// The `*` quantifier.
    pub const fn zero_or_more() -> Quantifier {
        Quantifier { from: 0, to: None, special: true }
    }

    /// The `+` quantifier.
    pub const fn one_or_more() -> Quantifier {
        Quantifier { from: 1, to: None, special: true }
    }

    /// A counted range `{from,to}`; `to == None` is `{from,}`.
    pub const fn range(from: u32, to: Option<u32>) -> Quantifier {
        Quantifier { from, to, special: false }
    }

    pub fn is_optional(&self) -> bool {
        *self == Quantifier::optional()
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.special, self.from, self.to) {
            (true, 0, Some(1)) => write!(f, "?"),
            (true, 0, None) => write!(f, "*"),
            (true, 1, None) => write!(f, "+"),
            (_, from, Some(to)) if from == to => write!(f, "{{{}}}", from),
            (_, from, Some(to)) => write!(f, "{{{},{}}}", from, to),
            (_, from, None) => write!(f, "{{{},}}", from),
        }
    }
}
