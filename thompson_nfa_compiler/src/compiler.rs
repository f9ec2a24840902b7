use crate::{
    ast::Ast,
    nfa::{Builder, Fragment, Hole, NFA},
    CompileError, CompileResult,
};

/// Options for [`Compiler`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    size_limit: Option<usize>,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Limit the number of states, including the start state, the compiled
    /// NFA may have. Compiling a larger automaton fails with
    /// [`CompileError::TooBig`]. There is no limit by default.
    pub fn size_limit(mut self, limit: Option<usize>) -> Config {
        self.size_limit = limit;
        self
    }

    pub fn get_size_limit(&self) -> Option<usize> {
        self.size_limit
    }
}

/// Compiler that converts an [`Ast`] to a Thompson NFA
///
/// Every AST node becomes a [`Fragment`]: an entry state plus the list of
/// edges that still need a successor. Parents connect their children by
/// patching those holes. Holes left over at the root mark the ends of the
/// pattern and stay unpatched.
///
/// The tree is walked with an explicit stack on the heap, so arbitrarily
/// long concatenations and alternations compile without growing the call
/// stack.
pub struct Compiler {
    builder: Builder,
}

/// Work left to do for a node whose first child is being compiled, or whose
/// children are all compiled and are waiting to be joined.
enum Frame<'a> {
    /// The left side of a concatenation is being compiled. `tail` belongs to
    /// the concatenation and is passed on to `right`.
    ConcatRight { right: &'a Ast, tail: bool },
    /// Both sides of a concatenation are compiled once the right one is.
    ConcatJoin { left: Fragment },
    AlternationRight { right: &'a Ast, tail: bool },
    AlternationJoin { left: Fragment },
    /// The atom of an optional is being compiled.
    Optional,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self { builder: Builder::with_size_limit(config.size_limit) }
    }

    /// Compile `ast` behind a dedicated start state.
    ///
    /// The compiler is consumed: once this returns, the states it allocated
    /// belong to the immutable [`NFA`] and can no longer be patched.
    pub fn compile(mut self, ast: &Ast) -> CompileResult<NFA> {
        debug!("compiling {} node into Thompson NFA", ast.kind());
        let fragment = self.compile_node(ast)?;
        trace!("{} holes left dangling at pattern end", fragment.holes.len());
        let nfa = self.builder.build(fragment.entry)?;
        debug!("compiled NFA with {} states", nfa.len());
        Ok(nfa)
    }

    /// Compile the whole tree rooted at `root` to an NFA fragment.
    ///
    /// Children are compiled left to right and a parent is joined as soon as
    /// its last child is done, so states are allocated in the same order a
    /// recursive walk would allocate them. A node is in tail position when
    /// nothing in the pattern follows it: the root is, the left side of a
    /// concatenation is not, and every other child inherits its parent's
    /// position.
    fn compile_node(&mut self, root: &Ast) -> CompileResult<Fragment> {
        let mut stack: Vec<Frame<'_>> = vec![];
        let mut node = root;
        let mut tail = true;
        loop {
            // Descend along left children until reaching a literal.
            let mut fragment = loop {
                match *node {
                    Ast::Literal(c) => break self.compile_literal(c, tail)?,
                    Ast::Concat { ref left, ref right } => {
                        stack.push(Frame::ConcatRight { right: &**right, tail });
                        node = &**left;
                        tail = false;
                    }
                    Ast::Alternation { ref left, ref right } => {
                        stack.push(Frame::AlternationRight { right: &**right, tail });
                        node = &**left;
                    }
                    Ast::Repeat { ref atom, quantifier } => {
                        if !quantifier.is_optional() {
                            return Err(CompileError::UnsupportedQuantifier(quantifier));
                        }
                        stack.push(Frame::Optional);
                        node = &**atom;
                    }
                }
            };
            // Join finished children into their parents until some parent
            // still has a right child to compile.
            loop {
                match stack.pop() {
                    None => return Ok(fragment),
                    Some(Frame::ConcatRight { right, tail: parent }) => {
                        stack.push(Frame::ConcatJoin { left: fragment });
                        node = right;
                        tail = parent;
                        break;
                    }
                    Some(Frame::AlternationRight { right, tail: parent }) => {
                        stack.push(Frame::AlternationJoin { left: fragment });
                        node = right;
                        tail = parent;
                        break;
                    }
                    Some(Frame::ConcatJoin { left }) => {
                        fragment = self.join_concat(left, fragment)?;
                    }
                    Some(Frame::AlternationJoin { left }) => {
                        fragment = self.join_alternation(left, fragment)?;
                    }
                    Some(Frame::Optional) => {
                        fragment = self.join_optional(fragment)?;
                    }
                }
            }
        }
    }

    fn compile_literal(&mut self, c: char, tail: bool) -> CompileResult<Fragment> {
        let id = self.builder.add_char(c, tail)?;
        Ok(Fragment { entry: id, holes: vec![Hole::next(id)] })
    }

    fn join_concat(&mut self, first: Fragment, second: Fragment) -> CompileResult<Fragment> {
        for hole in first.holes {
            self.builder.patch(hole, second.entry)?;
        }
        Ok(Fragment { entry: first.entry, holes: second.holes })
    }

    fn join_alternation(&mut self, first: Fragment, second: Fragment) -> CompileResult<Fragment> {
        let split = self.builder.add_split(first.entry, Some(second.entry))?;
        // Every hole gets the same successor, so their order does not
        // matter. Growing the longer list keeps long alternations linear.
        let (mut holes, rest) = if first.holes.len() >= second.holes.len() {
            (first.holes, second.holes)
        } else {
            (second.holes, first.holes)
        };
        holes.extend(rest);
        Ok(Fragment { entry: split, holes })
    }

    /// Only `?` gets here. The split's second edge skips the atom and is
    /// patched by whatever follows, like any other hole.
    fn join_optional(&mut self, inner: Fragment) -> CompileResult<Fragment> {
        let split = self.builder.add_split(inner.entry, None)?;
        let mut holes = inner.holes;
        holes.push(Hole::skip(split));
        Ok(Fragment { entry: split, holes })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile `ast` with the default configuration.
pub fn ast_to_nfa(ast: &Ast) -> CompileResult<NFA> {
    Compiler::new().compile(ast)
}
