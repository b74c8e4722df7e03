//! Parse tree to AST lowering ("atomization").

use std::sync::Arc;

use tally_common::Span;
use tally_parser::{DEFAULT_MAX_DEPTH, ParseOptions};
use tally_syntax::{ExprRef, ParseTree, ParsedKind};

use crate::{Atom, CompiledProgram, Location, Node, SyntaxError, SyntaxErrorKind, Value};

/// Options controlling compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Maximum nesting depth accepted from the parser.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompileOptions {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.max_depth,
        }
    }
}

/// Turns source text into a [`CompiledProgram`].
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compile one expression.
    ///
    /// Identifiers are not looked up here; they become `Value::Variable`
    /// leaves that the evaluator resolves later.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn compile(&self, source: &str) -> Result<CompiledProgram, SyntaxError> {
        let tree = tally_parser::parse_with(source, &self.options.parse_options())?;
        let program = atomize(&tree, Arc::from(source))?;
        tracing::debug!(nodes = tree.len(), "compiled");
        Ok(program)
    }

    /// Compile raw bytes, failing with `InvalidEncoding` if they are not UTF-8.
    pub fn compile_bytes(&self, source: &[u8]) -> Result<CompiledProgram, SyntaxError> {
        let tree = tally_parser::parse_bytes(source, &self.options.parse_options())?;
        let text = std::str::from_utf8(source).map_err(|err| {
            SyntaxError::new(SyntaxErrorKind::InvalidEncoding, Span::point(err.valid_up_to()))
        })?;
        atomize(&tree, Arc::from(text))
    }
}

/// Compile with the default options.
pub fn compile(source: &str) -> Result<CompiledProgram, SyntaxError> {
    Compiler::new().compile(source)
}

/// Lower a parse tree into an owned program.
///
/// The tree is not referenced after this returns: every span, literal and
/// name is copied into the new nodes.
pub fn atomize(tree: &ParseTree, source: Arc<str>) -> Result<CompiledProgram, SyntaxError> {
    let root = tree
        .root()
        .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::IncompleteInput, Span::point(source.len())))?;
    let node = Atomizer { tree, source: &source }.lower(root)?;
    Ok(CompiledProgram::new(source, node))
}

struct Atomizer<'a> {
    tree: &'a ParseTree,
    source: &'a Arc<str>,
}

impl Atomizer<'_> {
    fn lower(&self, id: ExprRef) -> Result<Node, SyntaxError> {
        let expr = self.tree.get(id);
        tracing::trace!(kind = expr.kind.name(), span = ?expr.span, "atomize");

        let atom = match &expr.kind {
            ParsedKind::Number(n) => Atom::Value(Value::Number(*n)),
            ParsedKind::Identifier { name } => {
                let text = name
                    .slice(self.source)
                    .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::InvalidToken, *name))?;
                Atom::Value(Value::Variable(text.to_string()))
            }
            ParsedKind::Add { left, right } => Atom::Plus(self.boxed(*left)?, self.boxed(*right)?),
            ParsedKind::Subtract { left, right } => Atom::Minus(self.boxed(*left)?, self.boxed(*right)?),
            ParsedKind::Multiply { left, right } => Atom::Times(self.boxed(*left)?, self.boxed(*right)?),
            ParsedKind::Divide { left, right } => Atom::Divide(self.boxed(*left)?, self.boxed(*right)?),
            ParsedKind::Negate { operand } => Atom::Negate(self.boxed(*operand)?),
            // Parentheses do not get a node of their own: the inner atom is
            // kept and relabelled with the parenthesized range.
            ParsedKind::Parens { inner } => self.lower(*inner)?.into_atom(),
            ParsedKind::Call { callee, args } => {
                let callee = self.boxed(*callee)?;
                let args = args
                    .iter()
                    .map(|arg| self.lower(*arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Atom::Call(callee, args)
            }
        };

        Ok(Node::located(atom, Location::new(Arc::clone(self.source), expr.span)))
    }

    fn boxed(&self, id: ExprRef) -> Result<Box<Node>, SyntaxError> {
        self.lower(id).map(Box::new)
    }
}
