//! Parse tree nodes.
//! 语法树节点。

use std::fmt;
use tally_common::Span;

/// Handle to an expression stored in a [`ParseTree`].
/// 指向 [`ParseTree`] 中表达式的句柄。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprRef(u32);

impl ExprRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprRef({})", self.0)
    }
}

/// A parsed expression: a discriminant plus the byte range it came from.
/// 解析后的表达式：类型标记以及其源码字节范围。
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpr {
    pub kind: ParsedKind,
    pub span: Span,
}

impl ParsedExpr {
    pub fn new(kind: ParsedKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Grammar production kind.
/// 语法产生式类型。
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedKind {
    /// Numeric literal, already decoded / 数字字面量（已解码）
    Number(f64),
    /// Identifier; `name` is the identifier's own text range / 标识符
    Identifier { name: Span },
    /// `left + right` / 加法
    Add { left: ExprRef, right: ExprRef },
    /// `left - right` / 减法
    Subtract { left: ExprRef, right: ExprRef },
    /// `left * right` / 乘法
    Multiply { left: ExprRef, right: ExprRef },
    /// `left / right` / 除法
    Divide { left: ExprRef, right: ExprRef },
    /// `-operand` / 取负
    Negate { operand: ExprRef },
    /// `(inner)` / 括号表达式
    Parens { inner: ExprRef },
    /// `callee(arg, ...)`, arguments in source order / 函数调用
    Call { callee: ExprRef, args: Vec<ExprRef> },
}

impl ParsedKind {
    /// Short production name, used in logs and debug dumps.
    pub fn name(&self) -> &'static str {
        match self {
            ParsedKind::Number(_) => "number",
            ParsedKind::Identifier { .. } => "identifier",
            ParsedKind::Add { .. } => "add",
            ParsedKind::Subtract { .. } => "subtract",
            ParsedKind::Multiply { .. } => "multiply",
            ParsedKind::Divide { .. } => "divide",
            ParsedKind::Negate { .. } => "negate",
            ParsedKind::Parens { .. } => "parens",
            ParsedKind::Call { .. } => "call",
        }
    }
}

/// The output of a successful parse.
/// 成功解析的结果。
///
/// Expressions are stored in allocation order, so every child is allocated
/// before its parent and the root is the last entry.
#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    exprs: Vec<ParsedExpr>,
    root: Option<ExprRef>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an expression and return its handle.
    pub fn alloc(&mut self, expr: ParsedExpr) -> ExprRef {
        let id = ExprRef(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    pub fn set_root(&mut self, root: ExprRef) {
        self.root = Some(root);
    }

    /// The root expression, if one has been set.
    pub fn root(&self) -> Option<ExprRef> {
        self.root
    }

    /// Look up an expression by handle.
    ///
    /// Handles are only ever created by [`ParseTree::alloc`], so a handle
    /// from this tree is always in bounds.
    pub fn get(&self, id: ExprRef) -> &ParsedExpr {
        &self.exprs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExprRef, &ParsedExpr)> {
        self.exprs
            .iter()
            .enumerate()
            .map(|(i, expr)| (ExprRef(i as u32), expr))
    }
}
