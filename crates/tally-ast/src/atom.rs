//! The owned expression tree.
//! 表达式树。

use std::collections::VecDeque;

use crate::{Location, Value};

/// What a node computes.
/// 节点的表达式形式。
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// A literal or a late-bound name / 字面量或延迟绑定的名字
    Value(Value),
    /// `left + right`
    Plus(Box<Node>, Box<Node>),
    /// `left - right`
    Minus(Box<Node>, Box<Node>),
    /// `left * right`
    Times(Box<Node>, Box<Node>),
    /// `-operand`
    Negate(Box<Node>),
    /// `left / right`
    Divide(Box<Node>, Box<Node>),
    /// `callee(arguments...)`, arguments in source order / 函数调用
    Call(Box<Node>, Vec<Node>),
}

/// Coarse classification used for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Number,
    Variable,
    Operator,
    Call,
    Other,
}

impl Atom {
    pub fn number(n: f64) -> Self {
        Atom::Value(Value::Number(n))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Atom::Value(Value::Variable(name.into()))
    }

    /// Direct children in evaluation order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Atom::Value(_) => Vec::new(),
            Atom::Plus(left, right)
            | Atom::Minus(left, right)
            | Atom::Times(left, right)
            | Atom::Divide(left, right) => vec![left.as_ref(), right.as_ref()],
            Atom::Negate(operand) => vec![operand.as_ref()],
            Atom::Call(callee, args) => std::iter::once(callee.as_ref()).chain(args.iter()).collect(),
        }
    }

    /// Human readable description, e.g. `operator +` or `variable x`.
    pub fn describe(&self) -> String {
        match self {
            Atom::Value(value) => format!("{} {}", value.type_name(), value),
            Atom::Plus(..) => "operator +".to_string(),
            Atom::Minus(..) => "operator -".to_string(),
            Atom::Times(..) => "operator *".to_string(),
            Atom::Divide(..) => "operator /".to_string(),
            Atom::Negate(_) => "operator unary -".to_string(),
            Atom::Call(..) => "call".to_string(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Atom::Value(Value::Number(_) | Value::Integer(_)) => Category::Number,
            Atom::Value(Value::Variable(_)) => Category::Variable,
            Atom::Value(_) => Category::Other,
            Atom::Plus(..) | Atom::Minus(..) | Atom::Times(..) | Atom::Divide(..) | Atom::Negate(_) => {
                Category::Operator
            }
            Atom::Call(..) => Category::Call,
        }
    }
}

/// An expression node: an [`Atom`] plus where it came from.
/// 表达式节点。
///
/// A node owns its children; the atom is fixed once the node is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    atom: Atom,
    location: Option<Location>,
}

impl Node {
    /// A node with no source location, for hand-built trees.
    pub fn new(atom: Atom) -> Self {
        Self { atom, location: None }
    }

    pub fn located(atom: Atom, location: Location) -> Self {
        Self {
            atom,
            location: Some(location),
        }
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    pub fn into_atom(self) -> Atom {
        self.atom
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn children(&self) -> Vec<&Node> {
        self.atom.children()
    }

    /// Iterate over this node and all its descendants, breadth first.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            queue: VecDeque::from([self]),
        }
    }
}

/// Breadth-first iterator returned by [`Node::walk`].
pub struct Walk<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}
