//! Compiled programs.

use std::fmt::Write;
use std::sync::Arc;

use crate::{Node, Walk};

/// A compiled expression: the source text and the tree built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledProgram {
    source: Arc<str>,
    root: Node,
}

impl CompiledProgram {
    pub fn new(source: Arc<str>, root: Node) -> Self {
        Self { source, root }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Every node of the program, breadth first from the root.
    pub fn nodes(&self) -> Walk<'_> {
        self.root.walk()
    }

    /// Render the tree one node per line, children indented under parents.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        dump_node(&self.root, 0, &mut out);
        out
    }
}

fn dump_node(node: &Node, indent: usize, out: &mut String) {
    let _ = write!(out, "{:width$}{}", "", node.atom().describe(), width = indent * 2);
    if let Some(loc) = node.location() {
        let _ = write!(out, " @ {:?}", loc.span());
    }
    out.push('\n');
    for child in node.children() {
        dump_node(child, indent + 1, out);
    }
}
