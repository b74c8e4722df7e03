//! The `tally highlight` command.

use crate::output;
use crate::session::Session;
use tally_ast::{Category, CompiledProgram};

pub fn run(session: &Session, expr: &str) -> Result<(), String> {
    let program = session.compile(expr, "<highlight>")?;
    println!("{}", highlight(&program));
    Ok(())
}

/// Colour every byte by the innermost node covering it.
///
/// Nodes are visited breadth first, so a child's colour overwrites the
/// colour of the parent it sits in.
pub fn highlight(program: &CompiledProgram) -> String {
    let source = program.source();
    let mut categories: Vec<Option<Category>> = vec![None; source.len()];

    for node in program.nodes() {
        let Some(loc) = node.location() else {
            continue;
        };
        let category = node.atom().category();
        for slot in categories.iter_mut().take(loc.range().end).skip(loc.range().start) {
            *slot = Some(category);
        }
    }

    let mut out = String::new();
    let mut run_start = 0;
    let mut run_category = categories.first().copied().flatten();

    for (i, _) in source.char_indices().skip(1) {
        if categories[i] != run_category {
            out.push_str(&output::paint(&source[run_start..i], run_category));
            run_start = i;
            run_category = categories[i];
        }
    }
    out.push_str(&output::paint(&source[run_start..], run_category));
    out
}
