//! The `tally tree` command.

use crate::session::Session;

pub fn run(session: &Session, expr: &str) -> Result<(), String> {
    let program = session.compile(expr, "<tree>")?;
    print!("{}", program.dump());
    Ok(())
}
