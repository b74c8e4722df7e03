//! The `tally eval` command.

use crate::output;
use crate::session::Session;

pub fn run(session: &Session, expr: &str) -> Result<(), String> {
    let value = session.evaluate(expr, "<eval>")?;
    output::result(&value.to_string());
    Ok(())
}
