//! The `tally repl` command.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::output;
use crate::session::Session;

const HELP: &str = "\
Commands:
  :help, :h       Show this help
  :quit, :q       Exit the REPL
  :env            Show current bindings
  :tree EXPR      Show the compiled tree of EXPR";

pub fn run(session: &Session) -> Result<(), String> {
    println!("tally REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    loop {
        match rl.readline("tally> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if line.starts_with(':') {
                    if !command(session, line) {
                        break;
                    }
                    continue;
                }

                // Errors have already been rendered by the session.
                if let Ok(value) = session.evaluate(line, "<repl>") {
                    output::result(&value.to_string());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Handle a `:` command. Returns false when the REPL should exit.
fn command(session: &Session, line: &str) -> bool {
    let (name, rest) = line.split_once(' ').unwrap_or((line, ""));

    match name {
        ":quit" | ":q" => return false,
        ":help" | ":h" => println!("{HELP}"),
        ":env" => {
            if session.env().is_empty() {
                output::info("no bindings");
            }
            for (name, value) in session.env().iter() {
                println!("  {name} = {value}");
            }
        }
        ":tree" => match rest.trim() {
            "" => output::info("usage: :tree EXPR"),
            expr => {
                if let Ok(program) = session.compile(expr, "<repl>") {
                    print!("{}", program.dump());
                }
            }
        },
        _ => output::info(&format!("unknown command: {name}")),
    }

    true
}
