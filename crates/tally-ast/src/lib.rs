//! Owned expression tree and runtime values for tally.
//!
//! This crate lowers the parser's [`tally_syntax::ParseTree`] into an owned
//! tree of [`Node`]s (atomization) and defines the [`Value`] and
//! [`Function`] types the evaluator works with.

mod atom;
mod compile;
mod error;
mod function;
mod location;
mod program;
mod value;

pub use atom::{Atom, Category, Node, Walk};
pub use compile::{CompileOptions, Compiler, atomize, compile};
pub use error::{ExecutionError, SyntaxError, SyntaxErrorKind};
pub use function::{Function, expect_arity, numbers};
pub use location::Location;
pub use program::CompiledProgram;
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_precedence() {
        let program = compile("1 + 2 * 3").unwrap();
        match program.root().atom() {
            Atom::Plus(left, right) => {
                assert_eq!(left.atom(), &Atom::number(1.0));
                assert!(matches!(right.atom(), Atom::Times(..)));
            }
            other => panic!("expected plus, got {:?}", other),
        }
    }

    #[test]
    fn test_compile_call_arguments_in_order() {
        let program = compile("max(a, 2, b)").unwrap();
        match program.root().atom() {
            Atom::Call(callee, args) => {
                assert_eq!(callee.atom(), &Atom::variable("max"));
                let args: Vec<&Atom> = args.iter().map(Node::atom).collect();
                assert_eq!(
                    args,
                    vec![&Atom::variable("a"), &Atom::number(2.0), &Atom::variable("b")]
                );
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_call_on_expression_result() {
        let program = compile("(f)(1)(2)").unwrap();
        match program.root().atom() {
            Atom::Call(callee, args) => {
                assert_eq!(args.len(), 1);
                assert!(matches!(callee.atom(), Atom::Call(..)));
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_input() {
        let err = compile("1 + ").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IncompleteInput);
    }

    #[test]
    fn test_invalid_token() {
        let err = compile("1 $ 2").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::InvalidToken);
        assert_eq!(err.span.range(), 2..3);
    }

    #[test]
    fn test_dump() {
        let program = compile("-(1 + x)").unwrap();
        assert_eq!(
            program.dump(),
            "operator unary - @ 0..8\n  operator + @ 1..8\n    number 1 @ 2..3\n    variable x @ 6..7\n"
        );
    }
}
