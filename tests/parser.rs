//! Integration tests for tally-parser crate.

use tally_common::Span;
use tally_parser::{ParseErrorKind, ParseOptions, parse, parse_bytes, parse_with};
use tally_syntax::{ParseTree, ParsedKind};

fn root(tree: &ParseTree) -> &ParsedKind {
    &tree.get(tree.root().unwrap()).kind
}

fn error(source: &str) -> ParseErrorKind {
    parse(source).unwrap_err().kind
}

#[test]
fn test_parse_literal() {
    let tree = parse("42").unwrap();
    assert_eq!(root(&tree), &ParsedKind::Number(42.0));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_identifier_span_points_at_name() {
    let source = "  radius ";
    let tree = parse(source).unwrap();
    match root(&tree) {
        ParsedKind::Identifier { name } => assert_eq!(name.slice(source), Some("radius")),
        other => panic!("expected identifier, got {:?}", other),
    }
}

#[test]
fn test_negation_binds_tighter_than_multiplication() {
    let tree = parse("-a * b").unwrap();
    match root(&tree) {
        ParsedKind::Multiply { left, .. } => {
            assert!(matches!(tree.get(*left).kind, ParsedKind::Negate { .. }));
            assert_eq!(tree.get(*left).span, Span::from_usize(0, 2));
        }
        other => panic!("expected multiply, got {:?}", other),
    }
}

#[test]
fn test_call_without_arguments() {
    let tree = parse("random()").unwrap();
    match root(&tree) {
        ParsedKind::Call { args, .. } => assert!(args.is_empty()),
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_nested_calls() {
    let tree = parse("max(min(1, 2), 3)").unwrap();
    match root(&tree) {
        ParsedKind::Call { args, .. } => {
            assert_eq!(args.len(), 2);
            assert!(matches!(tree.get(args[0]).kind, ParsedKind::Call { .. }));
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_children_allocated_before_parents() {
    let tree = parse("(1 + 2) * f(3)").unwrap();
    let root = tree.root().unwrap();
    assert_eq!(root.index(), tree.len() - 1);
}

#[test]
fn test_incomplete_inputs() {
    for source in ["1 + ", "(1", "f(2,", "-", ""] {
        assert_eq!(error(source), ParseErrorKind::MoreInputNeeded, "source: {:?}", source);
    }
}

#[test]
fn test_unexpected_tokens() {
    for source in ["1 2", ")", "1 + * 2", "f(,)", "(1))"] {
        assert_eq!(error(source), ParseErrorKind::UnexpectedToken, "source: {:?}", source);
    }
}

#[test]
fn test_invalid_token_reported_before_parsing() {
    let err = parse("1 + ? + (").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidToken);
    assert_eq!(err.span, Span::from_usize(4, 5));
}

#[test]
fn test_invalid_utf8() {
    let err = parse_bytes(b"12\xc3", &ParseOptions::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidInput);
    assert_eq!(err.span.start.0, 2);
}

#[test]
fn test_long_chain_hits_depth_limit() {
    let source = vec!["1"; 300].join(" + ");
    let err = parse(&source).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 256 });

    let options = ParseOptions { max_depth: 400 };
    assert!(parse_with(&source, &options).is_ok());
}

#[test]
fn test_deep_parens_hit_depth_limit() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse(&source).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 256 });
}

#[test]
fn test_error_converts_to_diagnostic() {
    let diag = parse("1 +").unwrap_err().to_diagnostic();
    assert!(diag.is_error());
    assert_eq!(diag.span, Span::point(3));
    assert!(diag.help.is_some());
}

#[test]
fn test_every_span_lies_within_root() {
    let source = "-f(a, (b + 1) * 2) / c";
    let tree = parse(source).unwrap();
    let outer = tree.get(tree.root().unwrap()).span;
    assert_eq!(outer, Span::from_usize(0, source.len()));
    for (id, expr) in tree.iter() {
        assert!(outer.contains(expr.span), "{:?} escapes root: {:?}", id, expr);
        assert!(expr.span.slice(source).is_some());
    }
}
