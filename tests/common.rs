//! Integration tests for tally-common crate.

use tally_common::{BytePos, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::from_usize(4, 6);
    let b = Span::from_usize(0, 1);
    assert_eq!(a.merge(b), b.merge(a));
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    assert!(Span::point(5).is_empty());
    assert!(!Span::from_usize(5, 10).is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
    assert_eq!(Span::from(5..15), span);
}

#[test]
fn test_span_slice_respects_char_boundaries() {
    let source = "π + 1";
    assert_eq!(Span::from_usize(0, 2).slice(source), Some("π"));
    assert_eq!(Span::from_usize(0, 1).slice(source), None);
}

#[test]
fn test_byte_pos_offset() {
    let pos = BytePos(10);
    assert_eq!(pos.offset(5), BytePos(15));
    assert_eq!(usize::from(BytePos::from(7usize)), 7);
}
