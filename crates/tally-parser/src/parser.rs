//! The tally parser.

use crate::{ParseError, ParseErrorKind, ParseOptions};
use tally_common::Span;
use tally_lexer::{Token, TokenKind};
use tally_syntax::{ExprRef, ParseTree, ParsedExpr, ParsedKind};

type PResult<T> = Result<T, ParseError>;

/// The tally parser.
///
/// Works over a token vector that always ends with [`TokenKind::Eof`].
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    tree: ParseTree,
    /// Height of every allocated expression, indexed like the tree.
    heights: Vec<usize>,
    /// Current recursion depth of the descent.
    depth: usize,
    options: ParseOptions,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            tree: ParseTree::new(),
            heights: Vec::new(),
            depth: 0,
            options,
        }
    }

    /// Parse a complete program: a single expression followed by end of input.
    pub fn parse_program(mut self) -> PResult<ParseTree> {
        let root = self.parse_expr()?;

        if !self.at_end() {
            return Err(self.unexpected());
        }

        self.tree.set_root(root);
        tracing::trace!(nodes = self.tree.len(), "parsed expression");
        Ok(self.tree)
    }

    // ========== Expression Parsing ==========

    fn parse_expr(&mut self) -> PResult<ExprRef> {
        self.enter()?;
        let expr = self.parse_additive_expr();
        self.depth -= 1;
        expr
    }

    fn parse_additive_expr(&mut self) -> PResult<ExprRef> {
        let mut left = self.parse_multiplicative_expr()?;

        loop {
            let make: fn(ExprRef, ExprRef) -> ParsedKind = match self.current_kind() {
                TokenKind::Plus => |left, right| ParsedKind::Add { left, right },
                TokenKind::Minus => |left, right| ParsedKind::Subtract { left, right },
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative_expr()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(make(left, right), span)?;
        }

        Ok(left)
    }

    fn parse_multiplicative_expr(&mut self) -> PResult<ExprRef> {
        let mut left = self.parse_unary_expr()?;

        loop {
            let make: fn(ExprRef, ExprRef) -> ParsedKind = match self.current_kind() {
                TokenKind::Star => |left, right| ParsedKind::Multiply { left, right },
                TokenKind::Slash => |left, right| ParsedKind::Divide { left, right },
                _ => break,
            };
            self.advance();
            let right = self.parse_unary_expr()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(make(left, right), span)?;
        }

        Ok(left)
    }

    fn parse_unary_expr(&mut self) -> PResult<ExprRef> {
        let start = self.current_span();

        if self.eat(&TokenKind::Minus) {
            self.enter()?;
            let operand = self.parse_unary_expr();
            self.depth -= 1;
            let operand = operand?;
            let span = start.merge(self.span_of(operand));
            return self.alloc(ParsedKind::Negate { operand }, span);
        }

        self.parse_postfix_expr()
    }

    fn parse_postfix_expr(&mut self) -> PResult<ExprRef> {
        let mut expr = self.parse_primary_expr()?;

        while self.eat(&TokenKind::LParen) {
            let args = self.parse_args()?;
            self.expect(&TokenKind::RParen)?;
            let span = self.span_of(expr).merge(self.previous_span());
            expr = self.alloc(ParsedKind::Call { callee: expr, args }, span)?;
        }

        Ok(expr)
    }

    fn parse_primary_expr(&mut self) -> PResult<ExprRef> {
        let start = self.current_span();

        match self.current_kind().clone() {
            TokenKind::Number(n) => {
                self.advance();
                self.alloc(ParsedKind::Number(n), start)
            }
            TokenKind::Ident(_) => {
                self.advance();
                self.alloc(ParsedKind::Identifier { name: start }, start)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                let span = start.merge(self.previous_span());
                self.alloc(ParsedKind::Parens { inner }, span)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse call arguments up to (not including) the closing `)`.
    fn parse_args(&mut self) -> PResult<Vec<ExprRef>> {
        let mut args = Vec::new();

        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        Ok(args)
    }

    // ========== Tree Helpers ==========

    fn alloc(&mut self, kind: ParsedKind, span: Span) -> PResult<ExprRef> {
        let height = 1 + self.child_height(&kind);
        if height > self.options.max_depth {
            return Err(self.too_deep(span));
        }

        self.heights.push(height);
        Ok(self.tree.alloc(ParsedExpr::new(kind, span)))
    }

    fn child_height(&self, kind: &ParsedKind) -> usize {
        let height = |id: &ExprRef| self.heights[id.index()];
        match kind {
            ParsedKind::Number(_) | ParsedKind::Identifier { .. } => 0,
            ParsedKind::Add { left, right }
            | ParsedKind::Subtract { left, right }
            | ParsedKind::Multiply { left, right }
            | ParsedKind::Divide { left, right } => height(left).max(height(right)),
            ParsedKind::Negate { operand } => height(operand),
            ParsedKind::Parens { inner } => height(inner),
            ParsedKind::Call { callee, args } => args.iter().map(height).fold(height(callee), usize::max),
        }
    }

    fn span_of(&self, id: ExprRef) -> Span {
        self.tree.get(id).span
    }

    fn enter(&mut self) -> PResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            self.depth -= 1;
            return Err(self.too_deep(self.current_span()));
        }
        Ok(())
    }

    fn too_deep(&self, span: Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::NestingTooDeep {
                limit: self.options.max_depth,
            },
            span,
        )
    }

    // ========== Token Helpers ==========

    fn current(&self) -> &Token {
        // The lexer always terminates the stream with `Eof`, so the last
        // token is a valid fallback once `pos` runs past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> PResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Classify the current token as the reason parsing cannot continue.
    fn unexpected(&self) -> ParseError {
        let kind = match self.current_kind() {
            TokenKind::Eof => ParseErrorKind::MoreInputNeeded,
            TokenKind::Error => ParseErrorKind::InvalidToken,
            _ => ParseErrorKind::UnexpectedToken,
        };
        tracing::trace!(token = %self.current_kind(), ?kind, "parse stopped");
        ParseError::new(kind, self.current_span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_lexer::Lexer;

    fn parse(source: &str) -> PResult<ParseTree> {
        let (tokens, _) = Lexer::new(source).tokenize();
        Parser::new(tokens, ParseOptions::default()).parse_program()
    }

    fn root_kind(tree: &ParseTree) -> &ParsedKind {
        let root = tree.root().unwrap();
        &tree.get(root).kind
    }

    #[test]
    fn test_precedence_multiplication_binds_tighter() {
        let tree = parse("1 + 2 * 3").unwrap();
        match root_kind(&tree) {
            ParsedKind::Add { right, .. } => {
                assert!(matches!(tree.get(*right).kind, ParsedKind::Multiply { .. }));
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let tree = parse("8 - 4 - 2").unwrap();
        match root_kind(&tree) {
            ParsedKind::Subtract { left, right } => {
                assert!(matches!(tree.get(*left).kind, ParsedKind::Subtract { .. }));
                assert_eq!(tree.get(*right).kind, ParsedKind::Number(2.0));
            }
            other => panic!("expected subtract, got {:?}", other),
        }
    }

    #[test]
    fn test_call_spans_through_closing_paren() {
        let tree = parse("max(1, 2)").unwrap();
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root).span, Span::from_usize(0, 9));
        match &tree.get(root).kind {
            ParsedKind::Call { args, .. } => assert_eq!(args.len(), 2),
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_parens_span_includes_delimiters() {
        let tree = parse("2 * (3 + 4)").unwrap();
        match root_kind(&tree) {
            ParsedKind::Multiply { right, .. } => {
                assert_eq!(tree.get(*right).span, Span::from_usize(4, 11));
            }
            other => panic!("expected multiply, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input_is_unexpected() {
        let err = parse("1 2").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
        assert_eq!(err.span, Span::from_usize(2, 3));
    }

    #[test]
    fn test_missing_operand_needs_more_input() {
        let err = parse("1 + ").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MoreInputNeeded);
    }

    #[test]
    fn test_depth_limit() {
        let (tokens, _) = Lexer::new("((((1))))").tokenize();
        let err = Parser::new(tokens, ParseOptions { max_depth: 3 })
            .parse_program()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 3 });
    }
}
