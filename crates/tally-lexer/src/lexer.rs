//! The tally lexer.
//! tally 词法分析器。

use crate::token::{Token, TokenKind};
use logos::Logos;
use tally_common::Span;
use tally_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// Raw token produced by logos before it is mapped onto [`TokenKind`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
}

fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// The tally lexer.
/// tally 词法分析器。
///
/// Converts expression source into a sequence of tokens terminated by
/// [`TokenKind::Eof`]. Unrecognised input becomes a [`TokenKind::Error`]
/// token together with a diagnostic, so the parser decides when to stop.
pub struct Lexer<'src> {
    source: &'src str,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut raw = RawToken::lexer(self.source);

        while let Some(result) = raw.next() {
            let span = Span::from(raw.span());
            let kind = match result {
                Ok(RawToken::Number(n)) => TokenKind::Number(n),
                Ok(RawToken::Ident) => TokenKind::Ident(raw.slice().to_string()),
                Ok(RawToken::LParen) => TokenKind::LParen,
                Ok(RawToken::RParen) => TokenKind::RParen,
                Ok(RawToken::Comma) => TokenKind::Comma,
                Ok(RawToken::Plus) => TokenKind::Plus,
                Ok(RawToken::Minus) => TokenKind::Minus,
                Ok(RawToken::Star) => TokenKind::Star,
                Ok(RawToken::Slash) => TokenKind::Slash,
                Err(()) => {
                    self.error_invalid_token(raw.slice(), span);
                    TokenKind::Error
                }
            };
            tokens.push(Token::new(kind, span));
        }

        let end = self.source.len();
        tokens.push(Token::new(TokenKind::Eof, Span::point(end)));

        (tokens, self.diagnostics)
    }

    fn error_invalid_token(&mut self, text: &str, span: Span) {
        self.diagnostics.push(
            Diagnostic::from_code(
                DiagnosticKind::Lexer,
                ErrorCode::InvalidToken,
                span,
                format!("invalid token `{}`", text),
            )
            .with_label(Label::new(span, "not part of an arithmetic expression")),
        );
    }
}
