//! Lexical analysis for tally.
//! tally 词法分析模块。
//!
//! This crate provides the lexer that converts expression source into tokens.
//! 本 crate 提供词法分析器，将表达式源码转换为 token 序列。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
