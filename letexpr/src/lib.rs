//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # letexpr
//!
//! Lexer and LALR(1) parser for a small single-line expression language with
//! integer arithmetic, comparisons, `let ... in ...` bindings and `:=`
//! assignment. Built on the `letexpr-rt` runtime.
//!
//! ## Overview
//!
//! - [`lexer`] — maximal-munch tokenizer producing [`Token`]s,
//! - [`parser`] — semantic actions over the generated tables, producing an
//!   [`Expr`],
//! - [`ast`] — the [`Expr`] tree,
//! - [`token`] — the token vocabulary,
//! - [`error`] — [`LexError`], [`ParseError`] and [`ExprError`].
//!
//! Operator precedence, loosest first: `in` (right), `< > <= >= :=`
//! (non-associative), `+ -` (left), `* /` (left), unary `-`.
//!
//! ## Example
//!
//! ```rust
//! use letexpr::{Expr, parse_line};
//!
//! let expr = parse_line("2 + 3 * 4").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::Plus(
//!         Box::new(Expr::IntLit(2)),
//!         Box::new(Expr::Times(Box::new(Expr::IntLit(3)), Box::new(Expr::IntLit(4)))),
//!     )
//! );
//!
//! // comparisons do not chain
//! assert!(parse_line("a < b < c").is_err());
//! ```
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::Expr;
pub use error::{ExprError, LexError, ParseError};
pub use lexer::{ExprLexer, tokenize, tokenize_strict};
pub use parser::parser_data::{ProdID, TokenID};
pub use parser::{ExprParser, ExprParserDriver};
pub use token::Token;

/// Parses a token sequence with a fresh [`ExprParser`].
pub fn parse<I>(tokens: I) -> Result<Expr, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    ExprParser::new().parse(tokens)
}

/// Tokenizes (strictly) and parses one line.
///
/// ```rust
/// # use letexpr::{ExprError, parse_line};
/// assert!(matches!(parse_line("1 + $"), Err(ExprError::Lex(_))));
/// assert!(matches!(parse_line("1 +"), Err(ExprError::Parse(_))));
/// ```
pub fn parse_line(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize_strict(input)?;
    Ok(parse(tokens)?)
}
