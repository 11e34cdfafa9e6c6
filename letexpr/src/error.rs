//! # Expression Error Types
//!
//! - [`LexError`]: failures while turning text into tokens,
//! - [`ParseError`]: the runtime's [`ParserError`] instantiated for this
//!   language,
//! - [`ExprError`]: either of the above, returned by [`parse_line`](crate::parse_line).
//!
//! Conversions are derived with `#[from]`, so `?` composes the stages.
use crate::Token;
use crate::parser::parser_data::TokenID;
use letexpr_rt::{ParserError, RtError, Span};
use smartstring::alias::String;
use thiserror::Error;

/// Syntax or internal failure reported by the parser.
pub type ParseError = ParserError<Token, TokenID>;

/// Represents the errors the lexer can report.
///
/// # Example
/// ```rust
/// # use letexpr::{LexError, tokenize_strict};
/// let err = tokenize_strict("1 # 2").unwrap_err();
/// assert!(matches!(err, LexError::UnexpectedChar { ch: '#', .. }));
/// ```
#[derive(Debug, Error)]
pub enum LexError {
    /// A character no rule recognizes.
    ///
    /// Only the strict tokenizer reports this; the lenient one stops there.
    #[error("unexpected character {ch:?} at {}", .span.display())]
    UnexpectedChar { ch: char, span: Span },

    /// A digit run that does not fit in an `i64`.
    #[error("invalid integer literal {text:?} at {}", .span.display())]
    IntLiteral {
        text: String,
        span: Span,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The lexer could not be set up.
    #[error("lexer error: {0}")]
    Internal(#[from] RtError),
}

/// Unified error for lexing followed by parsing.
#[derive(Debug, Error)]
pub enum ExprError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
