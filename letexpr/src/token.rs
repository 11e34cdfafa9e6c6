//! # Expression Tokens
//!
//! This module defines [`Token`], the lexical vocabulary of the expression
//! language. Tokens are produced by the lexer, consumed exactly once by the
//! parser, and map one-to-one onto the terminal symbols of the grammar via
//! [`Token::token_id`].
//!
//! [`Token`] implements [`Display`](std::fmt::Display) by rendering its
//! canonical source text, so lexing the rendering of a token yields the token
//! back.
use crate::parser::parser_data::TokenID;
use smartstring::alias::String;
use std::fmt;

/// A lexical token of the expression language.
///
/// Keyword and operator tokens carry no payload; integer literals carry their
/// value and identifiers their name.
///
/// # Example
/// ```rust
/// # use letexpr::{Token, TokenID};
/// let tok = Token::Var("x".into());
/// assert_eq!(tok.token_id(), TokenID::Var);
/// assert_eq!(tok.to_string(), "x");
///
/// let Token::Var(name) = tok else {
///     panic!("Expected an identifier");
/// };
/// assert_eq!(name.as_str(), "x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The `let` keyword.
    Let,
    /// The `in` keyword.
    In,
    /// Integer literal.
    Int(i64),
    /// Identifier.
    Var(String),
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Div,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `:=`
    Assign,
}

impl Token {
    /// Returns the grammar terminal this token stands for.
    pub fn token_id(&self) -> TokenID {
        match self {
            Token::Let => TokenID::Let,
            Token::In => TokenID::In,
            Token::Int(_) => TokenID::Int,
            Token::Var(_) => TokenID::Var,
            Token::Eq => TokenID::Eq,
            Token::Plus => TokenID::Plus,
            Token::Minus => TokenID::Minus,
            Token::Times => TokenID::Times,
            Token::Div => TokenID::Div,
            Token::OpenParen => TokenID::OpenParen,
            Token::CloseParen => TokenID::CloseParen,
            Token::Gt => TokenID::Gt,
            Token::Ge => TokenID::Ge,
            Token::Lt => TokenID::Lt,
            Token::Le => TokenID::Le,
            Token::Assign => TokenID::Assign,
        }
    }
}

impl letexpr_rt::Token for Token {
    type TokenID = TokenID;

    fn token_id(&self) -> Self::TokenID {
        Token::token_id(self)
    }
}

impl fmt::Display for Token {
    /// Writes the source text of the token. Negative `Int` values have no
    /// single-token source form and are written with a leading `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Int(n) => return write!(f, "{n}"),
            Token::Var(name) => return f.write_str(name),
            Token::Let => "let",
            Token::In => "in",
            Token::Eq => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Times => "*",
            Token::Div => "/",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Gt => ">",
            Token::Ge => ">=",
            Token::Lt => "<",
            Token::Le => "<=",
            Token::Assign => ":=",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letexpr_rt::ParserTokenID;

    #[test]
    fn token_ids_are_terminals() {
        let all = [
            Token::Let,
            Token::In,
            Token::Int(1),
            Token::Var("a".into()),
            Token::Eq,
            Token::Plus,
            Token::Minus,
            Token::Times,
            Token::Div,
            Token::OpenParen,
            Token::CloseParen,
            Token::Gt,
            Token::Ge,
            Token::Lt,
            Token::Le,
            Token::Assign,
        ];
        for t in &all {
            let id = t.token_id();
            assert!(TokenID::TERMINALS.contains(&id), "{t:?}");
            assert_ne!(id, TokenID::End);
            assert_ne!(id, TokenID::Error);
        }
        // one token kind per terminal other than the end marker
        assert_eq!(all.len(), TokenID::TERMINALS.len() - 1);
    }

    #[test]
    fn trait_and_inherent_token_id_agree() {
        let t = Token::Ge;
        assert_eq!(
            <Token as letexpr_rt::Token>::token_id(&t),
            Token::token_id(&t)
        );
    }

    #[test]
    fn display_renders_source_text() {
        assert_eq!(Token::Assign.to_string(), ":=");
        assert_eq!(Token::Le.to_string(), "<=");
        assert_eq!(Token::Int(42).to_string(), "42");
        assert_eq!(Token::Var("abc".into()).to_string(), "abc");
        assert_eq!(Token::Let.to_string(), "let");
    }

    #[test]
    #[should_panic(expected = "Expected an integer literal")]
    fn token_int_extraction_should_panic_if_not_int() {
        let tok = Token::Var("n".into());
        let Token::Int(_n) = tok else {
            panic!("Expected an integer literal");
        };
    }

    #[test]
    fn token_is_cloneable_and_debuggable() {
        let t1 = Token::Var("y".into());
        let t2 = t1.clone();
        assert_eq!(t1, t2);
        assert!(format!("{t1:?}").contains("Var"));
    }
}
