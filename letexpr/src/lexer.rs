//! Maximal-munch lexer for expression text.
//!
//! Each rule is a regular expression; all of them are compiled into one DFA on
//! first use and shared afterwards. Identifiers are a single rule and are
//! classified into `let`, `in` or a variable name after matching.

use crate::Token;
use crate::error::LexError;
use letexpr_rt::{LexerCtx, LexerData, LexerStats, RtError, Span, build_dfa};
use once_cell::sync::Lazy;
use regex_automata::dfa::dense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Whitespace,
    Ident,
    Int,
    Assign,
    Ge,
    Le,
    Eq,
    Plus,
    Minus,
    Times,
    Div,
    OpenParen,
    CloseParen,
    Gt,
    Lt,
}

/// Rules in DFA pattern order.
const RULES: [(Rule, &str); 15] = [
    (Rule::Whitespace, r"\s+"),
    (Rule::Ident, r"\p{Alphabetic}+"),
    (Rule::Int, r"[0-9]+"),
    (Rule::Assign, ":="),
    (Rule::Ge, ">="),
    (Rule::Le, "<="),
    (Rule::Eq, "="),
    (Rule::Plus, r"\+"),
    (Rule::Minus, "-"),
    (Rule::Times, r"\*"),
    (Rule::Div, "/"),
    (Rule::OpenParen, r"\("),
    (Rule::CloseParen, r"\)"),
    (Rule::Gt, ">"),
    (Rule::Lt, "<"),
];

static DFA: Lazy<Result<dense::DFA<Vec<u32>>, RtError>> =
    Lazy::new(|| build_dfa(&RULES.map(|(_, pattern)| pattern)));

pub struct LexData;

impl LexerData for LexData {
    type LexerRule = Rule;

    fn dfa() -> Result<&'static dense::DFA<Vec<u32>>, RtError> {
        DFA.as_ref().map_err(Clone::clone)
    }

    #[inline]
    fn lookup(pattern_id: usize) -> Rule {
        RULES[pattern_id].0
    }
}

/// Token stream over one input string.
///
/// ```rust
/// # use letexpr::{ExprLexer, Token};
/// let mut lexer = ExprLexer::new("x:=1");
/// assert_eq!(lexer.try_next().unwrap(), Some(Token::Var("x".into())));
/// assert_eq!(lexer.try_next().unwrap(), Some(Token::Assign));
/// assert_eq!(lexer.try_next().unwrap(), Some(Token::Int(1)));
/// assert_eq!(lexer.try_next().unwrap(), None);
/// ```
pub struct ExprLexer<'a> {
    ctx: LexerCtx<'a, LexData>,
}

impl<'a> ExprLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            ctx: LexerCtx::new(input),
        }
    }

    /// Returns the next token, `None` at the end of input, or
    /// [`LexError::UnexpectedChar`] when no rule matches the next character.
    pub fn try_next(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(rule) = self.ctx.try_match()? else {
                return match self.ctx.rest().chars().next() {
                    None => Ok(None),
                    Some(ch) => {
                        let start = self.ctx.position();
                        let mut end = start;
                        end.advance(ch.encode_utf8(&mut [0; 4]).as_bytes());
                        Err(LexError::UnexpectedChar {
                            ch,
                            span: Span::new(start, end),
                        })
                    }
                };
            };
            let lexeme = self.ctx.lexeme();
            let token = match rule {
                Rule::Whitespace => continue,
                Rule::Ident => match lexeme {
                    "let" => Token::Let,
                    "in" => Token::In,
                    name => Token::Var(name.into()),
                },
                Rule::Int => {
                    Token::Int(lexeme.parse().map_err(|source| LexError::IntLiteral {
                        text: lexeme.into(),
                        span: self.ctx.span(),
                        source,
                    })?)
                }
                Rule::Assign => Token::Assign,
                Rule::Ge => Token::Ge,
                Rule::Le => Token::Le,
                Rule::Eq => Token::Eq,
                Rule::Plus => Token::Plus,
                Rule::Minus => Token::Minus,
                Rule::Times => Token::Times,
                Rule::Div => Token::Div,
                Rule::OpenParen => Token::OpenParen,
                Rule::CloseParen => Token::CloseParen,
                Rule::Gt => Token::Gt,
                Rule::Lt => Token::Lt,
            };
            return Ok(Some(token));
        }
    }

    pub fn stats(&self) -> LexerStats {
        self.ctx.stats()
    }
}

/// Tokenizes `input`, stopping silently at the first unrecognized character.
///
/// The tokens before that character are returned. Integer literals that do
/// not fit in an `i64` are still an error.
///
/// ```rust
/// # use letexpr::{tokenize, Token};
/// assert_eq!(tokenize("1 + ? 2").unwrap(), vec![Token::Int(1), Token::Plus]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = ExprLexer::new(input);
    let mut tokens = Vec::new();
    loop {
        match lexer.try_next() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(LexError::UnexpectedChar { ch, span }) => {
                log::debug!(
                    "stopping at unexpected character {:?} at {}",
                    ch,
                    span.display()
                );
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(tokens)
}

/// Tokenizes `input`, failing on the first unrecognized character.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = ExprLexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.try_next()? {
        tokens.push(token);
    }
    Ok(tokens)
}
