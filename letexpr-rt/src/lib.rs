//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Runtime for table-driven lexers and LALR(1) parsers.
//!
//! This crate is grammar-agnostic. A language crate supplies:
//! - lexical rules as regular expressions, compiled into a `regex-automata`
//!   dense DFA and driven by [`LexerCtx`] with maximal munch,
//! - precomputed action/goto tables through [`ParserData`],
//! - semantic actions through [`ParserDriver`],
//!
//! and [`Parser`] runs the shift-reduce loop, including one-shot recovery
//! through the grammar's `error` terminal.

mod error;
mod lexer;
mod parser;

pub use crate::error::{Position, RtError, Span};
pub use crate::lexer::{LexerCtx, LexerData, LexerStats, Token, build_dfa};
pub use crate::parser::{
    Lookahead, Parser, ParserAction, ParserData, ParserDriver, ParserError, ParserProdID,
    ParserStateID, ParserStats, ParserTokenID,
};
