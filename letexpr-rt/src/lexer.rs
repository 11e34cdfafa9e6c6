//! Maximal-munch lexing on top of `regex-automata` dense DFAs.
//!
//! A language crate describes its lexical rules through [`LexerData`]: one
//! regular expression per rule, compiled once into an anchored DFA with
//! [`build_dfa`]. [`LexerCtx`] walks that DFA over the remaining input, keeps
//! the longest match it has seen, and reports the rule that produced it.

use crate::error::{Position, RtError, Span};
use regex_automata::{
    Anchored, HalfMatch, Input, MatchKind,
    dfa::{Automaton, StartKind, dense},
};
use std::fmt::Debug;
use std::marker::PhantomData;

/// A token as seen by the parsing engine.
pub trait Token: Clone + Debug {
    type TokenID: Copy + Debug + Into<usize>;

    fn token_id(&self) -> Self::TokenID;
}

/// Static description of a lexer: its compiled DFA and the mapping from DFA
/// pattern ids back to rules.
pub trait LexerData {
    type LexerRule: Copy + Debug;

    fn dfa() -> Result<&'static dense::DFA<Vec<u32>>, RtError>;

    fn lookup(pattern_id: usize) -> Self::LexerRule;
}

/// Compiles `patterns` into a single anchored DFA.
///
/// Pattern `i` of the slice becomes DFA pattern id `i`. All matches are
/// tracked so the caller can pick the longest one.
pub fn build_dfa(patterns: &[&str]) -> Result<dense::DFA<Vec<u32>>, RtError> {
    dense::Builder::new()
        .configure(
            dense::DFA::config()
                .match_kind(MatchKind::All)
                .start_kind(StartKind::Anchored),
        )
        .build_many(patterns)
        .map_err(|e| RtError::from_err(e, None))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Input bytes fed to the DFA.
    pub chars: usize,
    /// Match attempts.
    pub matches: usize,
    /// Bytes examined past the end of the accepted lexeme.
    pub unreads: usize,
}

/// Cursor over one input string.
///
/// Each successful [`try_match`](LexerCtx::try_match) consumes the longest
/// prefix of the remaining input recognized by any rule; [`lexeme`] and
/// [`span`] then describe that prefix.
///
/// [`lexeme`]: LexerCtx::lexeme
/// [`span`]: LexerCtx::span
pub struct LexerCtx<'a, D: LexerData> {
    input: &'a str,
    start: usize,
    offset: usize,
    start_position: Position,
    position: Position,
    stats: LexerStats,
    _data: PhantomData<D>,
}

impl<'a, D: LexerData> LexerCtx<'a, D> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            offset: 0,
            start_position: Position::default(),
            position: Position::default(),
            stats: LexerStats::default(),
            _data: PhantomData,
        }
    }

    /// Matches the longest rule at the current offset.
    ///
    /// Returns `Ok(None)` without consuming anything when the input is
    /// exhausted or when no rule matches here; the two cases are told apart
    /// by [`rest`](LexerCtx::rest).
    pub fn try_match(&mut self) -> Result<Option<D::LexerRule>, RtError> {
        let rest = &self.input.as_bytes()[self.offset..];
        if rest.is_empty() {
            return Ok(None);
        }
        self.stats.matches += 1;

        let dfa = D::dfa()?;
        let mut state = dfa
            .start_state_forward(&Input::new(rest).anchored(Anchored::Yes))
            .map_err(|e| RtError::from_err(e, Some(self.here())))?;
        let mut last_match: Option<HalfMatch> = None;
        let mut i = 0;

        while i < rest.len() {
            let b = rest[i];
            state = dfa.next_state(state, b);
            self.stats.chars += 1;
            if dfa.is_special_state(state) {
                if dfa.is_match_state(state) {
                    log::trace!(
                        "MATCH: i={}, b={:?}, p={}, s={}",
                        i,
                        b as char,
                        dfa.match_pattern(state, 0).as_usize(),
                        state.as_usize()
                    );
                    last_match = Some(HalfMatch::new(dfa.match_pattern(state, 0), i));
                } else if dfa.is_dead_state(state) || dfa.is_quit_state(state) {
                    log::trace!(
                        "DEAD: i={}, scanned={:?}, s={}",
                        i,
                        match std::str::from_utf8(&rest[..=i]) {
                            Ok(s) => s.to_string(),
                            Err(_) => hex::encode(&rest[..=i]),
                        },
                        state.as_usize()
                    );
                    break;
                }
            }
            i += 1;
        }
        let scanned = if i < rest.len() { i + 1 } else { i };

        if i == rest.len() {
            let eoi = dfa.next_eoi_state(state);
            if dfa.is_match_state(eoi) {
                last_match = Some(HalfMatch::new(dfa.match_pattern(eoi, 0), i));
            }
        }

        let Some(m) = last_match else {
            return Ok(None);
        };
        let len = m.offset();
        self.stats.unreads += scanned - len;

        let end = self.offset + len;
        let Some(lexeme) = self.input.get(self.offset..end) else {
            return Err(RtError::new("match does not end on a character boundary")
                .with_span(Some(self.here())));
        };
        self.start = self.offset;
        self.start_position = self.position;
        self.position.advance(lexeme.as_bytes());
        self.offset = end;

        let rule = D::lookup(m.pattern().as_usize());
        log::trace!(
            "MATCHED: rule={:?}, pattern={}, lexeme={:?}",
            rule,
            m.pattern().as_usize(),
            lexeme
        );
        Ok(Some(rule))
    }

    /// Text of the most recent match.
    pub fn lexeme(&self) -> &'a str {
        &self.input[self.start..self.offset]
    }

    /// Source span of the most recent match.
    pub fn span(&self) -> Span {
        Span::new(self.start_position, self.position)
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Current position (start of the unconsumed input).
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> LexerStats {
        self.stats.clone()
    }

    fn here(&self) -> Span {
        Span::new(self.position, self.position)
    }
}
