//! Table-driven shift-reduce parsing.
//!
//! The automaton is described statically by a [`ParserData`] implementation
//! (generated LALR(1) action/goto tables), and the semantic side by a
//! [`ParserDriver`] that turns shifted tokens and reduced productions into
//! values. [`Parser`] runs the loop between the two.
//!
//! Error recovery is one-shot: the first `Error` action switches the session
//! into recovery and retries the same state with the grammar's `error`
//! terminal. If that terminal can be shifted, the offending lookahead is put
//! back and parsing continues; a second failure before a real token is
//! shifted is fatal.

use crate::error::RtError;
use crate::lexer::Token;
use smartstring::alias::String;
use std::fmt::{Debug, Write};
use std::mem;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP>
where
    US: ParserStateID,
    UP: ParserProdID,
{
    Error,
    Accept,
    Shift(US),
    Reduce(UP),
    Goto(US),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type TokenID: ParserTokenID;

    const COUNT: usize;

    fn label(&self) -> &'static str;

    /// Nonterminal on the left-hand side.
    fn lhs_token_id(&self) -> Self::TokenID;

    /// Number of right-hand side symbols.
    fn size(&self) -> usize;
}

/// Grammar symbols: nonterminals first, then terminals (ending with the end
/// marker), then the `error` terminal.
pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> + 'static {
    const COUNT_NONTERMINALS: usize;
    const COUNT_TERMINALS: usize;
    const COUNT: usize;

    const END: Self;
    const ERROR: Self;

    /// Real terminals in table order, including `END` but not `ERROR`.
    const TERMINALS: &'static [Self];

    fn label(&self) -> &'static str;
}

pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type ProdID: ParserProdID<TokenID = Self::TokenID>;

    fn start_state() -> Self::StateID;

    fn lookup(
        state_id: Self::StateID,
        token_id: Self::TokenID,
    ) -> ParserAction<Self::StateID, Self::ProdID>;
}

type StateID<D> = <<D as ParserDriver>::ParserData as ParserData>::StateID;
type TokenID<D> = <<D as ParserDriver>::ParserData as ParserData>::TokenID;
type ProdID<D> = <<D as ParserDriver>::ParserData as ParserData>::ProdID;
type Action<D> = ParserAction<StateID<D>, ProdID<D>>;

/// Semantic actions plugged into the engine.
pub trait ParserDriver {
    type ParserData: ParserData;
    type Token: Token<TokenID = <Self::ParserData as ParserData>::TokenID>;
    type Value: Debug;

    /// Value pushed when a real token is shifted.
    fn shift(&mut self, token: Self::Token) -> Self::Value;

    /// Value pushed when the `error` terminal is shifted. `token` is the
    /// lookahead that failed (`None` at end of input).
    fn error_marker(&mut self, token: Option<&Self::Token>) -> Self::Value;

    /// Builds the value of `prod_id` from its right-hand side values, given
    /// in left-to-right order.
    fn reduce(
        &mut self,
        prod_id: <Self::ParserData as ParserData>::ProdID,
        values: Vec<Self::Value>,
    ) -> Result<Self::Value, RtError>;
}

/// The symbol the engine is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookahead<T> {
    Token(T),
    End,
    Error,
}

impl<T> Lookahead<T>
where
    T: Token,
    T::TokenID: ParserTokenID,
{
    pub fn token_id(&self) -> T::TokenID {
        match self {
            Lookahead::Token(t) => t.token_id(),
            Lookahead::End => <T::TokenID as ParserTokenID>::END,
            Lookahead::Error => <T::TokenID as ParserTokenID>::ERROR,
        }
    }

    fn into_token(self) -> Option<T> {
        match self {
            Lookahead::Token(t) => Some(t),
            Lookahead::End | Lookahead::Error => None,
        }
    }
}

enum Recovery<S, T> {
    Normal,
    Recovering {
        state: S,
        position: usize,
        /// Lookahead to restore once `error` is shifted.
        pending: Option<Lookahead<T>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub recoveries: usize,
}

#[derive(Debug, Error)]
pub enum ParserError<T, K>
where
    T: Debug,
    K: ParserTokenID,
{
    #[error(
        "syntax error at token {position}: unexpected {}, expected one of: {}",
        describe(.token),
        labels(.expected)
    )]
    Syntax {
        /// `None` when the offending lookahead is the end of input.
        token: Option<T>,
        /// 0-based index of the offending token.
        position: usize,
        expected: Vec<K>,
    },

    #[error("internal parser error: {0}")]
    Internal(#[from] RtError),
}

fn describe<T: Debug>(token: &Option<T>) -> std::string::String {
    match token {
        Some(t) => format!("{t:?}"),
        None => "end of input".to_string(),
    }
}

fn labels<K: ParserTokenID>(expected: &[K]) -> std::string::String {
    expected
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The shift-reduce engine.
///
/// Owns its stacks so a single `Parser` can be reused across inputs; every
/// call to [`parse`](Parser::parse) starts from scratch.
pub struct Parser<D: ParserDriver> {
    pub driver: D,
    states: Vec<StateID<D>>,
    values: Vec<D::Value>,
    stats: ParserStats,
}

impl<D: ParserDriver> Parser<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            states: Vec::new(),
            values: Vec::new(),
            stats: ParserStats::default(),
        }
    }

    /// Statistics of the most recent parse.
    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Parses `tokens` to a single value.
    ///
    /// The end of the iterator is the end marker. The state stack always
    /// holds one more entry than the value stack: the start state has no
    /// value.
    pub fn parse<I>(&mut self, tokens: I) -> Result<D::Value, ParserError<D::Token, TokenID<D>>>
    where
        I: IntoIterator<Item = D::Token>,
    {
        self.states.clear();
        self.values.clear();
        self.stats = ParserStats::default();

        let mut tokens = tokens.into_iter();
        let mut position = 0;
        let mut lookahead = self.next_lookahead(&mut tokens);
        let mut recovery = Recovery::Normal;

        let mut state = D::ParserData::start_state();
        self.states.push(state);

        loop {
            if log::log_enabled!(log::Level::Trace) {
                self.dump_state(&lookahead);
            }

            match D::ParserData::lookup(state, lookahead.token_id()) {
                Action::<D>::Shift(new_state) => {
                    log::trace!("Shift {:?}", new_state);
                    let value = match mem::replace(&mut lookahead, Lookahead::End) {
                        Lookahead::Token(token) => {
                            let value = self.driver.shift(token);
                            recovery = Recovery::Normal;
                            position += 1;
                            lookahead = self.next_lookahead(&mut tokens);
                            value
                        }
                        Lookahead::Error => {
                            let Recovery::Recovering { pending, .. } = &mut recovery else {
                                return Err(RtError::new("error token outside recovery").into());
                            };
                            let saved = pending.take().unwrap_or(Lookahead::End);
                            let value = self.driver.error_marker(match &saved {
                                Lookahead::Token(t) => Some(t),
                                _ => None,
                            });
                            lookahead = saved;
                            value
                        }
                        Lookahead::End => {
                            return Err(RtError::new("shift on end of input").into());
                        }
                    };
                    self.values.push(value);
                    state = new_state;
                    self.states.push(state);
                    self.stats.shifts += 1;
                }

                Action::<D>::Reduce(prod_id) => {
                    let size = prod_id.size();
                    log::trace!("Reduce {:?}({})", prod_id, prod_id.label());
                    if size > self.values.len() {
                        return Err(RtError::new(format!(
                            "stack underflow reducing {}",
                            prod_id.label()
                        ))
                        .into());
                    }
                    let args = self.values.split_off(self.values.len() - size);
                    self.states.truncate(self.states.len() - size);
                    let value = self.driver.reduce(prod_id, args)?;

                    state = *self
                        .states
                        .last()
                        .ok_or_else(|| RtError::new("empty state stack"))?;
                    let lhs = prod_id.lhs_token_id();
                    let Action::<D>::Goto(new_state) = D::ParserData::lookup(state, lhs) else {
                        return Err(RtError::new(format!(
                            "missing goto from {:?} on {}",
                            state,
                            lhs.label()
                        ))
                        .into());
                    };
                    log::trace!("Goto {:?}", new_state);
                    state = new_state;
                    self.states.push(state);
                    self.values.push(value);
                    self.stats.reductions += 1;
                }

                Action::<D>::Accept => {
                    log::trace!("Accept");
                    if self.values.len() != 1 {
                        return Err(RtError::new(format!(
                            "accept with {} values on the stack",
                            self.values.len()
                        ))
                        .into());
                    }
                    return self
                        .values
                        .pop()
                        .ok_or_else(|| RtError::new("stack underflow").into());
                }

                Action::<D>::Error => {
                    if let Recovery::Recovering {
                        state: failed,
                        position,
                        pending,
                    } = mem::replace(&mut recovery, Recovery::Normal)
                    {
                        let token = pending.unwrap_or(lookahead);
                        log::debug!("Recovery failed in state {:?}", state);
                        return Err(ParserError::Syntax {
                            token: token.into_token(),
                            position,
                            expected: Self::expected(failed),
                        });
                    }
                    log::debug!(
                        "Error in state {:?} on {:?}, retrying with error token",
                        state,
                        lookahead
                    );
                    self.stats.recoveries += 1;
                    let saved = mem::replace(&mut lookahead, Lookahead::Error);
                    recovery = Recovery::Recovering {
                        state,
                        position,
                        pending: Some(saved),
                    };
                }

                Action::<D>::Goto(_) => {
                    return Err(RtError::new(format!(
                        "goto action on terminal in state {:?}",
                        state
                    ))
                    .into());
                }
            }
        }
    }

    /// Terminals with a non-error action in `state`, in table order.
    pub fn expected(state: StateID<D>) -> Vec<TokenID<D>> {
        <TokenID<D> as ParserTokenID>::TERMINALS
            .iter()
            .copied()
            .filter(|&t| !matches!(D::ParserData::lookup(state, t), Action::<D>::Error))
            .collect()
    }

    fn next_lookahead<I>(&mut self, tokens: &mut I) -> Lookahead<D::Token>
    where
        I: Iterator<Item = D::Token>,
    {
        match tokens.next() {
            Some(token) => {
                self.stats.tokens += 1;
                Lookahead::Token(token)
            }
            None => Lookahead::End,
        }
    }

    pub fn dump_state(&self, incoming: &Lookahead<D::Token>) {
        let mut output = String::new();
        let mut states = self.states.iter();
        if let Some(bottom) = states.next() {
            let _ = write!(output, "<{:?}>", bottom);
        }
        for (state, value) in states.zip(self.values.iter()) {
            let _ = write!(output, "  {:?}  <{:?}>", value, state);
        }
        let _ = write!(output, "  <-  {:?}", incoming);
        log::trace!("{}", output);
    }
}
