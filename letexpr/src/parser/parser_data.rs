//! LALR(1) tables for the `letexpr` grammar.
//!
//! Generated offline from `letexpr.g`; regenerate instead of editing by hand.
//!
//! ```text
//!  0  start:   Start -> Expr
//!  1  let:     Expr -> let var eq Expr in Expr
//!  2  plus:    Expr -> Expr plus Expr
//!  3  minus:   Expr -> Expr minus Expr
//!  4  times:   Expr -> Expr times Expr
//!  5  div:     Expr -> Expr div Expr
//!  6  ge:      Expr -> Expr ge Expr
//!  7  gt:      Expr -> Expr gt Expr
//!  8  le:      Expr -> Expr le Expr
//!  9  lt:      Expr -> Expr lt Expr
//! 10  assign:  Expr -> var assign Expr
//! 11  bracket: Expr -> openParen Expr closeParen
//! 12  negate:  Expr -> minus Expr   %prec NEG
//! 13  int:     Expr -> int
//! 14  var:     Expr -> var
//!
//! %right    in
//! %nonassoc gt ge lt le assign
//! %left     plus minus
//! %left     times div
//! %left     NEG
//! ```

use letexpr_rt::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);

impl ParserStateID for StateID {
    const COUNT: usize = 33;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    Start = 0,
    Let = 1,
    Plus = 2,
    Minus = 3,
    Times = 4,
    Div = 5,
    Ge = 6,
    Gt = 7,
    Le = 8,
    Lt = 9,
    Assign = 10,
    Bracket = 11,
    Negate = 12,
    Int = 13,
    Var = 14,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 15;

    fn label(&self) -> &'static str {
        ProdID::LABELS[Into::<usize>::into(*self)]
    }
    fn lhs_token_id(&self) -> Self::TokenID {
        ProdID::LHS_TOKENS[Into::<usize>::into(*self)]
    }
    fn size(&self) -> usize {
        ProdID::SIZES[Into::<usize>::into(*self)]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

impl ProdID {
    pub const LABELS: &'static [&'static str] = &[
        "start",   // 0
        "let",     // 1
        "plus",    // 2
        "minus",   // 3
        "times",   // 4
        "div",     // 5
        "ge",      // 6
        "gt",      // 7
        "le",      // 8
        "lt",      // 9
        "assign",  // 10
        "bracket", // 11
        "negate",  // 12
        "int",     // 13
        "var",     // 14
    ];

    pub const LHS_TOKENS: &'static [TokenID] = &[
        TokenID::Start,  // 0
        TokenID::Expr,   // 1
        TokenID::Expr,   // 2
        TokenID::Expr,   // 3
        TokenID::Expr,   // 4
        TokenID::Expr,   // 5
        TokenID::Expr,   // 6
        TokenID::Expr,   // 7
        TokenID::Expr,   // 8
        TokenID::Expr,   // 9
        TokenID::Expr,   // 10
        TokenID::Expr,   // 11
        TokenID::Expr,   // 12
        TokenID::Expr,   // 13
        TokenID::Expr,   // 14
    ];

    pub const SIZES: &'static [usize] = &[
        1,  // 0
        6,  // 1
        3,  // 2
        3,  // 3
        3,  // 4
        3,  // 5
        3,  // 6
        3,  // 7
        3,  // 8
        3,  // 9
        3,  // 10
        3,  // 11
        2,  // 12
        1,  // 13
        1,  // 14
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Expr = 1,

    // Terminals:
    Let = 2,
    In = 3,
    Int = 4,
    Var = 5,
    Eq = 6,
    Plus = 7,
    Minus = 8,
    Times = 9,
    Div = 10,
    OpenParen = 11,
    CloseParen = 12,
    Gt = 13,
    Ge = 14,
    Lt = 15,
    Le = 16,
    Assign = 17,
    End = 18,

    // Error:
    Error = 19,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 2;
    const COUNT_TERMINALS: usize = 17;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS + 1;

    const END: Self = TokenID::End;
    const ERROR: Self = TokenID::Error;

    const TERMINALS: &'static [Self] = &[
        TokenID::Let, TokenID::In, TokenID::Int, TokenID::Var, TokenID::Eq, TokenID::Plus,
        TokenID::Minus, TokenID::Times, TokenID::Div, TokenID::OpenParen, TokenID::CloseParen,
        TokenID::Gt, TokenID::Ge, TokenID::Lt, TokenID::Le, TokenID::Assign, TokenID::End,
    ];

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<TokenID> for usize {
    fn from(t: TokenID) -> Self {
        t as usize
    }
}

impl TokenID {
    pub const LABELS: &'static [&'static str] = &[
        "Start",       // 0
        "Expr",        // 1
        "let",         // 2
        "in",          // 3
        "int",         // 4
        "var",         // 5
        "eq",          // 6
        "plus",        // 7
        "minus",       // 8
        "times",       // 9
        "div",         // 10
        "openParen",   // 11
        "closeParen",  // 12
        "gt",          // 13
        "ge",          // 14
        "lt",          // 15
        "le",          // 16
        "assign",      // 17
        "end",         // 18
        "error",       // 19
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

use self::ProdID as P;

const E: Action = Action::Error;
const A: Action = Action::Accept;

const fn s(state: u8) -> Action {
    Action::Shift(StateID(state))
}

const fn g(state: u8) -> Action {
    Action::Goto(StateID(state))
}

const fn r(prod: ProdID) -> Action {
    Action::Reduce(prod)
}

pub struct ParData;

impl ParData {
    // Columns follow `TokenID` order:
    //   Start Expr | let in int var eq plus minus times div
    //   ( ) gt ge lt le assign end | error
    #[rustfmt::skip]
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /*  0 */ [E, g(1), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /*  1 */ [E, E, E, E, E, E, E, s(7), s(8), s(9), s(10),
                  E, E, s(11), s(12), s(13), s(14), E, A, E],
        /*  2 */ [E, E, E, E, E, s(15), E, E, E, E, E,
                  E, E, E, E, E, E, E, E, E],
        /*  3 */ [E, E, E, r(P::Int), E, E, E, r(P::Int), r(P::Int), r(P::Int), r(P::Int),
                  E, r(P::Int), r(P::Int), r(P::Int), r(P::Int), r(P::Int), E, r(P::Int), E],
        /*  4 */ [E, E, E, r(P::Var), E, E, E, r(P::Var), r(P::Var), r(P::Var), r(P::Var),
                  E, r(P::Var), r(P::Var), r(P::Var), r(P::Var), r(P::Var), s(16), r(P::Var), E],
        /*  5 */ [E, g(17), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /*  6 */ [E, g(18), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /*  7 */ [E, g(19), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /*  8 */ [E, g(20), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /*  9 */ [E, g(21), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 10 */ [E, g(22), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 11 */ [E, g(23), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 12 */ [E, g(24), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 13 */ [E, g(25), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 14 */ [E, g(26), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 15 */ [E, E, E, E, E, E, s(27), E, E, E, E,
                  E, E, E, E, E, E, E, E, E],
        /* 16 */ [E, g(28), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 17 */ [E, E, E, r(P::Negate), E, E, E, r(P::Negate), r(P::Negate), r(P::Negate), r(P::Negate),
                  E, r(P::Negate), r(P::Negate), r(P::Negate), r(P::Negate), r(P::Negate), E, r(P::Negate), E],
        /* 18 */ [E, E, E, E, E, E, E, s(7), s(8), s(9), s(10),
                  E, s(29), s(11), s(12), s(13), s(14), E, E, E],
        /* 19 */ [E, E, E, r(P::Plus), E, E, E, r(P::Plus), r(P::Plus), s(9), s(10),
                  E, r(P::Plus), r(P::Plus), r(P::Plus), r(P::Plus), r(P::Plus), E, r(P::Plus), E],
        /* 20 */ [E, E, E, r(P::Minus), E, E, E, r(P::Minus), r(P::Minus), s(9), s(10),
                  E, r(P::Minus), r(P::Minus), r(P::Minus), r(P::Minus), r(P::Minus), E, r(P::Minus), E],
        /* 21 */ [E, E, E, r(P::Times), E, E, E, r(P::Times), r(P::Times), r(P::Times), r(P::Times),
                  E, r(P::Times), r(P::Times), r(P::Times), r(P::Times), r(P::Times), E, r(P::Times), E],
        /* 22 */ [E, E, E, r(P::Div), E, E, E, r(P::Div), r(P::Div), r(P::Div), r(P::Div),
                  E, r(P::Div), r(P::Div), r(P::Div), r(P::Div), r(P::Div), E, r(P::Div), E],
        /* 23 */ [E, E, E, r(P::Gt), E, E, E, s(7), s(8), s(9), s(10),
                  E, r(P::Gt), E, E, E, E, E, r(P::Gt), E],
        /* 24 */ [E, E, E, r(P::Ge), E, E, E, s(7), s(8), s(9), s(10),
                  E, r(P::Ge), E, E, E, E, E, r(P::Ge), E],
        /* 25 */ [E, E, E, r(P::Lt), E, E, E, s(7), s(8), s(9), s(10),
                  E, r(P::Lt), E, E, E, E, E, r(P::Lt), E],
        /* 26 */ [E, E, E, r(P::Le), E, E, E, s(7), s(8), s(9), s(10),
                  E, r(P::Le), E, E, E, E, E, r(P::Le), E],
        /* 27 */ [E, g(30), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 28 */ [E, E, E, r(P::Assign), E, E, E, s(7), s(8), s(9), s(10),
                  E, r(P::Assign), E, E, E, E, E, r(P::Assign), E],
        /* 29 */ [E, E, E, r(P::Bracket), E, E, E, r(P::Bracket), r(P::Bracket), r(P::Bracket), r(P::Bracket),
                  E, r(P::Bracket), r(P::Bracket), r(P::Bracket), r(P::Bracket), r(P::Bracket), E, r(P::Bracket), E],
        /* 30 */ [E, E, E, s(31), E, E, E, s(7), s(8), s(9), s(10),
                  E, E, s(11), s(12), s(13), s(14), E, E, E],
        /* 31 */ [E, g(32), s(2), E, s(3), s(4), E, E, s(5), E, E,
                  s(6), E, E, E, E, E, E, E, E],
        /* 32 */ [E, E, E, r(P::Let), E, E, E, s(7), s(8), s(9), s(10),
                  E, r(P::Let), s(11), s(12), s(13), s(14), E, r(P::Let), E],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> Self::StateID {
        StateID(0)
    }

    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
    }
}
