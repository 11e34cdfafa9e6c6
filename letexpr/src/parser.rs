//! Expression parser: semantic actions over the generated LALR(1) tables.
//!
//! [`ExprParserDriver`] builds [`Expr`] nodes as the engine reduces
//! productions; [`ExprParser`] wraps the engine for reuse across inputs.

pub mod parser_data;

use crate::ast::Expr;
use crate::error::ParseError;
use crate::token::Token;
use letexpr_rt::{Parser, ParserDriver, ParserStats, RtError};
use parser_data::{ParData, ProdID};
use smartstring::alias::String;

/// An entry of the value stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A shifted terminal.
    Token(Token),
    /// A reduced subexpression.
    Expr(Expr),
    /// Pushed in place of the `error` terminal during recovery.
    ErrorMarker,
}

impl Value {
    fn into_expr(self) -> Result<Box<Expr>, RtError> {
        match self {
            Value::Expr(e) => Ok(Box::new(e)),
            v => Err(RtError::new(format!("invalid value: expected Expr, got {v:?}"))),
        }
    }

    fn into_name(self) -> Result<String, RtError> {
        match self {
            Value::Token(Token::Var(name)) => Ok(name),
            v => Err(RtError::new(format!("invalid value: expected var, got {v:?}"))),
        }
    }

    fn into_int(self) -> Result<i64, RtError> {
        match self {
            Value::Token(Token::Int(n)) => Ok(n),
            v => Err(RtError::new(format!("invalid value: expected int, got {v:?}"))),
        }
    }
}

fn take<const N: usize>(values: Vec<Value>) -> Result<[Value; N], RtError> {
    <[Value; N]>::try_from(values)
        .map_err(|v| RtError::new(format!("expected {N} values, got {}", v.len())))
}

fn binary(values: Vec<Value>) -> Result<(Box<Expr>, Box<Expr>), RtError> {
    let [lhs, _, rhs] = take(values)?;
    Ok((lhs.into_expr()?, rhs.into_expr()?))
}

/// Semantic actions for the expression grammar.
#[derive(Debug, Default)]
pub struct ExprParserDriver;

impl ParserDriver for ExprParserDriver {
    type ParserData = ParData;
    type Token = Token;
    type Value = Value;

    fn shift(&mut self, token: Token) -> Value {
        Value::Token(token)
    }

    fn error_marker(&mut self, token: Option<&Token>) -> Value {
        log::debug!("error marker for {:?}", token);
        Value::ErrorMarker
    }

    fn reduce(&mut self, prod_id: ProdID, values: Vec<Value>) -> Result<Value, RtError> {
        let expr = match prod_id {
            ProdID::Start => {
                // Start -> Expr
                // Accept - does not get reduced
                return Err(RtError::new("start production reduced"));
            }
            ProdID::Let => {
                // Expr -> let var = Expr in Expr
                let [_, name, _, bound, _, body] = take(values)?;
                Expr::Let(name.into_name()?, bound.into_expr()?, body.into_expr()?)
            }
            ProdID::Plus => {
                // Expr -> Expr + Expr
                let (lhs, rhs) = binary(values)?;
                Expr::Plus(lhs, rhs)
            }
            ProdID::Minus => {
                let (lhs, rhs) = binary(values)?;
                Expr::Minus(lhs, rhs)
            }
            ProdID::Times => {
                let (lhs, rhs) = binary(values)?;
                Expr::Times(lhs, rhs)
            }
            ProdID::Div => {
                let (lhs, rhs) = binary(values)?;
                Expr::Div(lhs, rhs)
            }
            ProdID::Ge => {
                let (lhs, rhs) = binary(values)?;
                Expr::Ge(lhs, rhs)
            }
            ProdID::Gt => {
                let (lhs, rhs) = binary(values)?;
                Expr::Gt(lhs, rhs)
            }
            ProdID::Le => {
                let (lhs, rhs) = binary(values)?;
                Expr::Le(lhs, rhs)
            }
            ProdID::Lt => {
                let (lhs, rhs) = binary(values)?;
                Expr::Lt(lhs, rhs)
            }
            ProdID::Assign => {
                // Expr -> var := Expr
                let [name, _, value] = take(values)?;
                Expr::Assign(name.into_name()?, value.into_expr()?)
            }
            ProdID::Bracket => {
                // Expr -> ( Expr )
                let [_, inner, _] = take(values)?;
                Expr::Bracket(inner.into_expr()?)
            }
            ProdID::Negate => {
                // Expr -> - Expr
                let [_, inner] = take(values)?;
                Expr::Negate(inner.into_expr()?)
            }
            ProdID::Int => {
                let [int] = take(values)?;
                Expr::IntLit(int.into_int()?)
            }
            ProdID::Var => {
                let [var] = take(values)?;
                Expr::Var(var.into_name()?)
            }
        };
        Ok(Value::Expr(expr))
    }
}

/// Reusable expression parser.
///
/// ```rust
/// # use letexpr::{ExprParser, Expr, tokenize};
/// let mut parser = ExprParser::new();
/// let expr = parser.parse(tokenize("-x").unwrap()).unwrap();
/// assert_eq!(expr, Expr::Negate(Box::new(Expr::Var("x".into()))));
/// assert_eq!(parser.stats().reductions, 2);
/// ```
pub struct ExprParser {
    parser: Parser<ExprParserDriver>,
}

impl ExprParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(ExprParserDriver),
        }
    }

    /// Parses one expression. No partial tree is returned on failure.
    pub fn parse<I>(&mut self, tokens: I) -> Result<Expr, ParseError>
    where
        I: IntoIterator<Item = Token>,
    {
        match self.parser.parse(tokens)? {
            Value::Expr(expr) => Ok(expr),
            v => Err(RtError::new(format!("parse produced {v:?}")).into()),
        }
    }

    /// Statistics of the most recent [`parse`](ExprParser::parse).
    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }
}

impl Default for ExprParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::parser_data::{StateID, TokenID};
    use super::*;
    use crate::{parse_line, tokenize};
    use letexpr_rt::{ParserAction, ParserData, ParserError, ParserStateID, ParserTokenID};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn p(input: &str) -> Expr {
        init_logger();
        parse_line(input).unwrap()
    }

    fn fail(input: &str) -> ParseError {
        init_logger();
        ExprParser::new().parse(tokenize(input).unwrap()).unwrap_err()
    }

    fn int(n: i64) -> Box<Expr> {
        Box::new(Expr::IntLit(n))
    }

    fn var(name: &str) -> Box<Expr> {
        Box::new(Expr::Var(name.into()))
    }

    fn b(e: Expr) -> Box<Expr> {
        Box::new(e)
    }

    #[test]
    fn golden_leaves() {
        assert_eq!(p("42"), Expr::IntLit(42));
        assert_eq!(p("x"), Expr::Var("x".into()));
    }

    #[test]
    fn golden_binary_operators() {
        assert_eq!(p("1 + 2"), Expr::Plus(int(1), int(2)));
        assert_eq!(p("1 - 2"), Expr::Minus(int(1), int(2)));
        assert_eq!(p("1 * 2"), Expr::Times(int(1), int(2)));
        assert_eq!(p("1 / 2"), Expr::Div(int(1), int(2)));
        assert_eq!(p("1 > 2"), Expr::Gt(int(1), int(2)));
        assert_eq!(p("1 >= 2"), Expr::Ge(int(1), int(2)));
        assert_eq!(p("1 < 2"), Expr::Lt(int(1), int(2)));
        assert_eq!(p("1 <= 2"), Expr::Le(int(1), int(2)));
    }

    #[test]
    fn golden_let_assign_bracket_negate() {
        assert_eq!(p("let x = 1 in x"), Expr::Let("x".into(), int(1), var("x")));
        assert_eq!(p("x := 5"), Expr::Assign("x".into(), int(5)));
        assert_eq!(p("(7)"), Expr::Bracket(int(7)));
        assert_eq!(p("-7"), Expr::Negate(int(7)));
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(
            p("2 + 3 * 4"),
            Expr::Plus(int(2), b(Expr::Times(int(3), int(4))))
        );
        assert_eq!(
            p("2 * 3 + 4"),
            Expr::Plus(b(Expr::Times(int(2), int(3))), int(4))
        );
    }

    #[test]
    fn additive_and_multiplicative_are_left_associative() {
        assert_eq!(
            p("8 - 3 - 2"),
            Expr::Minus(b(Expr::Minus(int(8), int(3))), int(2))
        );
        assert_eq!(
            p("8 / 4 * 2"),
            Expr::Times(b(Expr::Div(int(8), int(4))), int(2))
        );
    }

    #[test]
    fn let_nests_to_the_right() {
        assert_eq!(
            p("let x = 1 in let y = 2 in x + y"),
            Expr::Let(
                "x".into(),
                int(1),
                b(Expr::Let(
                    "y".into(),
                    int(2),
                    b(Expr::Plus(var("x"), var("y")))
                ))
            )
        );
    }

    #[test]
    fn let_body_extends_as_far_as_possible() {
        assert_eq!(
            p("let x = 1 + 2 in x * 2 - 1"),
            Expr::Let(
                "x".into(),
                b(Expr::Plus(int(1), int(2))),
                b(Expr::Minus(b(Expr::Times(var("x"), int(2))), int(1)))
            )
        );
        assert_eq!(
            p("let x = 1 in x < 2 + 3"),
            Expr::Let(
                "x".into(),
                int(1),
                b(Expr::Lt(var("x"), b(Expr::Plus(int(2), int(3)))))
            )
        );
    }

    #[test]
    fn negation_binds_tightest() {
        assert_eq!(p("-2 * 3"), Expr::Times(b(Expr::Negate(int(2))), int(3)));
        assert_eq!(p("2 - -3"), Expr::Minus(int(2), b(Expr::Negate(int(3)))));
        assert_eq!(p("- - 3"), Expr::Negate(b(Expr::Negate(int(3)))));
    }

    #[test]
    fn brackets_override_precedence() {
        assert_eq!(
            p("(1 + 2) * 3"),
            Expr::Times(b(Expr::Bracket(b(Expr::Plus(int(1), int(2))))), int(3))
        );
    }

    #[test]
    fn comparisons_take_arithmetic_operands() {
        assert_eq!(
            p("a + 1 >= b * 2"),
            Expr::Ge(
                b(Expr::Plus(var("a"), int(1))),
                b(Expr::Times(var("b"), int(2)))
            )
        );
    }

    #[test]
    fn assignment_value_is_arithmetic() {
        assert_eq!(
            p("x := 1 + 2"),
            Expr::Assign("x".into(), b(Expr::Plus(int(1), int(2))))
        );
        assert_eq!(
            p("x := y := 3"),
            Expr::Assign("x".into(), b(Expr::Assign("y".into(), int(3))))
        );
        assert_eq!(
            p("a < b := 3"),
            Expr::Lt(var("a"), b(Expr::Assign("b".into(), int(3))))
        );
    }

    #[test]
    fn chained_comparison_is_rejected() {
        let err = fail("a < b < c");
        let ParserError::Syntax {
            token,
            position,
            expected,
        } = err
        else {
            panic!("Expected a syntax error");
        };
        assert_eq!(token, Some(Token::Lt));
        assert_eq!(position, 3);
        assert_eq!(
            expected,
            vec![
                TokenID::In,
                TokenID::Plus,
                TokenID::Minus,
                TokenID::Times,
                TokenID::Div,
                TokenID::CloseParen,
                TokenID::End,
            ]
        );
        assert!(matches!(
            fail("1 >= 2 <= 3"),
            ParserError::Syntax { token: Some(Token::Le), .. }
        ));
        assert!(matches!(
            fail("x := 1 < 2"),
            ParserError::Syntax { token: Some(Token::Lt), position: 3, .. }
        ));
    }

    #[test]
    fn incomplete_input_fails_at_end() {
        let err = fail("2 + ");
        assert!(matches!(
            err,
            ParserError::Syntax { token: None, position: 2, ref expected }
                if expected == &vec![
                    TokenID::Let,
                    TokenID::Int,
                    TokenID::Var,
                    TokenID::Minus,
                    TokenID::OpenParen,
                ]
        ));

        let err = fail("(1");
        assert!(matches!(
            err,
            ParserError::Syntax { token: None, position: 2, ref expected }
                if expected.contains(&TokenID::CloseParen) && !expected.contains(&TokenID::End)
        ));
    }

    #[test]
    fn unexpected_token_is_reported() {
        let err = fail("1 2");
        assert!(matches!(
            err,
            ParserError::Syntax { token: Some(Token::Int(2)), position: 1, ref expected }
                if expected.len() == 11 && !expected.contains(&TokenID::Assign)
        ));
        assert!(matches!(
            fail("let in"),
            ParserError::Syntax { token: Some(Token::In), position: 1, ref expected }
                if expected == &vec![TokenID::Var]
        ));
        assert!(matches!(
            fail("let x = 1"),
            ParserError::Syntax { token: None, position: 4, .. }
        ));
        assert!(matches!(
            fail(")"),
            ParserError::Syntax { token: Some(Token::CloseParen), position: 0, .. }
        ));
    }

    #[test]
    fn empty_input_is_a_syntax_error() {
        let err = fail("");
        assert!(matches!(err, ParserError::Syntax { token: None, position: 0, .. }));
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn stats_reflect_the_last_parse() {
        init_logger();
        let mut parser = ExprParser::new();
        parser.parse(tokenize("2 + 3 * 4").unwrap()).unwrap();
        assert_eq!(
            parser.stats(),
            ParserStats {
                tokens: 5,
                shifts: 5,
                reductions: 5,
                recoveries: 0,
            }
        );
        assert!(parser.parse(tokenize("2 +").unwrap()).is_err());
        assert_eq!(parser.stats().recoveries, 1);
    }

    #[test]
    fn repeated_parses_are_identical() {
        init_logger();
        let tokens = tokenize("let a = 2 in a * (a - 1) >= 3").unwrap();
        let mut parser = ExprParser::new();
        let first = parser.parse(tokens.clone()).unwrap();
        assert!(parser.parse(tokenize("(").unwrap()).is_err());
        let second = parser.parse(tokens.clone()).unwrap();
        let third = ExprParser::default().parse(tokens).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn driver_rejects_wrong_values() {
        let mut driver = ExprParserDriver;
        let err = driver
            .reduce(ProdID::Var, vec![Value::Token(Token::Int(1))])
            .unwrap_err();
        assert!(err.message.contains("expected var"));
        let err = driver.reduce(ProdID::Plus, vec![]).unwrap_err();
        assert!(err.message.contains("expected 3 values"));
        assert!(driver.reduce(ProdID::Start, vec![]).is_err());
    }

    // Walks every state reachable from the start state.
    fn reachable() -> Vec<StateID> {
        let mut seen = vec![false; StateID::COUNT];
        let mut stack = vec![ParData::start_state()];
        let mut out = Vec::new();
        while let Some(state) = stack.pop() {
            let idx: usize = state.into();
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            out.push(state);
            for i in 0..TokenID::COUNT {
                let token = token_at(i);
                if let ParserAction::Shift(next) | ParserAction::Goto(next) =
                    ParData::lookup(state, token)
                {
                    stack.push(next);
                }
            }
        }
        out
    }

    fn token_at(i: usize) -> TokenID {
        if i < TokenID::COUNT_NONTERMINALS {
            [TokenID::Start, TokenID::Expr][i]
        } else if i < TokenID::COUNT - 1 {
            TokenID::TERMINALS[i - TokenID::COUNT_NONTERMINALS]
        } else {
            TokenID::ERROR
        }
    }

    #[test]
    fn token_ids_are_laid_out_in_table_order() {
        for i in 0..TokenID::COUNT {
            assert_eq!(usize::from(token_at(i)), i);
        }
        assert_eq!(TokenID::LABELS.len(), TokenID::COUNT);
    }

    #[test]
    fn every_state_is_reachable() {
        assert_eq!(reachable().len(), StateID::COUNT);
    }

    #[test]
    fn table_actions_fit_their_columns() {
        let mut accepts = 0;
        for state in reachable() {
            let mut live = 0;
            for i in 0..TokenID::COUNT {
                let token = token_at(i);
                let action = ParData::lookup(state, token);
                let nonterminal = i < TokenID::COUNT_NONTERMINALS;
                match action {
                    ParserAction::Goto(_) => assert!(nonterminal, "{state:?} {token:?}"),
                    ParserAction::Shift(_) => {
                        assert!(!nonterminal, "{state:?} {token:?}");
                        assert_ne!(token, TokenID::End, "{state:?} shifts the end marker");
                        live += 1;
                    }
                    ParserAction::Reduce(_) => {
                        assert!(!nonterminal, "{state:?} {token:?}");
                        live += 1;
                    }
                    ParserAction::Accept => {
                        assert_eq!(token, TokenID::End);
                        accepts += 1;
                        live += 1;
                    }
                    ParserAction::Error => {}
                }
                // no error productions in this grammar
                if token == TokenID::ERROR {
                    assert_eq!(action, ParserAction::Error);
                }
            }
            assert!(live > 0, "dead state {state:?}");
        }
        assert_eq!(accepts, 1);
    }

    #[test]
    fn productions_agree_with_their_metadata() {
        use letexpr_rt::ParserProdID;
        assert_eq!(ProdID::LABELS.len(), ProdID::COUNT);
        assert_eq!(ProdID::Start.lhs_token_id(), TokenID::Start);
        assert_eq!(ProdID::Let.size(), 6);
        assert_eq!(ProdID::Negate.size(), 2);
        assert_eq!(ProdID::Var.lhs_token_id(), TokenID::Expr);
        assert_eq!(ProdID::Assign.label(), "assign");
    }
}
