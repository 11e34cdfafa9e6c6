//! Abstract syntax tree produced by the parser.
use smartstring::alias::String;

/// An expression.
///
/// Every node owns its children; trees are built bottom-up by the parser and
/// never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `let name = bound in body`
    Let(String, Box<Expr>, Box<Expr>),
    Plus(Box<Expr>, Box<Expr>),
    Minus(Box<Expr>, Box<Expr>),
    Times(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Gt(Box<Expr>, Box<Expr>),
    Ge(Box<Expr>, Box<Expr>),
    Lt(Box<Expr>, Box<Expr>),
    Le(Box<Expr>, Box<Expr>),
    /// `( inner )`, kept as a node of its own.
    Bracket(Box<Expr>),
    /// Unary minus.
    Negate(Box<Expr>),
    IntLit(i64),
    Var(String),
    /// `name := value`
    Assign(String, Box<Expr>),
}
