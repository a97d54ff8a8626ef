use super::LineNumber;
use crate::mach::Val;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Cls,
    Goto(LineNumber),
    Input(Option<Expression>, Variable),
    Let(Variable, Expression),
    Print(Expression),
    Rem(Rc<str>),
}

/// A variable name, uppercased. A trailing `$` marks a string variable.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Variable(Rc<str>);

impl Variable {
    pub fn new(name: &str) -> Variable {
        Variable(name.to_ascii_uppercase().into())
    }

    pub fn name(&self) -> &Rc<str> {
        &self.0
    }

    pub fn is_string(&self) -> bool {
        self.0.ends_with('$')
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Val),
    Variable(Variable),
    Binary(Box<Expression>, BinaryOp, Box<Expression>),
    Grouping(Box<Expression>),
}

impl Expression {
    pub fn binary(lhs: Expression, op: BinaryOp, rhs: Expression) -> Expression {
        Expression::Binary(Box::new(lhs), op, Box::new(rhs))
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use BinaryOp::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expression::Literal(Val::String(s)) => write!(f, "\"{}\"", s),
            Expression::Literal(val) => write!(f, "{}", val),
            Expression::Variable(var) => write!(f, "{}", var),
            Expression::Binary(lhs, op, rhs) => write!(f, "{} {} {}", lhs, op, rhs),
            Expression::Grouping(expr) => write!(f, "({})", expr),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Cls => write!(f, "CLS"),
            Goto(line) => write!(f, "GOTO {}", line),
            Input(Some(prompt), var) => write!(f, "INPUT {}; {}", prompt, var),
            Input(None, var) => write!(f, "INPUT {}", var),
            Let(var, expr) => write!(f, "LET {} = {}", var, expr),
            Print(expr) => write!(f, "PRINT {}", expr),
            Rem(comment) if comment.is_empty() => write!(f, "REM"),
            Rem(comment) => write!(f, "REM {}", comment),
        }
    }
}
