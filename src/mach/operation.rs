use super::Val;
use crate::error;
use crate::lang::ast::BinaryOp;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic on runtime values
///
/// Numbers are `f64` and follow IEEE-754, so dividing by zero
/// produces an infinity or NaN instead of an error.
/// Strings take no part in arithmetic, not even `+`.

pub struct Operation {}

impl Operation {
    pub fn binary(op: BinaryOp, lhs: Val, rhs: Val) -> Result<Val> {
        use BinaryOp::*;
        match op {
            Add => Operation::sum(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l + r))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l - r))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l * r))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l / r))
    }

    fn numbers(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
        match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => Ok((l, r)),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch() {
        let r = Operation::sum(Val::Number(1.0), Val::String("A".into()));
        assert_eq!(r, Err(error!(TypeMismatch)));
        let r = Operation::multiply(Val::String("A".into()), Val::String("B".into()));
        assert_eq!(r, Err(error!(TypeMismatch)));
    }

    #[test]
    fn test_strings_do_not_add() {
        let r = Operation::sum(Val::String("AB".into()), Val::String("CD".into()));
        assert_eq!(r, Err(error!(TypeMismatch)));
        let r = Operation::binary(BinaryOp::Add, Val::Number(1.0), Val::Number(2.0));
        assert_eq!(r, Ok(Val::Number(3.0)));
    }

    #[test]
    fn test_divide_by_zero() {
        let r = Operation::divide(Val::Number(1.0), Val::Number(0.0));
        assert_eq!(r, Ok(Val::Number(std::f64::INFINITY)));
        match Operation::divide(Val::Number(0.0), Val::Number(0.0)) {
            Ok(Val::Number(n)) => assert!(n.is_nan()),
            r => panic!("{:?}", r),
        }
    }
}
