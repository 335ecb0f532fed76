//! Binary operator dispatch.

use crate::core::MathFault;

/// The five binary operators a keypad calculator folds left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Remainder (%), sign follows the dividend
    Modulo,
}

impl BinaryOp {
    /// Returns the operator glyph for the pending-operand display line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Folds two operands, guarding the one fault a binary op can raise.
    ///
    /// Modulo is the floating remainder (`lhs % rhs`), not mathematical
    /// modulo; remainder by zero yields NaN rather than a fault, which
    /// downstream parsing treats as an unusable operand.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, MathFault> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(MathFault::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Modulo => Ok(lhs % rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Symbol tests =====

    #[test]
    fn test_symbol_add() {
        assert_eq!(BinaryOp::Add.symbol(), "+");
    }

    #[test]
    fn test_symbol_subtract() {
        assert_eq!(BinaryOp::Subtract.symbol(), "-");
    }

    #[test]
    fn test_symbol_multiply() {
        assert_eq!(BinaryOp::Multiply.symbol(), "×");
    }

    #[test]
    fn test_symbol_divide() {
        assert_eq!(BinaryOp::Divide.symbol(), "÷");
    }

    #[test]
    fn test_symbol_modulo() {
        assert_eq!(BinaryOp::Modulo.symbol(), "%");
    }

    // ===== Apply tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), Ok(5.0));
    }

    #[test]
    fn test_apply_subtract_to_negative() {
        assert_eq!(BinaryOp::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(BinaryOp::Multiply.apply(6.0, 7.0), Ok(42.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(BinaryOp::Divide.apply(12.0, 4.0), Ok(3.0));
    }

    #[test]
    fn test_apply_divide_by_zero_faults() {
        assert_eq!(
            BinaryOp::Divide.apply(8.0, 0.0),
            Err(MathFault::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_divide_negative_zero_faults() {
        // -0.0 == 0.0 in IEEE comparison, so it is the same fault
        assert_eq!(
            BinaryOp::Divide.apply(8.0, -0.0),
            Err(MathFault::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_zero_dividend() {
        assert_eq!(BinaryOp::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_apply_modulo() {
        assert_eq!(BinaryOp::Modulo.apply(7.0, 3.0), Ok(1.0));
    }

    #[test]
    fn test_apply_modulo_sign_follows_dividend() {
        // Remainder semantics, not mathematical modulo
        let result = BinaryOp::Modulo.apply(-7.0, 3.0).unwrap();
        assert!((result - -1.0).abs() < 1e-12);
        let result = BinaryOp::Modulo.apply(7.0, -3.0).unwrap();
        assert!((result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_modulo_by_zero_is_nan() {
        let result = BinaryOp::Modulo.apply(7.0, 0.0).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_apply_fractional_modulo() {
        let result = BinaryOp::Modulo.apply(5.5, 2.0).unwrap();
        assert!((result - 1.5).abs() < 1e-12);
    }
}
