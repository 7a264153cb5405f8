use crate::domain::model::Operator;
use crate::utils::error::{CalcError, Result};

/// 整數運算；除法向零截斷，除以零與溢位回傳 `Arithmetic`
pub fn apply(operator: Operator, lhs: i64, rhs: i64) -> Result<i64> {
    let result = match operator {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Subtract => lhs.checked_sub(rhs),
        Operator::Multiply => lhs.checked_mul(rhs),
        Operator::Divide => {
            if rhs == 0 {
                return Err(CalcError::arithmetic("/ by zero"));
            }
            lhs.checked_div(rhs)
        }
    };

    result.ok_or_else(|| {
        CalcError::arithmetic(format!("overflow in {} {} {}", lhs, operator, rhs))
    })
}
