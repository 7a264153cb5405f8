use crate::domain::model::{Expression, NumeralKind, Tokens};
use crate::utils::error::{CalcError, Result};

/// 以第一個運算元決定數字系統（先試阿拉伯再試羅馬，先找到者勝），
/// 第二個運算元必須屬於同一系統。
pub fn resolve(tokens: &Tokens) -> Result<Expression> {
    let (kind, lhs) = NumeralKind::ALL
        .iter()
        .find_map(|&kind| kind.lookup(&tokens.lhs).map(|numeral| (kind, numeral)))
        .ok_or_else(|| {
            CalcError::invalid_input(format!("'{}' is not a supported numeral", tokens.lhs))
        })?;

    let rhs = kind.lookup(&tokens.rhs).ok_or_else(|| {
        CalcError::invalid_input(format!(
            "'{}' is not one of the {} used by the first operand",
            tokens.rhs, kind
        ))
    })?;

    tracing::debug!(
        "Resolved {} operands: {} -> {}, {} -> {}",
        kind,
        tokens.lhs,
        lhs.ordinal(),
        tokens.rhs,
        rhs.ordinal()
    );

    Ok(Expression {
        kind,
        lhs,
        rhs,
        operator: tokens.operator,
    })
}
