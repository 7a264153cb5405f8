use crate::domain::model::{Operator, Tokens};
use crate::utils::error::{CalcError, Result};

/// 轉大寫並移除所有空白（前後與中間）
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// 依 + - * / 的順序找第一個出現位置大於 0 的運算子。
/// 位置 0 的運算子（例如開頭的負號）不算，繼續找下一個。
pub fn find_operator(normalized: &str) -> Option<Operator> {
    Operator::SCAN_ORDER.iter().copied().find(|op| {
        normalized
            .find(op.symbol())
            .map(|index| index > 0)
            .unwrap_or(false)
    })
}

pub fn tokenize(raw: &str) -> Result<Tokens> {
    if raw.is_empty() {
        return Err(CalcError::invalid_input("input is empty"));
    }

    let normalized = normalize(raw);
    tracing::debug!("Normalized input: {:?}", normalized);

    let operator = find_operator(&normalized)
        .ok_or_else(|| CalcError::invalid_input("no operator found after the first operand"))?;
    tracing::debug!("Selected operator: {}", operator);

    let parts: Vec<&str> = normalized.split(operator.symbol()).collect();
    match parts.as_slice() {
        [lhs, rhs] if !lhs.is_empty() && !rhs.is_empty() => Ok(Tokens {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            operator,
        }),
        [_, rhs] if rhs.is_empty() => Err(CalcError::invalid_input(format!(
            "missing second operand after '{}'",
            operator
        ))),
        _ => Err(CalcError::invalid_input(format!(
            "expected exactly two operands around '{}', found {}",
            operator,
            parts.len()
        ))),
    }
}
