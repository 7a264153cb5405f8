use crate::core::{evaluator, resolver, roman, tokenizer};
use crate::core::{Expression, NumeralKind, Outcome, Pipeline, Tokens};
use crate::utils::error::Result;

/// 預設管線：分詞 -> 數字解析 -> 計算（羅馬模式再格式化）
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPipeline;

impl StandardPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl Pipeline for StandardPipeline {
    fn tokenize(&self, line: &str) -> Result<Tokens> {
        tokenizer::tokenize(line)
    }

    fn resolve(&self, tokens: Tokens) -> Result<Expression> {
        resolver::resolve(&tokens)
    }

    fn evaluate(&self, expression: Expression) -> Result<Outcome> {
        let value = evaluator::apply(
            expression.operator,
            expression.lhs.ordinal(),
            expression.rhs.ordinal(),
        )?;
        tracing::debug!(
            "Evaluated {} {} {} = {}",
            expression.lhs.ordinal(),
            expression.operator,
            expression.rhs.ordinal(),
            value
        );

        match expression.kind {
            NumeralKind::Arabic => Ok(Outcome::Arabic(value)),
            NumeralKind::Roman => Ok(Outcome::Roman {
                value,
                numeral: roman::to_roman(value)?,
            }),
        }
    }
}
