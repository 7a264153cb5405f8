use crate::core::{Outcome, Pipeline};
use crate::utils::error::Result;

pub struct CalcEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CalcEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 對單行輸入依序執行三個階段，任一階段失敗即中止
    pub fn run(&self, line: &str) -> Result<Outcome> {
        tracing::debug!("Starting calculation for {:?}", line);

        // Tokenize
        let tokens = self.pipeline.tokenize(line)?;
        tracing::debug!(
            "Tokens: [{}, {}, {}]",
            tokens.lhs,
            tokens.rhs,
            tokens.operator
        );

        // Resolve
        let expression = self.pipeline.resolve(tokens)?;
        tracing::debug!("Numeral kind: {}", expression.kind);

        // Evaluate
        let outcome = self.pipeline.evaluate(expression)?;
        tracing::info!("✅ {} => {}", line.trim(), outcome);

        Ok(outcome)
    }
}
