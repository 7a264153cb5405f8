pub mod engine;
pub mod evaluator;
pub mod pipeline;
pub mod resolver;
pub mod roman;
pub mod tokenizer;

pub use crate::domain::model::{Expression, Numeral, NumeralKind, Operator, Outcome, Tokens};
pub use crate::domain::ports::{ConfigProvider, InputSource, OutputFormat, Pipeline};
pub use crate::utils::error::Result;
