use serde::{Deserialize, Serialize};
use std::fmt;

/// 數字系統。`ALL` 的順序即解析順序：先阿拉伯數字，再羅馬數字。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralKind {
    Arabic,
    Roman,
}

impl NumeralKind {
    pub const ALL: [NumeralKind; 2] = [NumeralKind::Arabic, NumeralKind::Roman];

    /// 在本系統的數字表中尋找完全相符的符號
    pub fn lookup(self, token: &str) -> Option<Numeral> {
        Numeral::ALL
            .iter()
            .copied()
            .find(|numeral| numeral.symbol(self) == token)
    }
}

impl fmt::Display for NumeralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralKind::Arabic => write!(f, "Arabic numerals"),
            NumeralKind::Roman => write!(f, "Roman numerals"),
        }
    }
}

/// 允許的運算元：序數 1 到 10
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Numeral {
    pub const ALL: [Numeral; 10] = [
        Numeral::One,
        Numeral::Two,
        Numeral::Three,
        Numeral::Four,
        Numeral::Five,
        Numeral::Six,
        Numeral::Seven,
        Numeral::Eight,
        Numeral::Nine,
        Numeral::Ten,
    ];

    pub fn ordinal(self) -> i64 {
        match self {
            Numeral::One => 1,
            Numeral::Two => 2,
            Numeral::Three => 3,
            Numeral::Four => 4,
            Numeral::Five => 5,
            Numeral::Six => 6,
            Numeral::Seven => 7,
            Numeral::Eight => 8,
            Numeral::Nine => 9,
            Numeral::Ten => 10,
        }
    }

    pub fn symbol(self, kind: NumeralKind) -> &'static str {
        match kind {
            NumeralKind::Arabic => self.arabic(),
            NumeralKind::Roman => self.roman(),
        }
    }

    pub fn arabic(self) -> &'static str {
        match self {
            Numeral::One => "1",
            Numeral::Two => "2",
            Numeral::Three => "3",
            Numeral::Four => "4",
            Numeral::Five => "5",
            Numeral::Six => "6",
            Numeral::Seven => "7",
            Numeral::Eight => "8",
            Numeral::Nine => "9",
            Numeral::Ten => "10",
        }
    }

    pub fn roman(self) -> &'static str {
        match self {
            Numeral::One => "I",
            Numeral::Two => "II",
            Numeral::Three => "III",
            Numeral::Four => "IV",
            Numeral::Five => "V",
            Numeral::Six => "VI",
            Numeral::Seven => "VII",
            Numeral::Eight => "VIII",
            Numeral::Nine => "IX",
            Numeral::Ten => "X",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// 掃描順序固定為 + - * /，這是偏好順序而非位置順序
    pub const SCAN_ORDER: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 分詞結果：[運算元1, 運算元2, 運算子]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub lhs: String,
    pub rhs: String,
    pub operator: Operator,
}

/// 已驗證的運算請求，兩個運算元必定屬於同一數字系統
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub kind: NumeralKind,
    pub lhs: Numeral,
    pub rhs: Numeral,
    pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Arabic(i64),
    Roman { value: i64, numeral: String },
}

impl Outcome {
    pub fn kind(&self) -> NumeralKind {
        match self {
            Outcome::Arabic(_) => NumeralKind::Arabic,
            Outcome::Roman { .. } => NumeralKind::Roman,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Outcome::Arabic(value) => *value,
            Outcome::Roman { value, .. } => *value,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Arabic(value) => write!(f, "{}", value),
            Outcome::Roman { numeral, .. } => write!(f, "{}", numeral),
        }
    }
}

/// `--format json` 的輸出格式
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalcReport {
    pub input: String,
    pub kind: NumeralKind,
    pub value: i64,
    pub result: String,
}

impl CalcReport {
    pub fn new(input: &str, outcome: &Outcome) -> Self {
        Self {
            input: input.to_string(),
            kind: outcome.kind(),
            value: outcome.value(),
            result: outcome.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_uses_ordinal_position() {
        assert_eq!(NumeralKind::Roman.lookup("VI"), Some(Numeral::Six));
        assert_eq!(NumeralKind::Arabic.lookup("10"), Some(Numeral::Ten));
        assert_eq!(NumeralKind::Roman.lookup("XI"), None);
        assert_eq!(NumeralKind::Arabic.lookup("0"), None);
        assert_eq!(NumeralKind::Arabic.lookup("V"), None);
    }

    #[test]
    fn test_tables_have_no_shared_symbols() {
        for numeral in Numeral::ALL {
            assert_eq!(NumeralKind::Roman.lookup(numeral.arabic()), None);
            assert_eq!(NumeralKind::Arabic.lookup(numeral.roman()), None);
        }
    }

    #[test]
    fn test_ordinals_are_one_based_positions() {
        for (index, numeral) in Numeral::ALL.iter().enumerate() {
            assert_eq!(numeral.ordinal(), index as i64 + 1);
        }
    }

    #[test]
    fn test_report_serializes_lowercase_kind() {
        let outcome = Outcome::Roman {
            value: 3,
            numeral: "III".to_string(),
        };
        let json = serde_json::to_value(CalcReport::new("X / III", &outcome)).unwrap();
        assert_eq!(json["kind"], "roman");
        assert_eq!(json["value"], 3);
        assert_eq!(json["result"], "III");
    }
}
