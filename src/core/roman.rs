use crate::utils::error::{CalcError, Result};

const ROMAN_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// 貪婪法轉羅馬數字。0 得到空字串，負數回傳 `InvalidInput`。
pub fn to_roman(value: i64) -> Result<String> {
    if value < 0 {
        return Err(CalcError::invalid_input(format!(
            "Roman numerals cannot represent {}",
            value
        )));
    }

    let mut remaining = value;
    let mut roman = String::new();
    for (amount, symbol) in ROMAN_TABLE {
        while remaining >= amount {
            remaining -= amount;
            roman.push_str(symbol);
        }
    }

    Ok(roman)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 逐組比對符號還原數值
    fn parse_groups(roman: &str) -> i64 {
        let mut rest = roman;
        let mut total = 0;
        for (amount, symbol) in ROMAN_TABLE {
            while let Some(tail) = rest.strip_prefix(symbol) {
                total += amount;
                rest = tail;
            }
        }
        assert!(rest.is_empty(), "unparsed tail in {}", roman);
        total
    }

    #[test]
    fn test_known_values() {
        assert_eq!(to_roman(0).unwrap(), "");
        assert_eq!(to_roman(3).unwrap(), "III");
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(14).unwrap(), "XIV");
        assert_eq!(to_roman(19).unwrap(), "XIX");
        assert_eq!(to_roman(49).unwrap(), "XLIX");
        assert_eq!(to_roman(100).unwrap(), "C");
        assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!(to_roman(-3), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_groups_reproduce_value() {
        for n in 0..=100 {
            assert_eq!(parse_groups(&to_roman(n).unwrap()), n);
        }
    }
}
