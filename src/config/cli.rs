use crate::core::InputSource;
use crate::utils::error::Result;
use std::io::BufRead;

/// 從 stdin 讀取一行，去掉結尾換行
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinSource {
    fn read_line(&self) -> Result<String> {
        let stdin = std::io::stdin();
        read_first_line(stdin.lock())
    }
}

/// 固定輸入，給 `--expr` 與測試使用
#[derive(Debug, Clone)]
pub struct StaticSource {
    line: String,
}

impl StaticSource {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

impl InputSource for StaticSource {
    fn read_line(&self) -> Result<String> {
        Ok(self.line.clone())
    }
}

/// 讀到 EOF 而沒有任何內容時回傳空字串，交由分詞器判定為無效輸入
pub fn read_first_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_only_first_line() {
        let line = read_first_line(Cursor::new("IV * II\r\n1 + 1\n")).unwrap();
        assert_eq!(line, "IV * II");
    }

    #[test]
    fn test_empty_stream_yields_empty_line() {
        let line = read_first_line(Cursor::new("")).unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("3 - 7");
        assert_eq!(source.read_line().unwrap(), "3 - 7");
    }
}
