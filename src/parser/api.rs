//! 便捷 API 函数
//!
//! 提供了一组不需要显式构造解析器的高层 API，诊断统一输出到 `tracing`。

use crate::error::ParseError;
use crate::parser::parse_functions;
use crate::parser::weblog_parser::{LineParser, WeblogParser};
use crate::record::LogRecord;

/// 解析一行，无法识别的行写一条 `tracing` 警告并返回 `Ok(None)`
///
/// # 示例
///
/// ```
/// use weblog_parser::parse_line;
///
/// let line = br#"127.0.0.1 - - [01/Jan/2022:00:00:00 +0000] "GET / HTTP/1.1" 200 10 "-" "-""#;
/// let record = parse_line(line).unwrap().unwrap();
///
/// assert_eq!(record.host, "127.0.0.1");
/// assert_eq!(record.ts.to_string(), "2022-01-01 00:00:00");
/// assert_eq!(record.keys(), vec!["host", "ts"]);
///
/// assert_eq!(parse_line(b"not a log line"), Ok(None));
/// ```
pub fn parse_line(line: &[u8]) -> Result<Option<LogRecord>, ParseError> {
    WeblogParser::new().parse_line(line)
}

/// 严格解析一行，不写诊断
pub fn try_parse_line(line: &[u8]) -> Result<LogRecord, ParseError> {
    parse_functions::parse_line_bytes(line)
}

/// 解析已经是文本的一行，与 [`parse_line`] 行为相同但不会出现编码错误
pub fn parse_str(line: &str) -> Option<LogRecord> {
    WeblogParser::new().parse_str(line)
}
