//! 核心解析函数
//!
//! 纯函数：匹配行模式、解析时间、组装记录。不写诊断，失败以 [`ParseError`] 返回。

use chrono::NaiveDateTime;
use regex::Captures;

use crate::error::ParseError;
use crate::parser::constants::*;
use crate::record::LogRecord;

/// 将一行字节解析为 [`LogRecord`]
///
/// # 错误
///
/// - `InvalidEncoding` - 输入不是合法 UTF-8
/// - `UnrecognizedLineFormat` - 行不符合 combined 格式
/// - `UnparsableTimestamp` - 时间字段无法解析
///
/// # 示例
///
/// ```
/// use weblog_parser::try_parse_line;
///
/// let line = br#"127.0.0.1 - - [01/Jan/2022:00:00:00 +0000] "GET / HTTP/1.1" 200 10 "-" "curl/8.0""#;
/// let record = try_parse_line(line).unwrap();
///
/// assert_eq!(record.host, "127.0.0.1");
/// assert_eq!(record.user_agent.as_deref(), Some("curl/8.0"));
/// assert!(record.x_forwarded_for.is_none());
/// ```
pub fn parse_line_bytes(line: &[u8]) -> Result<LogRecord, ParseError> {
    let text = decode_line(line)?;
    parse_line_str(text)
}

/// 将一行文本解析为 [`LogRecord`]
pub fn parse_line_str(line: &str) -> Result<LogRecord, ParseError> {
    let caps = LINE_RE
        .captures(line)
        .ok_or_else(|| ParseError::UnrecognizedLineFormat {
            raw: line.to_string(),
        })?;

    let datetime = group(&caps, DATETIME_GROUP).unwrap_or_default();
    let ts = parse_timestamp(datetime).ok_or_else(|| ParseError::UnparsableTimestamp {
        raw: line.to_string(),
    })?;

    Ok(LogRecord {
        host: group(&caps, ADDR_GROUP).unwrap_or_default().to_string(),
        ts,
        user_agent: group(&caps, USERAGENT_GROUP)
            .filter(|ua| *ua != PLACEHOLDER)
            .map(str::to_string),
        x_forwarded_for: group(&caps, XFF_GROUP)
            .filter(|xff| !xff.is_empty() && *xff != PLACEHOLDER)
            .map(str::to_string),
    })
}

/// 解析时间字段
///
/// 只取第一个空白之前的部分（丢弃时区），按 [`TIMESTAMP_FORMAT`] 解析。
/// 字段为空或只有空白、年份不是 4 位数字时返回 `None`。
#[inline]
pub(crate) fn parse_timestamp(datetime: &str) -> Option<NaiveDateTime> {
    let token = datetime.split_whitespace().next()?;
    if !has_four_digit_year(token) {
        return None;
    }
    NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT).ok()
}

/// chrono 的 `%Y` 也接受不足 4 位的年份，这里要求恰好 4 位
#[inline]
fn has_four_digit_year(token: &str) -> bool {
    token
        .splitn(3, '/')
        .nth(2)
        .and_then(|rest| rest.split(':').next())
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

/// UTF-8 解码，失败时保留合法前缀长度和有损解码后的原文
#[inline]
pub(crate) fn decode_line(line: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(line).map_err(|e| ParseError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
        raw: String::from_utf8_lossy(line).into_owned(),
    })
}

#[inline]
fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}
