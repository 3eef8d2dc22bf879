//! 解析器使用的常量定义
//!
//! 定义了 combined 日志格式的行模式、时间格式、占位符以及输出键名。

use once_cell::sync::Lazy;
use regex::Regex;

/// combined 日志格式的整行模式
///
/// 各字段以分隔符取反匹配：空格分隔的字段为 `[^ ]*`，时间为 `[^\]]*`，
/// 引号字段为 `[^"]*`。第四个引号字段（`x_forwarded_for`）可选，
/// 行尾允许残留的 `\r`、`\n` 或 `\r\n`。
pub const LINE_PATTERN: &str = concat!(
    r#"^(?P<addr>[^ ]*) (?P<identity>[^ ]*) (?P<username>[^ ]*) "#,
    r#"\[(?P<datetime>[^\]]*)\] "(?P<request>[^"]*)" (?P<status>[^ ]*) (?P<size>[^ ]*) "#,
    r#""(?P<referer>[^"]*)" "(?P<useragent>[^"]*)"(?: "(?P<x_forwarded_for>[^"]*)")?\r?\n?$"#,
);

/// 预编译的行模式，首次使用时编译，之后在所有线程间共享
pub static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINE_PATTERN).expect("LINE_PATTERN must be a valid regex"));

/// 时间字段格式（不含时区）
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// 表示“无值”的占位符
pub const PLACEHOLDER: &str = "-";

// 捕获组名称

pub const ADDR_GROUP: &str = "addr";
pub const DATETIME_GROUP: &str = "datetime";
pub const USERAGENT_GROUP: &str = "useragent";
pub const XFF_GROUP: &str = "x_forwarded_for";
