//! # Weblog Parser
//!
//! HTTP 服务器 combined 格式访问日志的单行解析库。
//!
//! ## 功能特性
//!
//! - **单行无状态**: 每次调用只处理一行，调用之间不保留任何状态
//! - **容错**: 无法识别的行被跳过并写一条警告，不会中断后续处理
//! - **强类型输出**: 两个必有字段加两个可选字段，而不是动态 map
//! - **显式诊断**: 警告写入构造时传入的 [`DiagnosticSink`]，默认转发到 `tracing`
//!
//! ## 快速开始
//!
//! ```rust
//! use weblog_parser::{LineParser, MemorySink, WeblogParser};
//!
//! let parser = WeblogParser::with_sink(MemorySink::new());
//!
//! let line = br#"203.0.113.7 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 2326 "http://example.com/" "Mozilla/5.0" "198.51.100.2""#;
//! let record = parser.parse_line(line).unwrap().unwrap();
//!
//! assert_eq!(record.host, "203.0.113.7");
//! assert_eq!(record.ts.to_string(), "2023-10-10 13:55:36");
//! assert_eq!(record.user_agent.as_deref(), Some("Mozilla/5.0"));
//! assert_eq!(record.x_forwarded_for.as_deref(), Some("198.51.100.2"));
//!
//! // 无法识别的行：返回 None，并写入一条警告
//! assert_eq!(parser.parse_line(b"not a log line").unwrap(), None);
//! assert_eq!(parser.sink().len(), 1);
//! ```
//!
//! ## 日志格式
//!
//! ```text
//! addr identity username [datetime] "request" status size "referer" "useragent" ["x_forwarded_for"]
//! ```
//!
//! 时间字段只取第一个空白之前的部分，按 `%d/%b/%Y:%H:%M:%S` 解析，时区被丢弃。
//! `identity`、`username`、`request`、`status`、`size`、`referer` 参与匹配但不输出。

pub mod error;
pub mod parser;
pub mod record;
pub mod sink;

pub use error::ParseError;
pub use parser::{LineParser, Records, WeblogParser, parse_line, parse_str, try_parse_line};
pub use record::LogRecord;
pub use sink::{DiagnosticSink, MemorySink, TracingSink};
