//! Parser 模块 - 解析 combined 格式的访问日志行
//!
//! 此模块提供了完整的单行解析功能，包括：
//! - 行模式与时间格式常量
//! - 纯解析函数
//! - `LineParser` trait 与 `WeblogParser` 实现
//! - 便捷 API 函数

mod api;
pub mod constants;
pub(crate) mod parse_functions;
pub mod weblog_parser;

pub use api::{parse_line, parse_str, try_parse_line};
pub use weblog_parser::{LineParser, Records, WeblogParser};
