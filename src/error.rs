//! 错误类型定义
//!
//! 定义了解析单行访问日志时可能出现的所有错误类型。

use thiserror::Error;

/// 解析错误类型
///
/// 前两种错误只影响当前行，调用方跳过该行继续处理即可；
/// 编码错误属于调用方的前置条件被破坏，需要向上传播。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 行不符合 combined 日志格式
    #[error("unrecognized line format: {raw:?}")]
    UnrecognizedLineFormat {
        /// 原始行内容（有损解码）
        raw: String,
    },

    /// 行格式正确，但时间字段无法按 `%d/%b/%Y:%H:%M:%S` 解析
    #[error("unparsable timestamp in line: {raw:?}")]
    UnparsableTimestamp {
        /// 原始行内容（有损解码）
        raw: String,
    },

    /// 输入字节不是合法的 UTF-8
    #[error("invalid UTF-8 at byte {valid_up_to}: {raw:?}")]
    InvalidEncoding {
        /// 合法前缀的长度
        valid_up_to: usize,
        /// 原始行内容（有损解码）
        raw: String,
    },
}

impl ParseError {
    /// 是否为可跳过的单行错误
    ///
    /// `UnrecognizedLineFormat` 与 `UnparsableTimestamp` 返回 `true`，
    /// `InvalidEncoding` 返回 `false`。
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ParseError::InvalidEncoding { .. })
    }

    /// 错误对应的原始行内容
    pub fn raw(&self) -> &str {
        match self {
            ParseError::UnrecognizedLineFormat { raw }
            | ParseError::UnparsableTimestamp { raw }
            | ParseError::InvalidEncoding { raw, .. } => raw,
        }
    }
}
