//! 解析结果类型
//!
//! 定义了单行访问日志解析后输出的 [`LogRecord`]。

use chrono::NaiveDateTime;

/// 访问日志记录
///
/// 表示一行 combined 格式日志中被保留下来的字段。`host` 与 `ts` 总是存在，
/// `user_agent` 与 `x_forwarded_for` 仅在原始行中有实际取值时存在。
///
/// 启用 `serde` feature 后，序列化使用输出键名 `host`、`ts`、`user-agent`、
/// `x-forwarded-for`，缺失的可选字段不会输出。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogRecord {
    /// 客户端地址，原样保留（不校验 IP 或主机名）
    pub host: String,

    /// 请求时间，不带时区（原始偏移量被丢弃而非换算）
    pub ts: NaiveDateTime,

    /// User-Agent，值为 `-` 时不存在
    #[cfg_attr(
        feature = "serde",
        serde(rename = "user-agent", default, skip_serializing_if = "Option::is_none")
    )]
    pub user_agent: Option<String>,

    /// X-Forwarded-For，缺失、为空或为 `-` 时不存在
    #[cfg_attr(
        feature = "serde",
        serde(rename = "x-forwarded-for", default, skip_serializing_if = "Option::is_none")
    )]
    pub x_forwarded_for: Option<String>,
}

impl LogRecord {
    /// 当前记录包含的输出键，顺序固定为 `host, ts, user-agent, x-forwarded-for`
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["host", "ts"];
        if self.user_agent.is_some() {
            keys.push("user-agent");
        }
        if self.x_forwarded_for.is_some() {
            keys.push("x-forwarded-for");
        }
        keys
    }

    /// 包含的键数量（2 到 4 之间）
    pub fn field_count(&self) -> usize {
        2 + usize::from(self.user_agent.is_some()) + usize::from(self.x_forwarded_for.is_some())
    }
}
