//! 诊断输出
//!
//! 解析器在跳过一行时会向诊断接收端写入一条警告。接收端在构造解析器时显式传入，
//! 生命周期由调用方管理：
//!
//! - [`TracingSink`]：转发到 `tracing::warn!`，订阅者由宿主程序安装
//! - [`MemorySink`]：把消息收集在内存中，便于调用方把诊断当作数据处理

use std::sync::{Mutex, MutexGuard};

/// 诊断接收端
///
/// 实现必须可以跨线程共享，解析器本身不持有任何可变状态。
pub trait DiagnosticSink: Send + Sync {
    /// 写入一条警告
    fn warn(&self, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// 基于 `tracing` 的默认接收端
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "weblog_parser", "{}", message);
    }
}

/// 内存接收端
///
/// 按写入顺序保存所有警告。
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已收集消息的快照
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 清空已收集的消息
    pub fn clear(&self) {
        self.lock().clear();
    }

    // 持锁线程 panic 后消息仍然可读
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
