// ==========================================
// 心愿单 CSV 导入 - Flash 消息
// ==========================================

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

/// 提示消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Info => "info",
            FlashKind::Warning => "warning",
            FlashKind::Error => "error",
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

// ==========================================
// FlashBag Trait
// ==========================================
// 用途: 向当前请求的用户展示一次性提示
// 实现者: RequestFlashBag（内存实现）
pub trait FlashBag: Send + Sync {
    fn add(&self, kind: FlashKind, message: String);
}

// ==========================================
// RequestFlashBag - 请求级内存实现
// ==========================================
#[derive(Debug, Default)]
pub struct RequestFlashBag {
    messages: Mutex<Vec<FlashMessage>>,
}

impl RequestFlashBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定级别的消息（不清空）
    pub fn peek(&self, kind: FlashKind) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.message.clone())
            .collect()
    }

    /// 全部消息（不清空）
    pub fn all(&self) -> Vec<FlashMessage> {
        self.lock().clone()
    }

    /// 取出并清空全部消息
    pub fn take_all(&self) -> Vec<FlashMessage> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // 锁中毒时直接取回内部数据
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<FlashMessage>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FlashBag for RequestFlashBag {
    fn add(&self, kind: FlashKind, message: String) {
        tracing::debug!(kind = %kind, message = %message, "添加 flash 消息");
        self.lock().push(FlashMessage { kind, message });
    }
}
