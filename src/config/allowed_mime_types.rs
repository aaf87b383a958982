// ==========================================
// 心愿单 CSV 导入 - 允许的文件类型
// ==========================================
// 职责: 导入文件 MIME 类型白名单（构造后只读）
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认允许的 MIME 类型
pub const DEFAULT_ALLOWED_MIME_TYPES: [&str; 2] = ["text/csv", "text/plain"];

/// MIME 类型白名单
///
/// 匹配规则: 忽略大小写，忽略 `; charset=...` 等参数部分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMimeTypes(Vec<String>);

impl AllowedMimeTypes {
    pub fn new<I, S>(mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = mime_types
            .into_iter()
            .map(|m| essence(m.as_ref()))
            .filter(|m| !m.is_empty())
            .collect();
        Self(normalized)
    }

    /// 是否允许该类型
    pub fn allows(&self, mime_type: &str) -> bool {
        let detected = essence(mime_type);
        self.0.iter().any(|allowed| *allowed == detected)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AllowedMimeTypes {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_MIME_TYPES)
    }
}

/// 取 MIME 主体部分（type/subtype），小写
fn essence(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
